//! Routing table: collection id to on-disk directory token.

use crate::config::StepmanConfig;
use crate::decode::decode_json_file_or_default;
use crate::error::{LookupStage, Result, StepSpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Snapshot of the routing file. Re-read on every resolution.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingTable {
    routes: BTreeMap<String, String>,
}

impl RoutingTable {
    /// Read and parse the configured routing file.
    pub fn load(config: &StepmanConfig) -> Result<Self> {
        let path = config.routing_file_path()?;
        decode_json_file_or_default(&path, LookupStage::Routing)
    }

    /// Directory token for a collection, if routed.
    pub fn get(&self, collection_id: &str) -> Option<&str> {
        self.routes.get(collection_id).map(String::as_str)
    }

    /// Routed collection ids in sorted order.
    pub fn collection_ids(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(id, token)| (id.as_str(), token.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl FromIterator<(String, String)> for RoutingTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

/// Resolve a collection id to the absolute path of its `spec.json`.
pub fn resolve_spec_path(config: &StepmanConfig, collection_id: &str) -> Result<PathBuf> {
    let table = RoutingTable::load(config)?;
    let token = table
        .get(collection_id)
        .ok_or_else(|| StepSpecError::CollectionNotFound(collection_id.to_string()))?;
    let spec_path = config.spec_file_path(token)?;
    tracing::debug!(
        collection = collection_id,
        token,
        path = %spec_path.display(),
        "resolved collection spec path"
    );
    Ok(spec_path)
}
