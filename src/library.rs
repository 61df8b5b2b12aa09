//! Entry point for collection and step lookups.
//!
//! A `StepLibrary` holds only configuration. Every call re-reads the routing
//! file and the spec document, so results always reflect what is on disk at
//! call time and concurrent callers share nothing but the filesystem.

use crate::config::StepmanConfig;
use crate::decode::decode_json_file_or_default;
use crate::error::{LookupStage, Result};
use crate::routing::{RoutingTable, resolve_spec_path};
use crate::spec::{ResolvedStepVersion, SpecDocument, StepCollectionModel};
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct StepLibrary {
    config: StepmanConfig,
}

impl StepLibrary {
    pub fn new(config: StepmanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StepmanConfig {
        &self.config
    }

    /// Current contents of the routing file.
    pub fn routing_table(&self) -> Result<RoutingTable> {
        RoutingTable::load(&self.config)
    }

    /// Absolute path of a collection's `spec.json`.
    pub fn spec_path(&self, collection_id: &str) -> Result<PathBuf> {
        resolve_spec_path(&self.config, collection_id)
    }

    /// Decode a collection's spec into the full step-library model.
    pub fn read_collection(&self, collection_id: &str) -> Result<StepCollectionModel> {
        let path = self.spec_path(collection_id)?;
        decode_json_file_or_default(&path, LookupStage::Spec)
    }

    /// Look up one version of a step.
    ///
    /// `None` or an empty version selects the step's latest version; the
    /// returned `version` field reports which version was actually used.
    pub fn read_step_version(
        &self,
        collection_id: &str,
        step_id: &str,
        version: Option<&str>,
    ) -> Result<ResolvedStepVersion> {
        let path = self.spec_path(collection_id)?;
        let spec: SpecDocument = decode_json_file_or_default(&path, LookupStage::Spec)?;
        let resolved = spec.resolve(step_id, version)?;
        tracing::debug!(
            collection = collection_id,
            step = step_id,
            requested = version.unwrap_or_default(),
            resolved = %resolved.version,
            "resolved step version"
        );
        Ok(resolved)
    }
}
