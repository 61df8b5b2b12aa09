//! Flat view of `spec.json`: step id -> versions -> title/description/inputs.
//!
//! Absent or `null` fields decode to empty values; a field of the wrong JSON
//! type is a parse failure.

use crate::decode::null_as_default;
use crate::error::{Result, StepSpecError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: BTreeMap<String, StepInfo>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StepInfo {
    #[serde(
        rename = "latest_version_number",
        default,
        deserialize_with = "null_as_default"
    )]
    pub latest_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: BTreeMap<String, StepVersion>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StepVersion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<StepInput>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StepInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value_options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_expand: bool,
}

/// A step version together with the version string that was selected.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedStepVersion {
    pub version: String,
    pub step: StepVersion,
}

impl SpecDocument {
    pub fn step(&self, step_id: &str) -> Option<&StepInfo> {
        self.steps.get(step_id)
    }

    /// Select a step version; `None` or an empty string means the latest.
    pub fn resolve(&self, step_id: &str, version: Option<&str>) -> Result<ResolvedStepVersion> {
        let info = self
            .step(step_id)
            .ok_or_else(|| StepSpecError::StepNotFound(step_id.to_string()))?;
        let effective = match version {
            Some(requested) if !requested.is_empty() => requested,
            _ => info.latest_version.as_str(),
        };
        let step = info
            .versions
            .get(effective)
            .ok_or_else(|| StepSpecError::VersionNotFound {
                step_id: step_id.to_string(),
                version: effective.to_string(),
            })?;
        Ok(ResolvedStepVersion {
            version: effective.to_string(),
            step: step.clone(),
        })
    }
}

impl StepInfo {
    pub fn latest(&self) -> Option<&StepVersion> {
        self.versions.get(&self.latest_version)
    }
}
