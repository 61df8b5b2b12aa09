//! Full step-library model for `spec.json`.
//!
//! Mirrors the document a step library publishes: collection metadata, step
//! groups with their versions, and per-version step definitions. Only JSON
//! shape is enforced here; required-field and semantic checks belong to the
//! tooling that produces the library.

use crate::decode::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

const OPTS_KEY: &str = "opts";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepCollectionModel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub format_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated_at_timestamp: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steplib_source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub download_locations: Vec<DownloadLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_download_base_uri: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: BTreeMap<String, StepGroup>,
}

/// Where the library's step sources can be fetched from.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DownloadLocation {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
}

/// All published versions of one step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<StepGroupInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_version_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: BTreeMap<String, StepModel>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StepGroupInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removal_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecate_notes: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_urls: BTreeMap<String, String>,
}

/// One version of a step as published in the library.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_code_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<StepSource>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_urls: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_os_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_type_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_requires_admin_user: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_always_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_skippable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_if: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inputs: Vec<EnvironmentItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub outputs: Vec<EnvironmentItem>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StepSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

/// An input or output declaration: `{"<KEY>": <value>, "opts": {...}}`.
///
/// Kept as the raw object so unknown option fields survive a round trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentItem(pub Map<String, Value>);

impl EnvironmentItem {
    /// The declared key and its value; the first non-`opts` entry.
    pub fn key_value(&self) -> Option<(&str, &Value)> {
        self.0
            .iter()
            .find(|(key, _)| key.as_str() != OPTS_KEY)
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn key(&self) -> Option<&str> {
        self.key_value().map(|(key, _)| key)
    }

    pub fn opts(&self) -> Option<&Map<String, Value>> {
        self.0.get(OPTS_KEY).and_then(Value::as_object)
    }

    /// Look up a single option such as `title` or `is_required`.
    pub fn opt(&self, name: &str) -> Option<&Value> {
        self.opts()?.get(name)
    }
}

impl StepCollectionModel {
    /// Step ids in sorted order.
    pub fn step_ids(&self) -> impl Iterator<Item = &str> {
        self.steps.keys().map(String::as_str)
    }

    pub fn step(&self, step_id: &str) -> Option<&StepGroup> {
        self.steps.get(step_id)
    }

    /// The latest version string of a step and its definition, when the
    /// group's `latest_version_number` points at a published version.
    pub fn latest_version(&self, step_id: &str) -> Option<(&str, &StepModel)> {
        let group = self.step(step_id)?;
        let version = group.latest_version_number.as_str();
        group.versions.get(version).map(|step| (version, step))
    }
}
