//! Generic "open a JSON file and decode it into a shape" primitive.
//!
//! This is the only code the routing table and the two spec schemas share.
//! Each call opens its own handle; it is dropped on every return path.

use crate::error::{LookupStage, Result, StepSpecError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub(crate) fn decode_json_file<T: DeserializeOwned>(path: &Path, stage: LookupStage) -> Result<T> {
    let file = File::open(path).map_err(|source| StepSpecError::FileReadFailed {
        stage,
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        // Reads that fail mid-stream (e.g. the path is a directory) are I/O
        // failures, not malformed documents.
        if source.is_io() {
            StepSpecError::FileReadFailed {
                stage,
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            StepSpecError::JsonParseFailed {
                stage,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!(stage = %stage, path = %path.display(), "decoded json document");
    Ok(value)
}

/// Like `decode_json_file`, but a document that is the literal `null`
/// decodes to the empty shape.
pub(crate) fn decode_json_file_or_default<T>(path: &Path, stage: LookupStage) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let value: Option<T> = decode_json_file(path, stage)?;
    Ok(value.unwrap_or_default())
}

/// Treat an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
