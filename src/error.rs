//! Error taxonomy for routing and spec lookups.
//!
//! Every failure is terminal; callers either receive a complete value or one
//! of these variants. File-level failures carry the `LookupStage` that
//! produced them so a missing routing file is distinguishable from a missing
//! spec document.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StepSpecError>;

/// Which document a file-level failure belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LookupStage {
    Routing,
    Spec,
}

impl LookupStage {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupStage::Routing => "routing",
            LookupStage::Spec => "spec",
        }
    }
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StepSpecError {
    #[error("failed to get absolute path for {path}: {reason}")]
    PathExpansionFailed { path: String, reason: String },

    #[error("failed to read {stage} file {}", path.display())]
    FileReadFailed {
        stage: LookupStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {stage} file {}", path.display())]
    JsonParseFailed {
        stage: LookupStage,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("specified collection ({0}) not found in routing")]
    CollectionNotFound(String),

    #[error("no step found for id: {0}")]
    StepNotFound(String),

    #[error("no step version found for (id: {step_id}) (version: {version})")]
    VersionNotFound { step_id: String, version: String },
}

impl StepSpecError {
    pub(crate) fn expansion(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StepSpecError::PathExpansionFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// The stage for file-level failures; `None` for lookup misses and
    /// expansion errors.
    pub fn stage(&self) -> Option<LookupStage> {
        match self {
            StepSpecError::FileReadFailed { stage, .. }
            | StepSpecError::JsonParseFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}
