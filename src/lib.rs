//! Read-only lookups over a local stepman data directory.
//!
//! A routing file maps step collection ids to directory tokens; each token
//! names a collection directory holding `spec/spec.json`. `StepLibrary`
//! resolves ids to spec paths, decodes whole collections, and selects
//! individual step versions (defaulting to the latest). Nothing is cached and
//! nothing is written.

pub mod config;
mod decode;
pub mod error;
pub mod library;
pub mod routing;
pub mod spec;

pub use config::{DEFAULT_STEPMAN_ROOT, StepmanConfig, expand_path};
pub use error::{LookupStage, Result, StepSpecError};
pub use library::StepLibrary;
pub use routing::{RoutingTable, resolve_spec_path};
pub use spec::{
    DownloadLocation, EnvironmentItem, ResolvedStepVersion, SpecDocument, StepCollectionModel,
    StepGroup, StepGroupInfo, StepInfo, StepInput, StepModel, StepSource, StepVersion,
};
