//! Schemas for a collection's `spec.json`.
//!
//! The same file is decoded two ways. `steps` is the flat view used for step
//! version lookups: just titles, descriptions and inputs. `collection` is the
//! full step-library model. The two schemas share no types.

pub mod collection;
pub mod steps;

pub use collection::{
    DownloadLocation, EnvironmentItem, StepCollectionModel, StepGroup, StepGroupInfo, StepModel,
    StepSource,
};
pub use steps::{ResolvedStepVersion, SpecDocument, StepInfo, StepInput, StepVersion};
