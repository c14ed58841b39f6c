//! # Pipeline Diff
//!
//! Structural differences between two versions of a pipeline configuration.
//!
//! Entities of one kind are matched by name across an old and a new collection,
//! classified as added, removed or changed, and each difference is rendered as a
//! colored line diff of the entities' YAML form.
//!
//! ## Modules
//!
//! - [`entity`] - The named-entity contract and the name-indexed collection
//! - [`diff`] - Reconciliation, line differencing and rendering
//! - [`value`] - Dynamic YAML/JSON values for free-form configuration fields
//! - [`config`] - Pipeline configuration kinds and whole-pipeline diffs

pub mod config;
pub mod diff;
pub mod entity;
pub mod value;

pub use config::{diff_pipelines, PipelineConfig, PipelineReport};
pub use diff::{
    diff_lines, reconcile, serialize, Delta, Diff, DiffError, Diffs, LineDiff, RenderOptions,
    RenderReport, Renderer, Summary,
};
pub use entity::{Entity, Index};
pub use value::Value;
