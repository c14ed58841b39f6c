//! Diff module - Reconciliation and rendering of entity differences.
//!
//! Two indices of the same entity kind are reconciled into [`Diffs`], and each
//! [`Diff`] is rendered as a colored line diff of the entities' YAML form.

mod error;
mod lines;
mod reconciler;
mod render;
mod serializer;


pub use error::*;
pub use lines::*;
pub use reconciler::*;
pub use render::*;
pub use serializer::*;
