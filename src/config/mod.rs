//! Config module - Pipeline configuration kinds and whole-pipeline diffs.

mod kinds;
mod pipeline;

pub use kinds::*;
pub use pipeline::*;
