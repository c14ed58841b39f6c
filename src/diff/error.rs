//! Error types for reconciliation and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// DiffError represents a failure while indexing, serializing or writing diffs.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("serialization failed for {kind} {name}")]
    Serialize {
        kind: &'static str,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to load {path:?}: {message}")]
    Load { path: PathBuf, message: String },

    #[error("failed to write diff: {0}")]
    Io(#[from] std::io::Error),
}

impl DiffError {
    /// Creates a duplicate name error.
    pub fn duplicate_name(kind: &'static str, name: impl Into<String>) -> Self {
        DiffError::DuplicateName {
            kind,
            name: name.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialize(kind: &'static str, name: impl Into<String>, source: serde_yaml::Error) -> Self {
        DiffError::Serialize {
            kind,
            name: name.into(),
            source,
        }
    }

    /// Creates a load error.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DiffError::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns true if the error only affects the rendering of a single diff.
    pub fn is_isolated(&self) -> bool {
        matches!(self, DiffError::Serialize { .. })
    }
}
