//! Value module - In-memory representation of YAML/JSON values.
//!
//! Used for the free-form parts of configuration entities (resource sources,
//! job plans) so that they compare structurally and serialize deterministically.

mod value;

pub use value::*;
