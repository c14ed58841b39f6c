//! Entity module - Named, structurally comparable configuration records.
//!
//! This module provides the [`Entity`] contract and the name-indexed
//! collection that reconciliation works on.

mod index;

#[cfg(test)]
pub(crate) mod fixtures;

pub use index::*;

use serde::Serialize;

/// Entity is a configuration record identified by a unique name within its
/// collection.
///
/// Equality must compare every field (derive `PartialEq`); two entities that
/// differ in any nested field are reported as changed.
pub trait Entity: PartialEq + Serialize {
    /// Kind of entity, also used as the default label when rendering.
    const KIND: &'static str;

    /// Returns the identity key of this entity.
    fn name(&self) -> &str;
}

impl<T: Entity> Entity for &T {
    const KIND: &'static str = T::KIND;

    fn name(&self) -> &str {
        T::name(self)
    }
}
