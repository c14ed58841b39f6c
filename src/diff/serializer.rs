//! Canonical text form of entities.

use super::DiffError;
use crate::entity::Entity;

/// Serializes an entity to the YAML text that line diffs are computed over.
///
/// Fields appear in declaration order and maps in key order, so structurally
/// equal entities always produce identical text. An absent entity is empty
/// text.
pub fn serialize<T: Entity>(entity: Option<&T>) -> Result<String, DiffError> {
    match entity {
        None => Ok(String::new()),
        Some(entity) => serde_yaml::to_string(entity)
            .map_err(|e| DiffError::serialize(T::KIND, entity.name(), e)),
    }
}
