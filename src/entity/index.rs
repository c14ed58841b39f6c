//! Name-indexed collections of entities.

use super::Entity;
use crate::diff::DiffError;
use std::collections::HashMap;

/// Index is an ordered collection of entities of one kind with lookup by name.
///
/// Names are unique within an index; construction rejects duplicates so that
/// a lookup always resolves to exactly one entity.
#[derive(Debug, Clone)]
pub struct Index<T> {
    entities: Vec<T>,
    by_name: HashMap<String, usize>,
}

impl<T: Entity> Index<T> {
    /// Builds an index over the given entities, keeping their order.
    pub fn new(entities: Vec<T>) -> Result<Self, DiffError> {
        let mut by_name = HashMap::with_capacity(entities.len());
        for (pos, entity) in entities.iter().enumerate() {
            if by_name.insert(entity.name().to_string(), pos).is_some() {
                return Err(DiffError::duplicate_name(T::KIND, entity.name()));
            }
        }
        Ok(Index { entities, by_name })
    }

    /// Returns the entity with the given name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&pos| &self.entities[pos])
    }

    /// Returns the entity in this index that shares a name with `entity`.
    pub fn find_equivalent(&self, entity: &T) -> Option<&T> {
        self.get(entity.name())
    }

    /// Returns true if an entity with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns an iterator over the entities in collection order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    /// Returns the entity names in collection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Consumes the index, returning the entities in collection order.
    pub fn into_inner(self) -> Vec<T> {
        self.entities
    }
}

impl<T> Default for Index<T> {
    fn default() -> Self {
        Index {
            entities: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Index<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
