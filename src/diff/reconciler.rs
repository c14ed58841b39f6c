//! Reconciliation of two entity collections.

use crate::entity::{Entity, Index};
use std::fmt;

/// Diff is the difference for a single entity between two collections.
#[derive(Debug, PartialEq)]
pub enum Diff<'a, T> {
    /// The entity only exists in the new collection.
    Added(&'a T),
    /// The entity only exists in the old collection.
    Removed(&'a T),
    /// The entity exists in both collections with different contents.
    Changed { before: &'a T, after: &'a T },
}

impl<T> Clone for Diff<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Diff<'_, T> {}

impl<'a, T: Entity> Diff<'a, T> {
    /// Returns the old version of the entity, if any.
    pub fn before(&self) -> Option<&'a T> {
        match *self {
            Diff::Added(_) => None,
            Diff::Removed(before) | Diff::Changed { before, .. } => Some(before),
        }
    }

    /// Returns the new version of the entity, if any.
    pub fn after(&self) -> Option<&'a T> {
        match *self {
            Diff::Removed(_) => None,
            Diff::Added(after) | Diff::Changed { after, .. } => Some(after),
        }
    }

    /// Returns the name of the entity this diff is about.
    pub fn name(&self) -> &'a str {
        match *self {
            Diff::Added(e) | Diff::Removed(e) | Diff::Changed { before: e, .. } => e.name(),
        }
    }
}

/// Diffs is the ordered result of reconciling two collections.
///
/// Removals and changes come first, in old-collection order, followed by
/// additions in new-collection order.
#[derive(Debug, PartialEq)]
pub struct Diffs<'a, T> {
    diffs: Vec<Diff<'a, T>>,
}

impl<'a, T: Entity> Diffs<'a, T> {
    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Returns an iterator over the diffs in order.
    pub fn iter(&self) -> impl Iterator<Item = &Diff<'a, T>> {
        self.diffs.iter()
    }

    /// Returns the names of added entities.
    pub fn added(&self) -> Vec<&'a str> {
        self.names_where(|d| matches!(d, Diff::Added(_)))
    }

    /// Returns the names of removed entities.
    pub fn removed(&self) -> Vec<&'a str> {
        self.names_where(|d| matches!(d, Diff::Removed(_)))
    }

    /// Returns the names of changed entities.
    pub fn changed(&self) -> Vec<&'a str> {
        self.names_where(|d| matches!(d, Diff::Changed { .. }))
    }

    /// Counts the diffs by classification.
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for diff in &self.diffs {
            match diff {
                Diff::Added(_) => summary.added += 1,
                Diff::Removed(_) => summary.removed += 1,
                Diff::Changed { .. } => summary.changed += 1,
            }
        }
        summary
    }

    fn names_where(&self, pred: impl Fn(&Diff<'a, T>) -> bool) -> Vec<&'a str> {
        self.diffs.iter().filter(|&d| pred(d)).map(|d| d.name()).collect()
    }
}

impl<'a, T> IntoIterator for Diffs<'a, T> {
    type Item = Diff<'a, T>;
    type IntoIter = std::vec::IntoIter<Diff<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

/// Summary counts the entities in each classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

impl Summary {
    /// Returns true if nothing differs.
    pub fn is_same(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.changed == 0
    }

    /// Adds the counts of another summary to this one.
    pub fn merge(&mut self, other: Summary) {
        self.added += other.added;
        self.removed += other.removed;
        self.changed += other.changed;
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} removed, {} changed",
            self.added, self.removed, self.changed
        )
    }
}

/// Compares two collections of the same kind by entity name.
///
/// Entities missing from `new` are removed, entities missing from `old` are
/// added, and entities present in both but not equal are changed. Equal
/// entities produce nothing.
pub fn reconcile<'a, T: Entity>(old: &'a Index<T>, new: &'a Index<T>) -> Diffs<'a, T> {
    let mut diffs = Vec::new();

    for before in old {
        match new.find_equivalent(before) {
            None => diffs.push(Diff::Removed(before)),
            Some(after) if after != before => diffs.push(Diff::Changed { before, after }),
            Some(_) => {}
        }
    }

    for after in new {
        if old.find_equivalent(after).is_none() {
            diffs.push(Diff::Added(after));
        }
    }

    let diffs = Diffs { diffs };
    tracing::debug!(kind = T::KIND, summary = %diffs.summary(), "reconciled collections");
    diffs
}
