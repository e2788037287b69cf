//! Set of rule ids switched off for a what-if run

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::RuleId;

/// Rule ids excluded from a simulation run
///
/// Ordered so that persisted scenarios and printed summaries are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisabledSet(BTreeSet<RuleId>);

impl DisabledSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the id was not already present
    pub fn insert(&mut self, id: impl Into<RuleId>) -> bool {
        self.0.insert(id.into())
    }

    /// Returns true if the id was present
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuleId> {
        self.0.iter()
    }

    /// Merge another set into this one
    pub fn extend_from(&mut self, other: &DisabledSet) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl<T: Into<RuleId>> FromIterator<T> for DisabledSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a DisabledSet {
    type Item = &'a RuleId;
    type IntoIter = std::collections::btree_set::Iter<'a, RuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
