use std::slice;

use graph::AccessPath;
use serde::Serialize;

/// Append-only, discovery-ordered collection of matching access paths.
///
/// Serialises as a JSON array of arrays of member names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Matches {
    paths: Vec<AccessPath>,
}

impl Matches {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: AccessPath) {
        self.paths.push(path);
    }

    /// Iterates over the matches in discovery order.
    pub fn iter(&self) -> slice::Iter<'_, AccessPath> {
        self.paths.iter()
    }

    /// Number of matches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Reports whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Reports whether `path` was recorded.
    #[must_use]
    pub fn contains(&self, path: &AccessPath) -> bool {
        self.paths.contains(path)
    }

    /// Returns the matches as a vector, preserving order.
    #[must_use]
    pub fn into_vec(self) -> Vec<AccessPath> {
        self.paths
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a AccessPath;
    type IntoIter = slice::Iter<'a, AccessPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Matches {
    type Item = AccessPath;
    type IntoIter = std::vec::IntoIter<AccessPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
