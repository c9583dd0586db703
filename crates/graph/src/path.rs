//! crates/graph/src/path.rs
//! Owned access paths from a namespace root to a discovered node.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Ordered sequence of member names leading from a root to a node.
///
/// Paths are values: extending a path with [`child`](Self::child) produces a
/// fresh path and leaves the original untouched, so a path recorded as a match
/// can never be altered by later exploration below it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPath {
    segments: Vec<String>,
}

impl AccessPath {
    /// Returns the empty path, which designates the root itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Builds a path from its segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new path with `name` appended.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(name.to_owned());
        Self { segments }
    }

    /// Returns the individual member names.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the terminal member name, or `None` for the root path.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Number of descents from the root (the root path has depth `0`).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Reports whether this is the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Consumes the path and returns its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

impl Deref for AccessPath {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.segments
    }
}

impl From<Vec<String>> for AccessPath {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

impl From<&[&str]> for AccessPath {
    fn from(segments: &[&str]) -> Self {
        Self::from_segments(segments.iter().copied())
    }
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}
