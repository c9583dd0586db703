//! crates/graph/src/node.rs
//! Uniform capability interface over an explorable member graph.

use std::error::Error;
use std::fmt;

/// Error raised by a [`Node`] implementation when its member list cannot be produced.
pub type NodeError = Box<dyn Error + Send + Sync + 'static>;

/// Stable identity of a node within one loaded graph.
///
/// Identities are only compared with one another while a single root is being
/// explored. They carry no meaning across roots or process runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Wraps a raw identity value.
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Returns the raw identity value.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A location in a member graph that can list and resolve its members.
///
/// The search engine depends only on this trait. Adapters implement it for
/// whatever object model is being explored: the in-memory [`MemberGraph`],
/// a manifest loaded from disk, or a hand-built double in tests.
///
/// Implementations must be deterministic for an unmutated graph: repeated
/// calls to [`member_names`](Self::member_names) on the same node return the
/// same names in the same order.
///
/// [`MemberGraph`]: crate::MemberGraph
pub trait Node: Clone {
    /// Lists every member name attached to this node, including private ones.
    fn member_names(&self) -> Result<Vec<String>, NodeError>;

    /// Retrieves the member called `name`, or `None` when no such member exists.
    fn member(&self, name: &str) -> Option<Self>;

    /// Reports whether this node is a sub-namespace whose members may be explored.
    fn is_container(&self) -> bool;

    /// Returns the identity of the node within its graph.
    fn identity(&self) -> NodeId;
}
