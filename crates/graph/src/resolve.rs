//! crates/graph/src/resolve.rs
//! Step-by-step resolution of access paths against a root node.

use std::error::Error;
use std::fmt;

use logging::debug_log;

use crate::node::Node;
use crate::path::AccessPath;

/// Error returned when a segment of an access path cannot be retrieved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolveError {
    path: AccessPath,
    index: usize,
}

impl ResolveError {
    pub(crate) fn new(path: AccessPath, index: usize) -> Self {
        Self { path, index }
    }

    /// Returns the full path whose resolution was requested.
    #[must_use]
    pub fn path(&self) -> &AccessPath {
        &self.path
    }

    /// Returns the member name that could not be retrieved.
    #[must_use]
    pub fn segment(&self) -> &str {
        &self.path.segments()[self.index]
    }

    /// Returns the position of the failing segment within [`path`](Self::path).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the portion of the path that resolved before the failure.
    #[must_use]
    pub fn resolved_prefix(&self) -> AccessPath {
        AccessPath::from_segments(self.path.segments()[..self.index].iter().cloned())
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to resolve member '{}' of '{}' while resolving '{}'",
            self.segment(),
            self.resolved_prefix(),
            self.path
        )
    }
}

impl Error for ResolveError {}

/// Resolves `path` from `root`, one member at a time.
///
/// An empty path yields `root` unchanged. Resolution stops at the first
/// segment that cannot be retrieved and reports it through [`ResolveError`];
/// no partial result is returned.
///
/// # Examples
///
/// ```
/// use graph::{AccessPath, MemberGraph, Node, resolve};
///
/// let mut graph = MemberGraph::new();
/// let alpha = graph.add_namespace(graph.root(), "alpha");
/// graph.add_value(alpha, "token_x", "function");
/// let root = graph.into_root();
///
/// let node = resolve(&root, &AccessPath::from_segments(["alpha", "token_x"])).unwrap();
/// assert!(!node.is_container());
///
/// let error = resolve(&root, &AccessPath::from_segments(["alpha", "missing"])).unwrap_err();
/// assert_eq!(error.segment(), "missing");
/// ```
pub fn resolve<N: Node>(root: &N, path: &AccessPath) -> Result<N, ResolveError> {
    let mut current = root.clone();
    for (index, segment) in path.segments().iter().enumerate() {
        current = match current.member(segment) {
            Some(next) => next,
            None => {
                debug_log!(Resolve, 1, "unresolvable segment '{}' in {}", segment, path);
                return Err(ResolveError::new(path.clone(), index));
            }
        };
    }
    debug_log!(Resolve, 3, "resolved {} to {}", path, current.identity());
    Ok(current)
}
