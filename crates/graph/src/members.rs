//! crates/graph/src/members.rs
//! Listing of the public members of a node.

use thiserror::Error;

use logging::debug_log;

use crate::node::{Node, NodeError};
use crate::path::AccessPath;

/// Leading character that marks a member as private.
pub const PRIVATE_MARKER: char = '_';

/// Error returned when a node cannot produce its member list.
#[derive(Debug, Error)]
#[error("failed to list members of '{path}': {source}")]
pub struct EnumerationError {
    path: AccessPath,
    #[source]
    source: NodeError,
}

impl EnumerationError {
    /// Creates an error for the node located at `path`.
    pub fn new(path: AccessPath, source: NodeError) -> Self {
        Self { path, source }
    }

    /// Returns the path of the node whose members could not be listed.
    #[must_use]
    pub fn path(&self) -> &AccessPath {
        &self.path
    }
}

/// Reports whether `name` is a public member name.
///
/// Empty names and names starting with [`PRIVATE_MARKER`] are private.
#[must_use]
pub fn is_public_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(PRIVATE_MARKER)
}

/// Lists the public member names of `node`, located at `path`.
///
/// Names keep the order produced by the node itself.
pub fn children_of<N: Node>(node: &N, path: &AccessPath) -> Result<Vec<String>, EnumerationError> {
    let names = node
        .member_names()
        .map_err(|source| EnumerationError::new(path.clone(), source))?;
    let total = names.len();
    let public: Vec<String> = names.into_iter().filter(|name| is_public_name(name)).collect();
    debug_log!(
        Walk,
        3,
        "{} lists {} members ({} public)",
        path,
        total,
        public.len()
    );
    Ok(public)
}
