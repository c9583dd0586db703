#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `graph` models the member graph explored by `nsgrep`. A graph is a set of
//! nodes reachable from a namespace root through named members; some nodes are
//! sub-namespaces (containers) that expose further members, the rest are
//! terminal values. The crate provides the capability interface the search
//! engine relies on, the helpers that resolve access paths and list public
//! members, an in-memory arena implementation, and loaders that produce roots
//! from a load key.
//!
//! # Design
//!
//! - [`Node`] is the uniform capability interface: list member names, resolve
//!   one member, report whether the node is a container, and expose a stable
//!   [`NodeId`]. The search engine depends on nothing else.
//! - [`resolve`] walks an [`AccessPath`] from a root one segment at a time and
//!   fails with [`ResolveError`] on the first segment that cannot be retrieved.
//! - [`children_of`] lists the public members of a node, dropping empty names
//!   and names starting with [`PRIVATE_MARKER`].
//! - [`MemberGraph`] is an index arena whose members are stored in sorted maps,
//!   so enumeration order is deterministic. [`GraphNode`] is a cheaply
//!   cloneable handle into a frozen graph.
//! - [`Loader`] turns a load key into a root. [`Registry`] serves in-memory
//!   graphs, [`ManifestLoader`] reads JSON manifests (see [`ManifestNode`]).
//!
//! # Invariants
//!
//! - [`AccessPath`] values are never mutated once built; extending a path
//!   allocates a new one.
//! - Resolving the empty path returns the root unchanged.
//! - A [`GraphNode`] always points at a slot of the graph it holds.
//!
//! # Errors
//!
//! - [`LoadError`] when a key cannot be turned into a root.
//! - [`ResolveError`] when a path segment cannot be retrieved.
//! - [`EnumerationError`] when a node cannot list its members.
//!
//! # Examples
//!
//! ```
//! use graph::{AccessPath, Loader, MemberGraph, Node, Registry, children_of, resolve};
//!
//! let mut graph = MemberGraph::new();
//! let alpha = graph.add_namespace(graph.root(), "alpha");
//! graph.add_value(alpha, "token_x", "function");
//! graph.add_value(alpha, "_private", "int");
//! graph.add_value(graph.root(), "gamma", "int");
//!
//! let registry = Registry::new().with("demo", graph);
//! let root = registry.load("demo").unwrap();
//!
//! let alpha_path = AccessPath::from_segments(["alpha"]);
//! let alpha = resolve(&root, &alpha_path).unwrap();
//! assert!(alpha.is_container());
//! assert_eq!(children_of(&alpha, &alpha_path).unwrap(), vec!["token_x".to_owned()]);
//! ```

mod arena;
mod loader;
mod manifest;
mod members;
mod node;
mod path;
mod resolve;

pub use arena::{GraphNode, MemberGraph, NodeKind};
pub use loader::{LoadError, Loader, MANIFEST_EXTENSION, ManifestLoader, Registry};
pub use manifest::ManifestNode;
pub use members::{EnumerationError, PRIVATE_MARKER, children_of, is_public_name};
pub use node::{Node, NodeError, NodeId};
pub use path::AccessPath;
pub use resolve::{ResolveError, resolve};
