#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` implements the search at the heart of nsgrep: a depth-bounded,
//! depth-first exploration of a namespace's member graph that records the
//! access path of every member whose name contains a search term.
//!
//! # Design
//!
//! - [`search`] is the entry point. It loads the root through a
//!   [`graph::Loader`], builds a [`filters::SkipSet`] from a
//!   [`filters::SkipSource`] when skip filtering is enabled, and runs a
//!   [`Walker`].
//! - [`Walker`] keeps an explicit stack of containers being listed. For every
//!   member it applies the skip set, tests the member name against the term,
//!   resolves the member from the root and descends into it when it is a
//!   container and the depth ceiling allows.
//! - [`SearchOptions`] carries the knobs; [`ProgressSink`] receives matches
//!   as they are found; [`Matches`] is the returned, discovery-ordered result.
//!
//! # Invariants
//!
//! - Only the final member name is tested, never the whole path.
//! - Names in the skip set are neither matched nor explored.
//! - No recorded path holds more than `max_depth + 1` names, and the root
//!   itself is never a match.
//! - Every recorded path resolves from the root.
//! - Cycles are bounded by depth only, unless
//!   [`SearchOptions::unique_nodes`] is enabled.
//!
//! # Errors
//!
//! Every failure aborts the search and is reported as a [`SearchError`]
//! carrying the key, path or segment involved. Partial results are discarded.
//!
//! # Examples
//!
//! ```
//! use filters::SkipSet;
//! use graph::MemberGraph;
//! use walk::{NoProgress, SearchOptions, Walker};
//!
//! let mut graph = MemberGraph::new();
//! let root = graph.root();
//! let alpha = graph.add_namespace(root, "alpha");
//! graph.add_value(alpha, "token_x", "function");
//!
//! let options = SearchOptions::new().skip_filtering(false).max_depth(2);
//! let matches = Walker::new("token", graph.into_root(), options, SkipSet::default())
//!     .run(&mut NoProgress)
//!     .unwrap();
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches.iter().next().unwrap().to_string(), "alpha.token_x");
//! ```

mod error;
mod matches;
mod options;
mod progress;
mod search;
mod walker;

pub use error::SearchError;
pub use matches::Matches;
pub use options::{DEFAULT_MAX_DEPTH, SearchOptions};
pub use progress::{NoProgress, ProgressSink, TracingProgress};
pub use search::{search, search_with_progress};
pub use walker::{WalkStats, Walker};

#[cfg(test)]
mod tests;
