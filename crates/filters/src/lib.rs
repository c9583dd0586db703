#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which member names a search may look at. A search is
//! usually pointed at a namespace that re-exports large amounts of well-known
//! material: the standard library, installed third-party packages, interpreter
//! builtins. Walking into those is slow and produces noise, so their names are
//! collected into a [`SkipSet`] and excluded from matching and exploration.
//!
//! # Design
//!
//! - A [`SkipSource`] yields raw names. [`StaticNames`] holds a fixed list,
//!   [`DirectoryListing`] reduces the entries of a directory to their stems,
//!   and [`NamesFile`] reads one name per line. [`SkipSources`] chains any
//!   number of them in order.
//! - [`SkipSet::build`] turns raw names into the set used for one search.
//!   Every raw name containing the search term is dropped so the term itself
//!   remains findable.
//! - Lookups are exact string comparisons against an [`rustc_hash::FxHashSet`].
//!
//! # Invariants
//!
//! - No name in a built set contains the term it was built for.
//! - Sources are read on every call; nothing is cached across searches.
//!
//! # Errors
//!
//! Filesystem-backed sources report [`SkipSetError`] with the path that could
//! not be read and the underlying [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use filters::{SkipSet, SkipSource, SkipSources, StaticNames};
//!
//! let sources = SkipSources::new()
//!     .with(StaticNames::new(["os", "sys", "print"]))
//!     .with(StaticNames::new(["tokenize"]));
//!
//! let set = SkipSet::build(sources.skip_names().unwrap(), "token");
//! assert!(!set.eligible("os"));
//! // "tokenize" contains "token" and is exempt.
//! assert!(set.eligible("tokenize"));
//! assert_eq!(set.len(), 3);
//! ```

pub mod debug_filter;
mod error;
mod set;
mod source;

pub use error::SkipSetError;
pub use set::SkipSet;
pub use source::{
    DISTRIBUTION_MARKER, DirectoryListing, NamesFile, SkipSource, SkipSources, StaticNames,
};
