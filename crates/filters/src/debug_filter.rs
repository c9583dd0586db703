//! Filter tracing for skip-set construction and lookups.
//!
//! Events go to the `nsgrep::filter` target so the logging bridge files them
//! under the `filter` debug flag. Everything here compiles to no-op inline
//! functions when the `tracing` feature is disabled.
//!
//! # Examples
//!
//! ```rust,ignore
//! use filters::debug_filter::{trace_name_skipped, trace_skip_set_built};
//!
//! trace_skip_set_built(512, 3, "token");
//! trace_name_skipped("alpha", "os");
//! ```

/// Target name for tracing events.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "nsgrep::filter";

/// Traces the completion of a skip set.
///
/// # Arguments
///
/// * `names` - Number of names that remain skipped
/// * `exempted` - Number of raw names dropped because they contain the term
/// * `term` - The search term the set was built for
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_skip_set_built(names: usize, exempted: usize, term: &str) {
    tracing::debug!(
        target: FILTER_TARGET,
        names = names,
        exempted = exempted,
        term = %term,
        "skip_set_built"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_skip_set_built(_names: usize, _exempted: usize, _term: &str) {}

/// Traces a member name rejected by the skip set during a walk.
///
/// # Arguments
///
/// * `parent` - Dotted path of the node that owns the member
/// * `name` - The skipped member name
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_name_skipped(parent: impl std::fmt::Display, name: &str) {
    tracing::trace!(
        target: FILTER_TARGET,
        parent = %parent,
        name = %name,
        "name_skipped"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_name_skipped(_parent: impl std::fmt::Display, _name: &str) {}
