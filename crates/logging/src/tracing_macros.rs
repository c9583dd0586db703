//! crates/logging/src/tracing_macros.rs
//! Convenience macros for nsgrep-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with the targets understood by [`NsgrepLayer`](crate::NsgrepLayer).

/// Emit a match trace.
///
/// # Example
/// ```ignore
/// trace_match!("{}", path);
/// ```
#[macro_export]
macro_rules! trace_match {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "nsgrep::match", $($arg)*);
    };
}

/// Emit a root loading debug trace.
///
/// # Example
/// ```ignore
/// trace_load!("reading manifests from {}", dir.display());
/// ```
#[macro_export]
macro_rules! trace_load {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "nsgrep::load", $($arg)*);
    };
}
