#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the diagnostic plumbing shared by the nsgrep workspace.
//! Verbosity is expressed per category rather than as a single global level:
//! user-facing categories are [`InfoFlag`]s, internal ones are [`DebugFlag`]s,
//! and each carries its own level.
//!
//! # Design
//!
//! - [`VerbosityConfig`] combines [`InfoLevels`] and [`DebugLevels`]. It can be
//!   derived from a `-v` count with [`VerbosityConfig::from_verbose_level`] and
//!   refined with `NAME[LEVEL]` tokens (`walk2`, `stats`, `all3`).
//! - The active configuration and the collected [`DiagnosticEvent`]s live in
//!   thread-local storage. Library crates record events with [`debug_log!`]
//!   and [`info_log!`]; front ends print them after [`drain_events`].
//! - With the `tracing` feature, [`NsgrepLayer`] maps `nsgrep::<category>`
//!   tracing targets onto the same flags so standard tracing macros feed the
//!   same buffer.
//!
//! # Invariants
//!
//! - Messages are formatted only when their flag is enabled at the requested
//!   level.
//! - Events are buffered per thread; a search running on one thread never
//!   observes events recorded by another.
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, debug_log, drain_events, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(0);
//! config.apply_debug_flag("walk2").unwrap();
//! init(config);
//!
//! debug_log!(Walk, 1, "visiting {}", "alpha");
//! debug_log!(Load, 1, "not recorded");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].category(), "walk");
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;
#[cfg(feature = "tracing")]
mod tracing_bridge;
#[cfg(feature = "tracing")]
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, apply_debug_flag, apply_info_flag, debug_gte, drain_events, emit_debug,
    emit_info, info_gte, init,
};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{NsgrepLayer, init_tracing};
