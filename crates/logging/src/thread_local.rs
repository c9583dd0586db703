//! crates/logging/src/thread_local.rs
//! Thread-local storage for verbosity configuration and event collection.

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use std::cell::RefCell;

thread_local! {
    static VERBOSITY: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    #[allow(clippy::missing_const_for_thread_local)]
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = RefCell::new(Vec::new());
}

/// Diagnostic event collected during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Info-level diagnostic event.
    Info {
        /// The info flag category.
        flag: InfoFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
    /// Debug-level diagnostic event.
    Debug {
        /// The debug flag category.
        flag: DebugFlag,
        /// The verbosity level.
        level: u8,
        /// The diagnostic message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info { message, .. } | Self::Debug { message, .. } => message,
        }
    }

    /// Returns the lowercase category label used when printing the event.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Info { flag, .. } => match flag {
                InfoFlag::Match => "match",
                InfoFlag::Skip => "skip",
                InfoFlag::Stats => "stats",
            },
            Self::Debug { flag, .. } => match flag {
                DebugFlag::Filter => "filter",
                DebugFlag::Load => "load",
                DebugFlag::Resolve => "resolve",
                DebugFlag::Walk => "walk",
            },
        }
    }
}

/// Initialize verbosity configuration for the current thread.
pub fn init(config: VerbosityConfig) {
    VERBOSITY.with(|v| {
        *v.borrow_mut() = config;
    });
}

/// Check if the info flag is at or above the specified level.
pub fn info_gte(flag: InfoFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().info.get(flag) >= level)
}

/// Check if the debug flag is at or above the specified level.
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    VERBOSITY.with(|v| v.borrow().debug.get(flag) >= level)
}

/// Emit an info diagnostic event.
pub fn emit_info(flag: InfoFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Info {
            flag,
            level,
            message,
        });
    });
}

/// Emit a debug diagnostic event.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    EVENTS.with(|e| {
        e.borrow_mut().push(DiagnosticEvent::Debug {
            flag,
            level,
            message,
        });
    });
}

/// Drain all collected events, clearing the internal buffer.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|e| e.borrow_mut().drain(..).collect())
}

/// Apply an info flag token to the current configuration.
pub fn apply_info_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_info_flag(token))
}

/// Apply a debug flag token to the current configuration.
pub fn apply_debug_flag(token: &str) -> Result<(), String> {
    VERBOSITY.with(|v| v.borrow_mut().apply_debug_flag(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_and_check() {
        let mut config = VerbosityConfig::default();
        config.info.stats = 2;
        config.debug.walk = 3;

        init(config);

        assert!(info_gte(InfoFlag::Stats, 1));
        assert!(info_gte(InfoFlag::Stats, 2));
        assert!(!info_gte(InfoFlag::Stats, 3));

        assert!(debug_gte(DebugFlag::Walk, 1));
        assert!(debug_gte(DebugFlag::Walk, 3));
        assert!(!debug_gte(DebugFlag::Walk, 4));
        assert!(!debug_gte(DebugFlag::Load, 1));
    }

    #[test]
    fn test_emit_and_drain() {
        init(VerbosityConfig::default());

        emit_info(InfoFlag::Stats, 1, "test info".to_string());
        emit_debug(DebugFlag::Walk, 2, "test debug".to_string());

        let events = drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category(), "stats");
        assert_eq!(events[0].message(), "test info");
        assert_eq!(events[1].category(), "walk");
        assert!(drain_events().is_empty());
    }

    #[test]
    fn test_apply_flags_to_thread_config() {
        init(VerbosityConfig::default());
        apply_debug_flag("filter2").unwrap();
        apply_info_flag("skip").unwrap();

        assert!(debug_gte(DebugFlag::Filter, 2));
        assert!(info_gte(InfoFlag::Skip, 1));
        assert!(apply_debug_flag("bogus").is_err());
    }
}
