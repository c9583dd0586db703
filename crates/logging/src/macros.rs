//! crates/logging/src/macros.rs
//! Level-gated diagnostic macros backed by the thread-local event buffer.

/// Record a debug diagnostic when the flag is enabled at `level` or above.
///
/// The message is only formatted when the current thread's configuration
/// enables the flag.
///
/// # Example
/// ```
/// use logging::{VerbosityConfig, debug_log, drain_events, init};
///
/// let mut config = VerbosityConfig::default();
/// config.debug.walk = 2;
/// init(config);
///
/// debug_log!(Walk, 2, "entering {}", "alpha");
/// debug_log!(Walk, 3, "too detailed");
///
/// let events = drain_events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].message(), "entering alpha");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)*) => {
        if $crate::debug_gte($crate::DebugFlag::$flag, $level) {
            $crate::emit_debug($crate::DebugFlag::$flag, $level, ::std::format!($($arg)*));
        }
    };
}

/// Record an info diagnostic when the flag is enabled at `level` or above.
///
/// # Example
/// ```
/// use logging::{VerbosityConfig, drain_events, info_log, init};
///
/// init(VerbosityConfig::from_verbose_level(1));
/// info_log!(Stats, 1, "{} matches", 3);
/// assert_eq!(drain_events()[0].message(), "3 matches");
/// ```
#[macro_export]
macro_rules! info_log {
    ($flag:ident, $level:expr, $($arg:tt)*) => {
        if $crate::info_gte($crate::InfoFlag::$flag, $level) {
            $crate::emit_info($crate::InfoFlag::$flag, $level, ::std::format!($($arg)*));
        }
    };
}
