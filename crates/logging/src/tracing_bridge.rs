//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the nsgrep verbosity system.
//!
//! This module provides a tracing subscriber layer that maps tracing events
//! to nsgrep's info and debug flags. Standard tracing macros can be used with
//! `nsgrep::<category>` targets while honouring the configured levels.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(2));
//!
//! tracing::info!(target: "nsgrep::match", "alpha.token_x");
//! tracing::debug!(target: "nsgrep::load", "reading manifest");
//! ```

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that bridges tracing events to nsgrep's verbosity system.
pub struct NsgrepLayer {
    _config: VerbosityConfig,
}

impl NsgrepLayer {
    /// Create a new layer with the given verbosity configuration.
    #[must_use]
    pub const fn new(config: VerbosityConfig) -> Self {
        Self { _config: config }
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        match target {
            t if t.ends_with("::match") || t == "match" => Some(InfoFlag::Match),
            t if t.ends_with("::skip") || t == "skip" => Some(InfoFlag::Skip),
            t if t.ends_with("::stats") || t == "stats" => Some(InfoFlag::Stats),
            _ => None,
        }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        match target {
            t if t.ends_with("::filter") || t == "filter" => Some(DebugFlag::Filter),
            t if t.ends_with("::load") || t == "load" => Some(DebugFlag::Load),
            t if t.ends_with("::resolve") || t == "resolve" => Some(DebugFlag::Resolve),
            t if t.ends_with("::walk") || t == "walk" => Some(DebugFlag::Walk),
            _ => None,
        }
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for NsgrepLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                if let Some(message) = visitor.message {
                    emit_debug(debug_flag, verbosity_level, message);
                }
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                if let Some(message) = visitor.message {
                    emit_info(info_flag, verbosity_level, message);
                }
            }
        }
    }
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing with nsgrep verbosity configuration.
///
/// The thread-local configuration is always updated. The global subscriber is
/// installed only once per process; later calls keep the existing subscriber.
pub fn init_tracing(config: VerbosityConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config.clone());

    let layer = NsgrepLayer::new(config);

    let _ = tracing_subscriber::registry().with(layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_to_info_flag() {
        assert_eq!(
            NsgrepLayer::target_to_info_flag("nsgrep::match"),
            Some(InfoFlag::Match)
        );
        assert_eq!(
            NsgrepLayer::target_to_info_flag("nsgrep::stats"),
            Some(InfoFlag::Stats)
        );
        assert_eq!(NsgrepLayer::target_to_info_flag("nsgrep::matcher"), None);
        assert_eq!(NsgrepLayer::target_to_info_flag("unknown"), None);
    }

    #[test]
    fn test_target_to_debug_flag() {
        assert_eq!(
            NsgrepLayer::target_to_debug_flag("nsgrep::walk"),
            Some(DebugFlag::Walk)
        );
        assert_eq!(
            NsgrepLayer::target_to_debug_flag("nsgrep::load"),
            Some(DebugFlag::Load)
        );
        assert_eq!(NsgrepLayer::target_to_debug_flag("download"), None);
    }

    #[test]
    fn test_level_to_verbosity_level() {
        assert_eq!(NsgrepLayer::level_to_verbosity_level(&Level::ERROR), 1);
        assert_eq!(NsgrepLayer::level_to_verbosity_level(&Level::INFO), 1);
        assert_eq!(NsgrepLayer::level_to_verbosity_level(&Level::DEBUG), 2);
        assert_eq!(NsgrepLayer::level_to_verbosity_level(&Level::TRACE), 3);
    }

    #[test]
    fn layer_records_enabled_events_into_thread_buffer() {
        use crate::thread_local::{drain_events, init};
        use tracing_subscriber::layer::SubscriberExt;

        let mut config = VerbosityConfig::default();
        config.info.matches = 1;
        init(config.clone());
        drain_events();

        let subscriber = tracing_subscriber::registry().with(NsgrepLayer::new(config));
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "nsgrep::match", "alpha.token_x");
            tracing::debug!(target: "nsgrep::walk", "suppressed");
        });

        let events = drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message(), "alpha.token_x");
    }
}
