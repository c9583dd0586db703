use graph::AccessPath;
use logging::trace_match;

/// Receives matches as soon as the walker records them.
///
/// The final [`Matches`](crate::Matches) collection is returned regardless;
/// a sink only makes long searches observable while they run.
pub trait ProgressSink {
    /// Called once per recorded match, in discovery order.
    fn on_match(&mut self, path: &AccessPath);
}

impl<F> ProgressSink for F
where
    F: FnMut(&AccessPath),
{
    fn on_match(&mut self, path: &AccessPath) {
        self(path);
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_match(&mut self, _path: &AccessPath) {}
}

/// Sink that forwards matches as `nsgrep::match` tracing events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn on_match(&mut self, path: &AccessPath) {
        trace_match!("{}", path);
    }
}
