/// Recursion ceiling applied when none is configured.
///
/// Chosen so searches over densely cross-linked namespaces still terminate in
/// practical time. Much larger values can make a walk effectively unbounded.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Knobs controlling a single search.
///
/// The defaults match the command-line front end: case-sensitive matching,
/// skip filtering on, progress reported as matches are found, a depth ceiling
/// of [`DEFAULT_MAX_DEPTH`] and no identity tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub(crate) case_sensitive: bool,
    pub(crate) skip_filtering: bool,
    pub(crate) emit_progress: bool,
    pub(crate) max_depth: usize,
    pub(crate) unique_nodes: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchOptions {
    /// Creates options with the default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_sensitive: true,
            skip_filtering: true,
            emit_progress: true,
            max_depth: DEFAULT_MAX_DEPTH,
            unique_nodes: false,
        }
    }

    /// Sets whether the term must match with identical case.
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets whether skip-set names are excluded from matching and descent.
    #[must_use]
    pub const fn skip_filtering(mut self, skip_filtering: bool) -> Self {
        self.skip_filtering = skip_filtering;
        self
    }

    /// Sets whether each match is reported to the progress sink when found.
    #[must_use]
    pub const fn emit_progress(mut self, emit_progress: bool) -> Self {
        self.emit_progress = emit_progress;
        self
    }

    /// Sets the number of descents allowed below the root.
    ///
    /// Recorded paths hold at most `max_depth + 1` names.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enters each container at most once, keyed by node identity.
    ///
    /// Without this, cross-links are re-explored until the depth ceiling
    /// stops them and the same node can match under several paths. Enabling
    /// it changes results: a container reached a second time is still matched
    /// by name, but its members are not listed again.
    #[must_use]
    pub const fn unique_nodes(mut self, unique_nodes: bool) -> Self {
        self.unique_nodes = unique_nodes;
        self
    }

    /// Reports whether matching is case-sensitive.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Reports whether skip filtering is enabled.
    #[must_use]
    pub const fn skips(&self) -> bool {
        self.skip_filtering
    }

    /// Reports whether progress events are emitted.
    #[must_use]
    pub const fn emits_progress(&self) -> bool {
        self.emit_progress
    }

    /// Returns the configured depth ceiling.
    #[must_use]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }

    /// Reports whether containers are entered at most once.
    #[must_use]
    pub const fn tracks_identity(&self) -> bool {
        self.unique_nodes
    }
}
