use std::sync::Arc;

use rustc_hash::FxHashSet;

use logging::debug_log;

use crate::debug_filter::trace_skip_set_built;

/// Names excluded from exploration as already-known noise.
///
/// A `SkipSet` is built once per search from the raw names produced by a
/// [`SkipSource`](crate::SkipSource). Every raw name that contains the search
/// term is exempted during construction, so the term can still be found even
/// when it collides with a noise name.
///
/// The exemption is a plain substring test against the raw term. Short terms
/// therefore exempt broadly: searching for `"a"` re-admits every noise name
/// containing an `a`.
///
/// `SkipSet` is cheaply cloneable (the inner state is behind an [`Arc`]).
///
/// # Examples
///
/// ```
/// use filters::SkipSet;
///
/// let set = SkipSet::build(["alpha", "os", "sys"], "alpha");
///
/// // "alpha" contains the term, so it is no longer skipped.
/// assert!(set.eligible("alpha"));
/// assert!(!set.eligible("os"));
/// assert!(set.eligible("tokens"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SkipSet {
    names: Arc<FxHashSet<String>>,
}

impl SkipSet {
    /// Builds the filtered skip set for `term` from `raw_names`.
    pub fn build<I, S>(raw_names: I, term: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = FxHashSet::default();
        let mut exempted = 0usize;
        for name in raw_names {
            let name = name.into();
            if name.contains(term) {
                exempted += 1;
                continue;
            }
            names.insert(name);
        }
        debug_log!(
            Filter,
            1,
            "skip set holds {} names ({} exempted for '{}')",
            names.len(),
            exempted,
            term
        );
        trace_skip_set_built(names.len(), exempted, term);
        Self {
            names: Arc::new(names),
        }
    }

    /// Reports whether `name` may be matched and explored.
    #[must_use]
    pub fn eligible(&self, name: &str) -> bool {
        !self.names.contains(name)
    }

    /// Reports whether `name` is skipped.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of skipped names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Reports whether nothing is skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the skipped names in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
