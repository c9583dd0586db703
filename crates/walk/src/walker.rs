use std::borrow::Cow;

use filters::SkipSet;
use filters::debug_filter::trace_name_skipped;
use graph::{AccessPath, Node, NodeId, children_of, resolve};
use logging::{debug_log, info_log};
use rustc_hash::FxHashSet;

use crate::error::SearchError;
use crate::matches::Matches;
use crate::options::SearchOptions;
use crate::progress::ProgressSink;

/// Counters describing a finished walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Containers whose members were listed, the root included.
    pub nodes_visited: usize,
    /// Member names rejected by the skip set.
    pub children_skipped: usize,
    /// Deepest depth counter value at which members were listed.
    pub max_depth_reached: usize,
    /// Containers not entered again because their identity was already seen.
    pub revisits_avoided: usize,
}

/// Depth-first search for members whose name contains a term.
///
/// Containers are explored in pre-order and their members in enumeration
/// order, so identical inputs always yield identical [`Matches`]. The depth
/// counter starts at zero for the root and grows by one per descent; a
/// container is entered only while the counter of its parent is below the
/// configured ceiling.
pub struct Walker<N: Node> {
    root: N,
    needle: String,
    options: SearchOptions,
    skip_set: SkipSet,
    stack: Vec<ContainerState>,
    visited: FxHashSet<NodeId>,
    stats: WalkStats,
}

impl<N: Node> Walker<N> {
    /// Creates a walker searching `root` for `term`.
    ///
    /// `skip_set` is consulted only when skip filtering is enabled in
    /// `options`.
    pub fn new(term: &str, root: N, options: SearchOptions, skip_set: SkipSet) -> Self {
        let needle = if options.case_sensitive {
            term.to_owned()
        } else {
            term.to_lowercase()
        };
        Self {
            root,
            needle,
            options,
            skip_set,
            stack: Vec::new(),
            visited: FxHashSet::default(),
            stats: WalkStats::default(),
        }
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns the first [`SearchError::Enumeration`] or
    /// [`SearchError::Resolve`] raised while exploring; no partial result is
    /// returned in that case.
    pub fn run(self, progress: &mut dyn ProgressSink) -> Result<Matches, SearchError> {
        self.run_with_stats(progress).map(|(matches, _)| matches)
    }

    /// Runs the search and also returns the walk counters.
    ///
    /// # Errors
    ///
    /// Same as [`Walker::run`].
    pub fn run_with_stats(
        mut self,
        progress: &mut dyn ProgressSink,
    ) -> Result<(Matches, WalkStats), SearchError> {
        debug_log!(
            Walk,
            1,
            "searching for '{}' (max depth {}, skip set of {})",
            self.needle,
            self.options.max_depth,
            self.skip_set.len()
        );

        let mut matches = Matches::new();
        let root = self.root.clone();
        self.enter(root, AccessPath::root(), 0)?;

        loop {
            let (parent_path, name, depth) = {
                let Some(state) = self.stack.last_mut() else {
                    break;
                };
                match state.next_name() {
                    Some(name) => (state.path.clone(), name, state.depth),
                    None => {
                        self.stack.pop();
                        continue;
                    }
                }
            };

            if self.options.skip_filtering && !self.skip_set.eligible(&name) {
                self.stats.children_skipped += 1;
                info_log!(Skip, 1, "skipped {}", parent_path.child(&name));
                trace_name_skipped(&parent_path, &name);
                continue;
            }

            let child_path = parent_path.child(&name);
            if self.is_match(&name) {
                info_log!(Match, 2, "matched {}", child_path);
                if self.options.emit_progress {
                    progress.on_match(&child_path);
                }
                matches.push(child_path.clone());
            }

            let child = resolve(&self.root, &child_path)?;
            if child.is_container() && depth < self.options.max_depth {
                self.enter(child, child_path, depth + 1)?;
            }
        }

        info_log!(
            Stats,
            1,
            "{} matches, {} containers visited, {} names skipped",
            matches.len(),
            self.stats.nodes_visited,
            self.stats.children_skipped
        );
        debug_log!(
            Walk,
            1,
            "walk finished at max depth {} ({} revisits avoided)",
            self.stats.max_depth_reached,
            self.stats.revisits_avoided
        );
        Ok((matches, self.stats))
    }

    fn enter(&mut self, node: N, path: AccessPath, depth: usize) -> Result<(), SearchError> {
        if self.options.unique_nodes && !self.visited.insert(node.identity()) {
            self.stats.revisits_avoided += 1;
            debug_log!(Walk, 2, "not re-entering {} at {}", node.identity(), path);
            return Ok(());
        }

        let names = children_of(&node, &path)?;
        debug_log!(
            Walk,
            2,
            "entering {} at depth {} ({} members)",
            path,
            depth,
            names.len()
        );
        self.stats.nodes_visited += 1;
        self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth);
        self.stack.push(ContainerState::new(path, names, depth));
        Ok(())
    }

    fn is_match(&self, name: &str) -> bool {
        let candidate = if self.options.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        };
        candidate.contains(self.needle.as_str())
    }
}

struct ContainerState {
    path: AccessPath,
    names: std::vec::IntoIter<String>,
    depth: usize,
}

impl ContainerState {
    fn new(path: AccessPath, names: Vec<String>, depth: usize) -> Self {
        Self {
            path,
            names: names.into_iter(),
            depth,
        }
    }

    fn next_name(&mut self) -> Option<String> {
        self.names.next()
    }
}
