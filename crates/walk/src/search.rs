use filters::{SkipSet, SkipSource};
use graph::Loader;
use logging::debug_log;

use crate::error::SearchError;
use crate::matches::Matches;
use crate::options::SearchOptions;
use crate::progress::{NoProgress, ProgressSink, TracingProgress};
use crate::walker::Walker;

/// Searches the namespace loaded for `root_key` for members named like `term`.
///
/// When progress is enabled in `options`, every match is also emitted as an
/// `nsgrep::match` tracing event as soon as it is found.
///
/// # Errors
///
/// - [`SearchError::Load`] when `loader` cannot produce the root.
/// - [`SearchError::SkipSet`] when skip filtering is enabled and `skip_source`
///   fails.
/// - [`SearchError::Enumeration`] or [`SearchError::Resolve`] when the graph
///   turns out to be inconsistent during the walk.
///
/// # Examples
///
/// ```
/// use filters::StaticNames;
/// use graph::{MemberGraph, Registry};
/// use walk::{SearchOptions, search};
///
/// let mut graph = MemberGraph::new();
/// let root = graph.root();
/// let text = graph.add_namespace(root, "text");
/// graph.add_value(text, "tokenize", "function");
/// let loader = Registry::new().with("lib", graph);
///
/// let options = SearchOptions::new().emit_progress(false);
/// let matches = search("token", "lib", &options, &loader, &StaticNames::default()).unwrap();
///
/// let found: Vec<String> = matches.iter().map(ToString::to_string).collect();
/// assert_eq!(found, ["text.tokenize"]);
/// ```
pub fn search<L, S>(
    term: &str,
    root_key: &str,
    options: &SearchOptions,
    loader: &L,
    skip_source: &S,
) -> Result<Matches, SearchError>
where
    L: Loader + ?Sized,
    S: SkipSource + ?Sized,
{
    if options.emit_progress {
        search_with_progress(
            term,
            root_key,
            options,
            loader,
            skip_source,
            &mut TracingProgress,
        )
    } else {
        search_with_progress(term, root_key, options, loader, skip_source, &mut NoProgress)
    }
}

/// Same as [`search`], reporting matches to `progress` instead of tracing.
///
/// `progress` is only called when progress is enabled in `options`.
///
/// # Errors
///
/// Same as [`search`].
pub fn search_with_progress<L, S>(
    term: &str,
    root_key: &str,
    options: &SearchOptions,
    loader: &L,
    skip_source: &S,
    progress: &mut dyn ProgressSink,
) -> Result<Matches, SearchError>
where
    L: Loader + ?Sized,
    S: SkipSource + ?Sized,
{
    let root = loader.load(root_key)?;
    debug_log!(Load, 1, "loaded root '{}'", root_key);

    let skip_set = if options.skip_filtering {
        SkipSet::build(skip_source.skip_names()?, term)
    } else {
        SkipSet::default()
    };

    Walker::new(term, root, *options, skip_set).run(progress)
}
