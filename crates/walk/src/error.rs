use filters::SkipSetError;
use graph::{EnumerationError, LoadError, ResolveError};
use thiserror::Error;

/// Failure that aborted a search.
///
/// Searches never return partial results: the first failure of any stage
/// ends the walk and is reported here with the context of the stage that
/// produced it.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The root namespace could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The skip set could not be built.
    #[error(transparent)]
    SkipSet(#[from] SkipSetError),
    /// A discovered member could not be resolved from the root.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// A container's members could not be listed.
    #[error(transparent)]
    Enumeration(#[from] EnumerationError),
}
