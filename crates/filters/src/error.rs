use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error produced when a skip-name source cannot be read.
#[derive(Debug, Error)]
pub enum SkipSetError {
    /// A directory listed as a skip source could not be opened.
    #[error("failed to read skip directory '{}': {source}", .path.display())]
    ReadDir {
        /// Directory that could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// An entry inside a skip directory could not be read.
    #[error("failed to read entry in skip directory '{}': {source}", .path.display())]
    ReadEntry {
        /// Directory containing the problematic entry.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// A names file could not be read.
    #[error("failed to read skip names file '{}': {source}", .path.display())]
    ReadFile {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
}

impl SkipSetError {
    /// Returns the filesystem path associated with the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. } | Self::ReadEntry { path, .. } | Self::ReadFile { path, .. } => {
                path
            }
        }
    }
}
