use std::fs;
use std::path::{Path, PathBuf};

use logging::debug_log;

use crate::SkipSetError;

/// Marker character found in distribution metadata entries (`pkg-1.0.dist-info`).
pub const DISTRIBUTION_MARKER: char = '-';

/// Producer of raw skip names.
///
/// Sources are consulted once per search. They are expected to reflect the
/// environment at the time of the call; nothing is cached between searches.
pub trait SkipSource {
    /// Returns the raw names this source contributes.
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError>;
}

impl<S: SkipSource + ?Sized> SkipSource for &S {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        (**self).skip_names()
    }
}

impl<S: SkipSource + ?Sized> SkipSource for Box<S> {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        (**self).skip_names()
    }
}

/// Fixed list of names, such as built-in identifiers or a test double.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticNames {
    names: Vec<String>,
}

impl StaticNames {
    /// Creates a source yielding `names`.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl SkipSource for StaticNames {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        Ok(self.names.clone())
    }
}

/// Top-level entries of a directory, each reduced to its file stem.
///
/// Pointed at a standard-library or third-party package directory, this yields
/// the names of every installed top-level module or package.
#[derive(Clone, Debug)]
pub struct DirectoryListing {
    dir: PathBuf,
    skip_distribution_entries: bool,
}

impl DirectoryListing {
    /// Creates a source listing `dir`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            skip_distribution_entries: false,
        }
    }

    /// Controls whether entries containing [`DISTRIBUTION_MARKER`] are dropped.
    ///
    /// Third-party package directories hold metadata entries such as
    /// `requests-2.31.0.dist-info` next to the importable packages.
    #[must_use]
    pub const fn skip_distribution_entries(mut self, skip: bool) -> Self {
        self.skip_distribution_entries = skip;
        self
    }

    /// Returns the listed directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SkipSource for DirectoryListing {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        let read_dir = fs::read_dir(&self.dir).map_err(|source| SkipSetError::ReadDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| SkipSetError::ReadEntry {
                path: self.dir.clone(),
                source,
            })?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if self.skip_distribution_entries && file_name.contains(DISTRIBUTION_MARKER) {
                continue;
            }
            names.push(stem(&file_name).to_owned());
        }
        names.sort();

        debug_log!(
            Filter,
            2,
            "found {} skip names in {}",
            names.len(),
            self.dir.display()
        );
        Ok(names)
    }
}

fn stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(pos) => &file_name[..pos],
    }
}

/// Names read from a text file, one per line.
///
/// Blank lines and lines starting with `#` are ignored; surrounding
/// whitespace is trimmed.
#[derive(Clone, Debug)]
pub struct NamesFile {
    path: PathBuf,
}

impl NamesFile {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SkipSource for NamesFile {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SkipSetError::ReadFile {
            path: self.path.clone(),
            source,
        })?;
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        debug_log!(
            Filter,
            2,
            "read {} skip names from {}",
            names.len(),
            self.path.display()
        );
        Ok(names)
    }
}

/// Ordered combination of several sources.
#[derive(Default)]
pub struct SkipSources {
    sources: Vec<Box<dyn SkipSource>>,
}

impl SkipSources {
    /// Creates an empty combination, which yields no names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `source`.
    pub fn push<S: SkipSource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with<S: SkipSource + 'static>(mut self, source: S) -> Self {
        self.push(source);
        self
    }

    /// Number of combined sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Reports whether no source was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl SkipSource for SkipSources {
    fn skip_names(&self) -> Result<Vec<String>, SkipSetError> {
        let mut names = Vec::new();
        for source in &self.sources {
            names.extend(source.skip_names()?);
        }
        Ok(names)
    }
}

impl std::fmt::Debug for SkipSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipSources")
            .field("sources", &self.sources.len())
            .finish()
    }
}
