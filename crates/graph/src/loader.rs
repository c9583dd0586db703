//! crates/graph/src/loader.rs
//! Loading namespace roots from a load key.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use logging::{debug_log, info_log};

use crate::arena::{GraphNode, MemberGraph};
use crate::manifest::{ManifestNode, ManifestProblem};
use crate::node::Node;
use crate::path::AccessPath;

/// Extension of manifest files read by [`ManifestLoader`].
pub const MANIFEST_EXTENSION: &str = "json";

/// Errors raised while loading a namespace root.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The key cannot name a root (empty, or contains path syntax).
    #[error("invalid load key '{key}'")]
    InvalidKey {
        /// Offending key.
        key: String,
    },
    /// No root is known under the key.
    #[error("no namespace root named '{key}'")]
    NotFound {
        /// Key that was looked up.
        key: String,
    },
    /// The manifest backing the key could not be read.
    #[error("failed to read manifest '{}': {source}", .path.display())]
    Io {
        /// Manifest file that failed to read.
        path: PathBuf,
        /// Underlying error emitted by the operating system.
        #[source]
        source: io::Error,
    },
    /// The manifest is not valid JSON or does not follow the manifest grammar.
    #[error("failed to parse manifest '{}': {source}", .path.display())]
    Parse {
        /// Manifest file that failed to parse.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The manifest's top-level node is not a namespace.
    #[error("root of '{key}' is not a namespace")]
    RootNotNamespace {
        /// Key whose root is not a namespace.
        key: String,
    },
    /// An alias in the manifest points at a path that does not exist.
    #[error("alias '{alias}' in '{key}' points at missing member '{target}'")]
    DanglingAlias {
        /// Key of the manifest containing the alias.
        key: String,
        /// Location of the alias.
        alias: AccessPath,
        /// Path the alias refers to.
        target: AccessPath,
    },
}

impl LoadError {
    /// Returns the load key associated with the failure, when one is recorded.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { key }
            | Self::NotFound { key }
            | Self::RootNotNamespace { key }
            | Self::DanglingAlias { key, .. } => Some(key),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }

    fn from_problem(key: &str, problem: ManifestProblem) -> Self {
        match problem {
            ManifestProblem::RootNotNamespace => Self::RootNotNamespace {
                key: key.to_owned(),
            },
            ManifestProblem::DanglingAlias { alias, target } => Self::DanglingAlias {
                key: key.to_owned(),
                alias,
                target,
            },
        }
    }
}

/// Source of namespace roots addressed by a string key.
pub trait Loader {
    /// Node type produced by this loader.
    type Node: Node;

    /// Loads the root registered under `key`.
    fn load(&self, key: &str) -> Result<Self::Node, LoadError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    type Node = L::Node;

    fn load(&self, key: &str) -> Result<Self::Node, LoadError> {
        (**self).load(key)
    }
}

/// In-memory table of named graphs.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    roots: HashMap<String, Arc<MemberGraph>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `graph` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, graph: MemberGraph) {
        self.roots.insert(key.into(), Arc::new(graph));
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, graph: MemberGraph) -> Self {
        self.insert(key, graph);
        self
    }

    /// Number of registered roots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Reports whether no root is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl Loader for Registry {
    type Node = GraphNode;

    fn load(&self, key: &str) -> Result<GraphNode, LoadError> {
        let graph = self.roots.get(key).ok_or_else(|| LoadError::NotFound {
            key: key.to_owned(),
        })?;
        debug_log!(Load, 1, "loaded '{}' from registry ({} nodes)", key, graph.len());
        Ok(GraphNode::new(Arc::clone(graph), graph.root()))
    }
}

/// Loads roots from `<dir>/<key>.json` manifest files.
#[derive(Clone, Debug)]
pub struct ManifestLoader {
    dir: PathBuf,
}

impl ManifestLoader {
    /// Creates a loader reading manifests from `dir`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory manifests are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the manifest file that backs `key`.
    pub fn manifest_path(&self, key: &str) -> Result<PathBuf, LoadError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{MANIFEST_EXTENSION}")))
    }
}

impl Loader for ManifestLoader {
    type Node = GraphNode;

    fn load(&self, key: &str) -> Result<GraphNode, LoadError> {
        let path = self.manifest_path(key)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound {
                    key: key.to_owned(),
                });
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        let manifest: ManifestNode =
            serde_json::from_str(&text).map_err(|source| LoadError::Parse {
                path: path.clone(),
                source,
            })?;
        let graph = manifest
            .build()
            .map_err(|problem| LoadError::from_problem(key, problem))?;
        info_log!(
            Stats,
            2,
            "loaded '{}' from {} ({} nodes)",
            key,
            path.display(),
            graph.len()
        );
        Ok(graph.into_root())
    }
}

fn validate_key(key: &str) -> Result<(), LoadError> {
    let invalid = key.is_empty()
        || key == "."
        || key.contains("..")
        || key.contains('/')
        || key.contains('\\');
    if invalid {
        debug_log!(Load, 1, "rejecting load key {:?}", key);
        return Err(LoadError::InvalidKey {
            key: key.to_owned(),
        });
    }
    Ok(())
}
