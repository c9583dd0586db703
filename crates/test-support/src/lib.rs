//! Shared fixture graphs and manifest helpers for nsgrep tests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use graph::{MANIFEST_EXTENSION, MemberGraph, NodeId};

/// Manifest form of [`scenario_graph`].
pub const SCENARIO_MANIFEST: &str = r#"{
  "kind": "namespace",
  "members": {
    "alpha": {
      "kind": "namespace",
      "members": { "token_x": { "kind": "value", "type": "function" } }
    },
    "alpha_beta": { "kind": "namespace" },
    "gamma": { "kind": "value", "type": "int" }
  }
}"#;

/// Root with children `alpha`, `alpha_beta` (containers) and `gamma` (leaf);
/// `alpha` holds a single leaf `token_x`.
pub fn scenario_graph() -> MemberGraph {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    let alpha = graph.add_namespace(root, "alpha");
    graph.add_namespace(root, "alpha_beta");
    graph.add_value(root, "gamma", "int");
    graph.add_value(alpha, "token_x", "function");
    graph
}

/// Chain of `levels` nested containers `c1 .. cN`, with a leaf named `leaf`
/// at the root and inside every container.
pub fn chain_graph(levels: usize, leaf: &str) -> MemberGraph {
    let mut graph = MemberGraph::new();
    let mut current = graph.root();
    graph.add_value(current, leaf, "function");
    for level in 1..=levels {
        current = graph.add_namespace(current, &format!("c{level}"));
        graph.add_value(current, leaf, "function");
    }
    graph
}

/// Package whose submodule links back to the package itself:
/// `pkg.util.Tokenizer`, `pkg.util.pkg -> pkg`.
pub fn cyclic_graph() -> (MemberGraph, NodeId) {
    let mut graph = MemberGraph::new();
    let root = graph.root();
    let pkg = graph.add_namespace(root, "pkg");
    let util = graph.add_namespace(pkg, "util");
    graph.add_value(util, "Tokenizer", "class");
    graph.link(util, "pkg", pkg);
    (graph, pkg)
}

/// Writes `json` as the manifest for `key` inside `dir`.
pub fn write_manifest(dir: &Path, key: &str, json: &str) -> io::Result<PathBuf> {
    let path = dir.join(format!("{key}.{MANIFEST_EXTENSION}"));
    fs::write(&path, json)?;
    Ok(path)
}

/// Creates a temporary directory holding `json` as the manifest for `key`.
pub fn manifest_dir(key: &str, json: &str) -> io::Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    write_manifest(dir.path(), key, json)?;
    Ok(dir)
}

/// Creates `names` as empty files inside `dir`.
pub fn touch_all(dir: &Path, names: &[&str]) -> io::Result<()> {
    for name in names {
        fs::write(dir.join(name), b"")?;
    }
    Ok(())
}
