//! crates/graph/src/manifest.rs
//! JSON manifests describing a member graph.
//!
//! A manifest is a tree of tagged node objects:
//!
//! ```json
//! {
//!   "kind": "namespace",
//!   "members": {
//!     "alpha": { "kind": "namespace", "members": { "token_x": { "kind": "value", "type": "function" } } },
//!     "gamma": { "kind": "value" },
//!     "again": { "kind": "alias", "target": ["alpha"] }
//!   }
//! }
//! ```
//!
//! Aliases are resolved against the manifest root once every namespace and
//! value has been placed, so they may point at ancestors (forming cycles) or
//! at other aliases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::arena::MemberGraph;
use crate::node::NodeId;
use crate::path::AccessPath;

/// One node of a manifest document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManifestNode {
    /// A sub-namespace.
    Namespace {
        /// Named members of the namespace.
        #[serde(default)]
        members: BTreeMap<String, ManifestNode>,
    },
    /// A terminal value.
    Value {
        /// Optional description of the value's type.
        #[serde(rename = "type", default)]
        type_name: Option<String>,
    },
    /// A cross-link to the node found at `target`, relative to the manifest root.
    Alias {
        /// Access path of the linked node.
        target: Vec<String>,
    },
}

/// Reasons a parsed manifest cannot be turned into a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ManifestProblem {
    RootNotNamespace,
    DanglingAlias { alias: AccessPath, target: AccessPath },
}

struct PendingAlias {
    parent: NodeId,
    name: String,
    alias: AccessPath,
    target: AccessPath,
}

impl ManifestNode {
    /// Builds a [`MemberGraph`] whose root is this node.
    pub(crate) fn build(&self) -> Result<MemberGraph, ManifestProblem> {
        let Self::Namespace { members } = self else {
            return Err(ManifestProblem::RootNotNamespace);
        };

        let mut graph = MemberGraph::new();
        let mut pending = Vec::new();
        let root = graph.root();
        place_members(&mut graph, root, &AccessPath::root(), members, &mut pending);
        link_aliases(&mut graph, pending)?;
        Ok(graph)
    }
}

fn place_members(
    graph: &mut MemberGraph,
    parent: NodeId,
    parent_path: &AccessPath,
    members: &BTreeMap<String, ManifestNode>,
    pending: &mut Vec<PendingAlias>,
) {
    for (name, node) in members {
        let path = parent_path.child(name);
        match node {
            ManifestNode::Namespace { members } => {
                let id = graph.add_namespace(parent, name);
                place_members(graph, id, &path, members, pending);
            }
            ManifestNode::Value { type_name } => {
                graph.add_value(parent, name, type_name.as_deref().unwrap_or("value"));
            }
            ManifestNode::Alias { target } => pending.push(PendingAlias {
                parent,
                name: name.clone(),
                alias: path,
                target: AccessPath::from(target.clone()),
            }),
        }
    }
}

fn link_aliases(
    graph: &mut MemberGraph,
    mut pending: Vec<PendingAlias>,
) -> Result<(), ManifestProblem> {
    // Each pass links every alias whose target is already reachable; aliases
    // that point through other aliases settle in later passes.
    while !pending.is_empty() {
        let before = pending.len();
        let mut unresolved = Vec::new();
        for alias in pending {
            match lookup(graph, &alias.target) {
                Some(target) => graph.link(alias.parent, &alias.name, target),
                None => unresolved.push(alias),
            }
        }
        if unresolved.len() == before {
            let first = unresolved.swap_remove(0);
            return Err(ManifestProblem::DanglingAlias {
                alias: first.alias,
                target: first.target,
            });
        }
        pending = unresolved;
    }
    Ok(())
}

fn lookup(graph: &MemberGraph, path: &AccessPath) -> Option<NodeId> {
    path.segments()
        .iter()
        .try_fold(graph.root(), |current, segment| graph.member(current, segment))
}
