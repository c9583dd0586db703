//! crates/graph/src/arena.rs
//! In-memory member graph backed by an index arena.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::node::{Node, NodeError, NodeId};

/// What a node in a [`MemberGraph`] represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A sub-namespace whose members can be explored.
    Namespace,
    /// A terminal value (function, class, constant, ...).
    Value {
        /// Free-form description of the value's type.
        type_name: String,
    },
}

#[derive(Clone, Debug)]
struct Slot {
    kind: NodeKind,
    members: BTreeMap<String, NodeId>,
}

impl Slot {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            members: BTreeMap::new(),
        }
    }
}

/// Arena of namespace and value nodes connected by named members.
///
/// Members are kept in a sorted map, so every node lists its members in
/// lexicographic order. Cross-links created with [`link`](Self::link) may point
/// anywhere in the arena, including back to an ancestor, which makes cyclic
/// graphs representable without reference counting cycles.
#[derive(Clone, Debug)]
pub struct MemberGraph {
    slots: Vec<Slot>,
}

impl Default for MemberGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberGraph {
    /// Creates a graph containing only an empty root namespace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot::new(NodeKind::Namespace)],
        }
    }

    /// Returns the identity of the root namespace.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena, the root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a graph holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Adds a namespace called `name` under `parent` and returns its identity.
    pub fn add_namespace(&mut self, parent: NodeId, name: &str) -> NodeId {
        self.add(parent, name, NodeKind::Namespace)
    }

    /// Adds a terminal value called `name` under `parent` and returns its identity.
    pub fn add_value(&mut self, parent: NodeId, name: &str, type_name: &str) -> NodeId {
        self.add(
            parent,
            name,
            NodeKind::Value {
                type_name: type_name.to_owned(),
            },
        )
    }

    /// Makes `target` reachable from `parent` under `name`.
    ///
    /// An existing member with the same name is replaced.
    pub fn link(&mut self, parent: NodeId, name: &str, target: NodeId) {
        self.slots[parent.0].members.insert(name.to_owned(), target);
    }

    /// Returns the kind of the node `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.slots.get(id.0).map(|slot| &slot.kind)
    }

    /// Looks up the member `name` of node `id`.
    #[must_use]
    pub fn member(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.slots.get(id.0)?.members.get(name).copied()
    }

    /// Iterates over the member names of node `id` in sorted order.
    pub fn member_names(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.slots
            .get(id.0)
            .into_iter()
            .flat_map(|slot| slot.members.keys().map(String::as_str))
    }

    /// Freezes the graph and returns a handle to its root.
    #[must_use]
    pub fn into_root(self) -> GraphNode {
        let graph = Arc::new(self);
        GraphNode::new(graph, NodeId(0))
    }

    fn add(&mut self, parent: NodeId, name: &str, kind: NodeKind) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot::new(kind));
        self.link(parent, name, id);
        id
    }
}

/// Shared handle to one node of a frozen [`MemberGraph`].
#[derive(Clone, Debug)]
pub struct GraphNode {
    graph: Arc<MemberGraph>,
    id: NodeId,
}

impl GraphNode {
    /// Creates a handle to node `id` of `graph`.
    #[must_use]
    pub fn new(graph: Arc<MemberGraph>, id: NodeId) -> Self {
        Self { graph, id }
    }

    /// Returns the graph this handle points into.
    #[must_use]
    pub fn graph(&self) -> &Arc<MemberGraph> {
        &self.graph
    }

    /// Returns the kind of the referenced node.
    #[must_use]
    pub fn kind(&self) -> Option<&NodeKind> {
        self.graph.kind(self.id)
    }
}

impl PartialEq for GraphNode {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.graph, &other.graph) && self.id == other.id
    }
}

impl Eq for GraphNode {}

impl Node for GraphNode {
    fn member_names(&self) -> Result<Vec<String>, NodeError> {
        Ok(self.graph.member_names(self.id).map(str::to_owned).collect())
    }

    fn member(&self, name: &str) -> Option<Self> {
        self.graph
            .member(self.id, name)
            .map(|id| Self::new(Arc::clone(&self.graph), id))
    }

    fn is_container(&self) -> bool {
        matches!(self.kind(), Some(NodeKind::Namespace))
    }

    fn identity(&self) -> NodeId {
        self.id
    }
}
