//! Node-identity filters.
//!
//! Callers name nodes through [`NodeRef`]s. Before a traversal starts the
//! references are resolved against the graph into a [`NodeFilterSet`] of
//! plain ids; references that do not resolve are dropped with a warning.

use pathexpand_core::{GraphSource, NodeId};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::warn;

/// A caller-supplied reference to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// A resolved node handle.
    Node(NodeId),
    /// A numeric id as supplied by the caller; may be negative or unknown.
    Id(i64),
    /// An element id string.
    ElementId(String),
}

impl NodeRef {
    /// Resolve against `graph`, returning `None` if no such node exists.
    pub fn resolve<G: GraphSource + ?Sized>(&self, graph: &G) -> Option<NodeId> {
        let id = match self {
            NodeRef::Node(id) => *id,
            NodeRef::Id(raw) => NodeId(u64::try_from(*raw).ok()?),
            NodeRef::ElementId(eid) => graph.node_by_element_id(eid)?,
        };
        graph.node(id).map(|n| n.id)
    }
}

impl From<NodeId> for NodeRef {
    fn from(id: NodeId) -> Self {
        NodeRef::Node(id)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Node(id) => write!(f, "{}", id),
            NodeRef::Id(id) => write!(f, "{}", id),
            NodeRef::ElementId(eid) => write!(f, "'{}'", eid),
        }
    }
}

/// Unresolved node filter lists as supplied by the caller.
///
/// `whitelist` and `blacklist` are legacy spellings of `allowlist` and
/// `denylist`. When both spellings are given the modern one wins outright;
/// the lists are not merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilterInput {
    /// Only these nodes may be included or expanded.
    pub allowlist: Option<Vec<NodeRef>>,
    /// Legacy alias of `allowlist`.
    pub whitelist: Option<Vec<NodeRef>>,
    /// These nodes and their subtrees are pruned.
    pub denylist: Option<Vec<NodeRef>>,
    /// Legacy alias of `denylist`.
    pub blacklist: Option<Vec<NodeRef>>,
    /// Results; expansion continues past them.
    pub end_nodes: Option<Vec<NodeRef>>,
    /// Results; expansion stops at them.
    pub terminator_nodes: Option<Vec<NodeRef>>,
}

impl NodeFilterInput {
    /// Resolve every list against `graph`.
    pub fn resolve<G: GraphSource + ?Sized>(&self, graph: &G) -> NodeFilterSet {
        let allowlist = self.allowlist.as_ref().or(self.whitelist.as_ref());
        let denylist = self.denylist.as_ref().or(self.blacklist.as_ref());
        NodeFilterSet {
            allowlist: resolve_all(graph, "allowlistNodes", allowlist),
            denylist: resolve_all(graph, "denylistNodes", denylist),
            end_nodes: resolve_all(graph, "endNodes", self.end_nodes.as_ref()),
            terminator_nodes: resolve_all(graph, "terminatorNodes", self.terminator_nodes.as_ref()),
        }
    }
}

fn resolve_all<G: GraphSource + ?Sized>(
    graph: &G,
    list: &'static str,
    refs: Option<&Vec<NodeRef>>,
) -> Option<FxHashSet<NodeId>> {
    // An absent or empty list places no restriction. A non-empty list
    // restricts even when none of its references resolve.
    let refs = refs.filter(|refs| !refs.is_empty())?;
    let mut ids = FxHashSet::default();
    for r in refs {
        match r.resolve(graph) {
            Some(id) => {
                ids.insert(id);
            }
            None => warn!(list, node = %r, "Skipping unresolvable node reference"),
        }
    }
    if ids.is_empty() {
        warn!(list, "No node reference resolved; the list matches nothing");
    }
    Some(ids)
}

/// Resolved node-identity filters.
///
/// Each role is `None` when the caller did not supply it. A supplied role
/// stays in force even if it resolved to no nodes: an empty allowlist
/// admits nothing, and empty end or terminator sets keep end-node mode on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeFilterSet {
    /// Allowed nodes.
    pub allowlist: Option<FxHashSet<NodeId>>,
    /// Pruned nodes.
    pub denylist: Option<FxHashSet<NodeId>>,
    /// End nodes.
    pub end_nodes: Option<FxHashSet<NodeId>>,
    /// Terminator nodes.
    pub terminator_nodes: Option<FxHashSet<NodeId>>,
}

fn contains(set: &Option<FxHashSet<NodeId>>, node: NodeId) -> bool {
    set.as_ref().map_or(false, |ids| ids.contains(&node))
}

fn insert(set: &mut Option<FxHashSet<NodeId>>, node: NodeId) {
    set.get_or_insert_with(FxHashSet::default).insert(node);
}

impl NodeFilterSet {
    /// Add `node` to the allowlist, creating it if absent.
    pub fn allow(&mut self, node: NodeId) {
        insert(&mut self.allowlist, node);
    }

    /// Add `node` to the denylist, creating it if absent.
    pub fn deny(&mut self, node: NodeId) {
        insert(&mut self.denylist, node);
    }

    /// Add `node` to the end nodes, creating the set if absent.
    pub fn end_at(&mut self, node: NodeId) {
        insert(&mut self.end_nodes, node);
    }

    /// Add `node` to the terminator nodes, creating the set if absent.
    pub fn terminate_at(&mut self, node: NodeId) {
        insert(&mut self.terminator_nodes, node);
    }

    /// Whether an allowlist restricts the traversal.
    pub fn has_allowlist(&self) -> bool {
        self.allowlist.is_some()
    }

    /// Whether end or terminator nodes were given.
    pub fn has_end_nodes(&self) -> bool {
        self.end_nodes.is_some() || self.terminator_nodes.is_some()
    }

    /// Whether `node` passes the allowlist (vacuously true without one).
    pub fn allows(&self, node: NodeId) -> bool {
        self.allowlist.as_ref().map_or(true, |ids| ids.contains(&node))
    }

    /// Whether `node` is denied.
    pub fn denies(&self, node: NodeId) -> bool {
        contains(&self.denylist, node)
    }

    /// Whether `node` is an end node.
    pub fn is_end_node(&self, node: NodeId) -> bool {
        contains(&self.end_nodes, node)
    }

    /// Whether `node` is a terminator node.
    pub fn is_terminator(&self, node: NodeId) -> bool {
        contains(&self.terminator_nodes, node)
    }
}
