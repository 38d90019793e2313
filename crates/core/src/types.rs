//! Core graph types consumed by the traversal engine.
//!
//! Nodes and relationships are read-only snapshots owned by a
//! [`GraphSource`](crate::GraphSource); the engine only ever borrows them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-assigned node identity, stable for the duration of one traversal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Engine-assigned relationship identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelId(pub u64);

impl fmt::Display for RelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Numeric identity.
    pub id: NodeId,
    /// Opaque string identity (e.g. `"4:abc:12"`).
    pub element_id: String,
    /// Labels carried by this node.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Arbitrary properties attached to this node.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Whether the node carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// A typed, directed relationship between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Numeric identity.
    pub id: RelId,
    /// Relationship type (e.g. `"ACTED_IN"`).
    pub rel_type: String,
    /// Start node (the relationship points away from it).
    pub start: NodeId,
    /// End node.
    pub end: NodeId,
    /// Arbitrary properties attached to this relationship.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl Relationship {
    /// The endpoint opposite `node`. Self-loops return `node` itself.
    pub fn other_node(&self, node: NodeId) -> NodeId {
        if self.start == node {
            self.end
        } else {
            self.start
        }
    }

    /// Direction of this relationship as seen from `node`.
    pub fn direction_from(&self, node: NodeId) -> Direction {
        match (self.start == node, self.end == node) {
            (true, true) => Direction::Both,
            (true, false) => Direction::Outgoing,
            _ => Direction::Incoming,
        }
    }
}

/// Direction for traversal operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Follow outgoing relationships (start → end).
    Outgoing,
    /// Follow incoming relationships (end → start).
    Incoming,
    /// Follow relationships in both directions.
    Both,
}

impl Direction {
    /// Whether a relationship seen in direction `seen` is admitted by `self`.
    pub fn admits(self, seen: Direction) -> bool {
        match self {
            Direction::Both => true,
            _ => seen == Direction::Both || seen == self,
        }
    }
}

/// An ordered, non-empty walk of alternating nodes and relationships.
///
/// Always starts and ends on a node; `nodes().len() == relationships().len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Path {
    nodes: Vec<NodeId>,
    relationships: Vec<RelId>,
}

impl Path {
    /// A zero-length path consisting of a single node.
    pub fn single(node: NodeId) -> Self {
        Self {
            nodes: vec![node],
            relationships: Vec::new(),
        }
    }

    /// Build a path from its parts, or `None` if the shape is not
    /// node (rel node)*.
    pub fn from_parts(nodes: Vec<NodeId>, relationships: Vec<RelId>) -> Option<Self> {
        if nodes.is_empty() || nodes.len() != relationships.len() + 1 {
            return None;
        }
        Some(Self {
            nodes,
            relationships,
        })
    }

    /// Extend the path by one hop.
    pub fn push(&mut self, rel: RelId, node: NodeId) {
        self.relationships.push(rel);
        self.nodes.push(node);
    }

    /// Number of relationships in the path.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// True for single-node paths.
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// First node of the path.
    pub fn start_node(&self) -> NodeId {
        self.nodes[0]
    }

    /// Last node of the path.
    pub fn end_node(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Nodes in walk order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Relationships in walk order.
    pub fn relationships(&self) -> &[RelId] {
        &self.relationships
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.nodes[0])?;
        for (rel, node) in self.relationships.iter().zip(&self.nodes[1..]) {
            write!(f, "-[{}]-({})", rel, node)?;
        }
        Ok(())
    }
}
