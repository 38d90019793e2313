//! Serializable graph snapshots.
//!
//! Snapshots are the interchange form of a [`MemoryGraph`]: fixtures are
//! loaded from JSON with [`MemoryGraph::from_snapshot`] and a live graph is
//! captured with [`MemoryGraph::snapshot`].

use pathexpand_core::{Direction, ExpandResult, GraphSource, Node, Relationship};
use serde::{Deserialize, Serialize};

use super::MemoryGraph;

/// A snapshot of a graph at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All nodes, ordered by id.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All relationships, ordered by id.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl GraphSnapshot {
    /// Number of nodes in the snapshot.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of relationships in the snapshot.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}

impl MemoryGraph {
    /// Build a graph from a snapshot. Relationships are indexed in snapshot
    /// order, which fixes the enumeration order seen by traversals.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> ExpandResult<Self> {
        let mut graph = MemoryGraph::new();
        for node in snapshot.nodes {
            graph.insert_node(node)?;
        }
        for rel in snapshot.relationships {
            graph.insert_relationship(rel)?;
        }
        Ok(graph)
    }

    /// Capture the current graph. Nodes and relationships are sorted by id.
    pub fn snapshot(&self) -> GraphSnapshot {
        let nodes: Vec<Node> = self
            .node_ids()
            .into_iter()
            .filter_map(|id| self.node(id).cloned())
            .collect();
        let mut relationships: Vec<Relationship> = nodes
            .iter()
            .flat_map(|n| GraphSource::relationships(self, n.id, Direction::Outgoing, None))
            .cloned()
            .collect();
        relationships.sort_by_key(|r| r.id);
        GraphSnapshot {
            nodes,
            relationships,
        }
    }
}
