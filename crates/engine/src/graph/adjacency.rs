//! In-memory adjacency index for fast neighbor enumeration.
//!
//! The adjacency index is a materialized view of the graph's relationship
//! structure. Each node maps to the relationship ids incident to it, in
//! insertion order, so enumeration order is stable for a given snapshot.

use pathexpand_core::{NodeId, RelId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency lists for a single graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Forward adjacency: start → [rel]
    pub outgoing: FxHashMap<NodeId, Vec<RelId>>,
    /// Reverse adjacency: end → [rel]
    pub incoming: FxHashMap<NodeId, Vec<RelId>>,
    /// Set of all node ids in the graph.
    pub nodes: FxHashSet<NodeId>,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the index.
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    /// Remove a node and return the ids of all its incident relationships,
    /// which are dropped from the other endpoints' lists as well.
    pub fn remove_node(
        &mut self,
        node: NodeId,
        endpoints: impl Fn(RelId) -> Option<(NodeId, NodeId)>,
    ) -> Vec<RelId> {
        self.nodes.remove(&node);
        let mut removed = Vec::new();

        // Remove outgoing relationships
        if let Some(rels) = self.outgoing.remove(&node) {
            for rel in rels {
                if let Some((_, end)) = endpoints(rel) {
                    if let Some(incoming) = self.incoming.get_mut(&end) {
                        incoming.retain(|r| *r != rel);
                    }
                }
                removed.push(rel);
            }
        }

        // Remove incoming relationships
        if let Some(rels) = self.incoming.remove(&node) {
            for rel in rels {
                if let Some((start, _)) = endpoints(rel) {
                    if let Some(outgoing) = self.outgoing.get_mut(&start) {
                        outgoing.retain(|r| *r != rel);
                    }
                }
                if !removed.contains(&rel) {
                    removed.push(rel);
                }
            }
        }
        removed
    }

    /// Add a relationship to the index.
    pub fn add_relationship(&mut self, rel: RelId, start: NodeId, end: NodeId) {
        self.outgoing.entry(start).or_default().push(rel);
        self.incoming.entry(end).or_default().push(rel);
    }

    /// Remove a relationship from the index.
    pub fn remove_relationship(&mut self, rel: RelId, start: NodeId, end: NodeId) {
        if let Some(rels) = self.outgoing.get_mut(&start) {
            rels.retain(|r| *r != rel);
        }
        if let Some(rels) = self.incoming.get_mut(&end) {
            rels.retain(|r| *r != rel);
        }
    }

    /// Relationship ids leaving `node`.
    pub fn outgoing(&self, node: NodeId) -> &[RelId] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Relationship ids arriving at `node`.
    pub fn incoming(&self, node: NodeId) -> &[RelId] {
        self.incoming.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}
