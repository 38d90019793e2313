//! In-memory property graph.
//!
//! [`MemoryGraph`] is the reference [`GraphSource`]: a mutable node and
//! relationship store with an adjacency index, walked read-only by the
//! traversal engine. Embedders with their own storage implement
//! [`GraphSource`] directly instead.

pub mod adjacency;
mod snapshot;

use pathexpand_core::{
    Direction, ExpandError, ExpandResult, GraphSource, Node, NodeId, RelId, Relationship,
};
use rustc_hash::FxHashMap;

use adjacency::AdjacencyIndex;
pub use snapshot::GraphSnapshot;

/// In-memory graph store providing CRUD operations on nodes and relationships.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    nodes: FxHashMap<NodeId, Node>,
    relationships: FxHashMap<RelId, Relationship>,
    element_ids: FxHashMap<String, NodeId>,
    adjacency: AdjacencyIndex,
    next_node: u64,
    next_rel: u64,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Node CRUD
    // =========================================================================

    /// Add a node with the given labels and return its id.
    pub fn add_node(&mut self, labels: &[&str]) -> NodeId {
        self.add_node_with_properties(labels, serde_json::Map::new())
    }

    /// Add a node with labels and properties.
    pub fn add_node_with_properties(
        &mut self,
        labels: &[&str],
        properties: serde_json::Map<String, serde_json::Value>,
    ) -> NodeId {
        let id = NodeId(self.next_node);
        let mut element_id = format!("n:{}", id.0);
        while self.element_ids.contains_key(&element_id) {
            element_id.push('\'');
        }
        self.next_node += 1;
        self.element_ids.insert(element_id.clone(), id);
        self.adjacency.add_node(id);
        self.nodes.insert(
            id,
            Node {
                id,
                element_id,
                labels: labels.iter().map(|l| l.to_string()).collect(),
                properties,
            },
        );
        id
    }

    /// Insert a fully-formed node, keeping its id and element id.
    pub fn insert_node(&mut self, node: Node) -> ExpandResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(ExpandError::invalid_input(format!(
                "Node {} already exists",
                node.id
            )));
        }
        if node.element_id.is_empty() {
            return Err(ExpandError::invalid_input("Element id must not be empty"));
        }
        if self.element_ids.contains_key(&node.element_id) {
            return Err(ExpandError::invalid_input(format!(
                "Element id '{}' already in use",
                node.element_id
            )));
        }
        self.next_node = self.next_node.max(node.id.0 + 1);
        self.element_ids.insert(node.element_id.clone(), node.id);
        self.adjacency.add_node(node.id);
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Remove a node and all its incident relationships.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.remove(&id) else {
            return false;
        };
        self.element_ids.remove(&node.element_id);
        let rels = &self.relationships;
        let removed = self
            .adjacency
            .remove_node(id, |r| rels.get(&r).map(|rel| (rel.start, rel.end)));
        for rel in removed {
            self.relationships.remove(&rel);
        }
        true
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All node ids in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        ids
    }

    // =========================================================================
    // Relationship CRUD
    // =========================================================================

    /// Add a relationship `start -[rel_type]-> end` and return its id.
    pub fn add_relationship(
        &mut self,
        start: NodeId,
        end: NodeId,
        rel_type: &str,
    ) -> ExpandResult<RelId> {
        let id = RelId(self.next_rel);
        self.insert_relationship(Relationship {
            id,
            rel_type: rel_type.to_string(),
            start,
            end,
            properties: serde_json::Map::new(),
        })?;
        Ok(id)
    }

    /// Insert a fully-formed relationship, keeping its id.
    pub fn insert_relationship(&mut self, rel: Relationship) -> ExpandResult<()> {
        validate_rel_type(&rel.rel_type)?;
        for endpoint in [rel.start, rel.end] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(ExpandError::NodeNotFound {
                    node: endpoint.to_string(),
                });
            }
        }
        if self.relationships.contains_key(&rel.id) {
            return Err(ExpandError::invalid_input(format!(
                "Relationship {} already exists",
                rel.id
            )));
        }
        self.next_rel = self.next_rel.max(rel.id.0 + 1);
        self.adjacency.add_relationship(rel.id, rel.start, rel.end);
        self.relationships.insert(rel.id, rel);
        Ok(())
    }

    /// Remove a relationship. Returns false if it did not exist.
    pub fn remove_relationship(&mut self, id: RelId) -> bool {
        match self.relationships.remove(&id) {
            Some(rel) => {
                self.adjacency.remove_relationship(id, rel.start, rel.end);
                true
            }
            None => false,
        }
    }

    /// Number of relationships.
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    /// Number of relationships incident to `node` in `direction`.
    ///
    /// A self-loop counts twice for [`Direction::Both`].
    pub fn degree(&self, node: NodeId, direction: Direction) -> usize {
        GraphSource::relationships(self, node, direction, None).len()
    }
}

/// Validate a relationship type.
fn validate_rel_type(t: &str) -> ExpandResult<()> {
    if t.is_empty() {
        return Err(ExpandError::invalid_input(
            "Relationship type must not be empty",
        ));
    }
    if t.contains(['|', '<', '>']) {
        return Err(ExpandError::invalid_input(format!(
            "Relationship type '{}' must not contain '|', '<' or '>'",
            t
        )));
    }
    Ok(())
}

impl GraphSource for MemoryGraph {
    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn relationship(&self, id: RelId) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    fn node_by_element_id(&self, element_id: &str) -> Option<NodeId> {
        self.element_ids.get(element_id).copied()
    }

    fn relationships(
        &self,
        node: NodeId,
        direction: Direction,
        rel_type: Option<&str>,
    ) -> Vec<&Relationship> {
        let (out, inc): (&[RelId], &[RelId]) = match direction {
            Direction::Outgoing => (self.adjacency.outgoing(node), &[]),
            Direction::Incoming => (&[], self.adjacency.incoming(node)),
            // Self-loops appear once from each side.
            Direction::Both => (self.adjacency.outgoing(node), self.adjacency.incoming(node)),
        };
        out.iter()
            .chain(inc.iter())
            .filter_map(|id| self.relationships.get(id))
            .filter(|rel| rel_type.map_or(true, |t| rel.rel_type == t))
            .collect()
    }
}
