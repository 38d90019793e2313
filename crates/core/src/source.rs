//! The abstract graph data source consumed by the traversal engine.

use crate::types::{Direction, Node, NodeId, RelId, Relationship};

/// Read-only access to a graph snapshot.
///
/// Implementations must return incident relationships in a stable order for
/// an unmodified snapshot; traversal output order (and therefore `limit`
/// truncation) is derived from it.
pub trait GraphSource {
    /// Look up a node by numeric id.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Look up a relationship by numeric id.
    fn relationship(&self, id: RelId) -> Option<&Relationship>;

    /// Resolve an element-id string to a node id.
    fn node_by_element_id(&self, element_id: &str) -> Option<NodeId>;

    /// Relationships incident to `node` in `direction`, optionally restricted
    /// to one type.
    ///
    /// With [`Direction::Both`] a self-loop may be reported twice; callers
    /// deduplicate by relationship id.
    fn relationships(
        &self,
        node: NodeId,
        direction: Direction,
        rel_type: Option<&str>,
    ) -> Vec<&Relationship>;

    /// Labels of a node, empty if the node is unknown.
    fn labels(&self, id: NodeId) -> &[String] {
        self.node(id).map(|n| n.labels.as_slice()).unwrap_or(&[])
    }
}
