//! Shared fixtures and helpers.

use pathexpand::{GraphSnapshot, GraphSource, MemoryGraph, NodeId, Path};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route engine logs to the test harness; visible with `--nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// The movie/actor fixture graph.
///
/// ```text
/// keanu, carrie, laurence -ACTED_IN-> matrix
/// joel -PRODUCED-> matrix, lana -DIRECTED-> matrix
/// keanu -ACTED_IN-> johnny, reloaded
/// carrie -FOLLOWS-> keanu, carrie -ACTED_IN-> reloaded
/// laurence -ACTED_IN-> reloaded, laurence -PRODUCED-> indie
/// lana -DIRECTED-> reloaded, joel -PRODUCED-> reloaded
///
/// clint:Western, morgan -ACTED_IN-> unforgiven
/// gene:Western -FOLLOWS-> clint
/// ```
pub fn movies() -> MemoryGraph {
    init_tracing();
    let snapshot: GraphSnapshot =
        serde_json::from_str(include_str!("fixtures/movies.json")).unwrap();
    MemoryGraph::from_snapshot(snapshot).unwrap()
}

/// Element id of a node.
pub fn eid(g: &MemoryGraph, id: NodeId) -> String {
    g.node(id).unwrap().element_id.clone()
}

/// Element ids of the end node of each row; `None` rows are skipped.
pub fn end_ids(g: &MemoryGraph, rows: &[Option<Path>]) -> Vec<String> {
    rows.iter()
        .flatten()
        .map(|p| eid(g, p.end_node()))
        .collect()
}

/// Element ids along a path.
pub fn path_ids(g: &MemoryGraph, path: &Path) -> Vec<String> {
    path.nodes().iter().map(|n| eid(g, *n)).collect()
}

/// Element ids of node rows.
pub fn node_ids(g: &MemoryGraph, rows: &[Option<NodeId>]) -> Vec<String> {
    rows.iter().flatten().map(|n| eid(g, *n)).collect()
}
