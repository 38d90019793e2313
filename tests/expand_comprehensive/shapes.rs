//! Subgraph family, ordering, limits and JSON commands.

use crate::test_utils::*;
use pathexpand::{Executor, Output, PathExpander, RelId};
use serde_json::json;

// =============================================================================
// Subgraph family
// =============================================================================

#[test]
fn subgraph_nodes_one_level() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .subgraph_nodes(json!("matrix"), json!({"maxLevel": 1}))
        .unwrap();
    assert_eq!(
        node_ids(&g, &rows),
        vec!["matrix", "keanu", "carrie", "laurence", "joel", "lana"]
    );
}

#[test]
fn subgraph_all_covers_connecting_relationships() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api.subgraph_all(json!("unforgiven"), json!({})).unwrap();
    assert_eq!(rows.len(), 1);
    let sub = rows[0].as_ref().unwrap();
    let nodes: Vec<String> = sub.nodes.iter().map(|n| eid(&g, *n)).collect();
    assert_eq!(nodes, vec!["unforgiven", "clint", "morgan", "gene"]);
    assert_eq!(sub.relationships, vec![RelId(13), RelId(14), RelId(15)]);
}

#[test]
fn subgraph_all_respects_relationship_types() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .subgraph_all(json!("unforgiven"), json!({"relationshipFilter": "ACTED_IN"}))
        .unwrap();
    let sub = rows[0].as_ref().unwrap();
    assert_eq!(sub.nodes.len(), 3);
    assert_eq!(sub.relationships, vec![RelId(13), RelId(14)]);
}

#[test]
fn spanning_tree_ignores_requested_uniqueness() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .spanning_tree(
            json!("matrix"),
            json!({
                "relationshipFilter": "ACTED_IN|PRODUCED>|FOLLOWS",
                "maxLevel": 2,
                "uniqueness": "RELATIONSHIP_PATH",
                "bfs": false,
            }),
        )
        .unwrap();
    assert_eq!(
        end_ids(&g, &rows),
        vec!["matrix", "keanu", "carrie", "laurence", "johnny", "reloaded", "indie"]
    );
}

// =============================================================================
// Ordering and bounds
// =============================================================================

#[test]
fn depth_first_reaches_keanu_through_matrix() {
    let g = movies();
    let api = PathExpander::new(&g);
    let dfs = api
        .expand_config(json!("carrie"), json!({"bfs": false, "maxLevel": 2}))
        .unwrap();
    assert_eq!(
        end_ids(&g, &dfs),
        vec!["carrie", "matrix", "keanu", "laurence", "joel", "lana", "reloaded"]
    );
    let keanu = dfs[2].as_ref().unwrap();
    assert_eq!(path_ids(&g, keanu), vec!["carrie", "matrix", "keanu"]);

    let bfs = api
        .expand_config(json!("carrie"), json!({"maxLevel": 2}))
        .unwrap();
    let keanu = bfs
        .iter()
        .flatten()
        .find(|p| eid(&g, p.end_node()) == "keanu")
        .unwrap();
    assert_eq!(keanu.len(), 1);
}

#[test]
fn limit_truncates_in_order() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"limit": 3}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix", "keanu", "carrie"]);
}

#[test]
fn limit_bounds_unrestricted_uniqueness_on_cycles() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("carrie"), json!({"uniqueness": "NONE", "limit": 50}))
        .unwrap();
    assert_eq!(rows.len(), 50);
}

#[test]
fn sample_caps_relationships_per_node() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"sample": 2, "maxLevel": 1}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix", "keanu", "carrie"]);
}

#[test]
fn min_level_drops_short_paths() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({
                "relationshipFilter": "ACTED_IN|PRODUCED>|FOLLOWS",
                "minLevel": 2,
                "maxLevel": 2,
            }),
        )
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["johnny", "reloaded", "indie"]);
    assert!(rows.iter().flatten().all(|p| p.len() == 2));
}

// =============================================================================
// JSON commands
// =============================================================================

#[test]
fn json_command_round_trip() {
    let g = movies();
    let out = Executor::new(&g)
        .execute_json(
            r#"{"command": "Expand", "start": "unforgiven",
                "relationshipFilter": "<ACTED_IN", "maxLevel": 1}"#,
        )
        .unwrap();
    match &out {
        Output::Paths(rows) => assert_eq!(end_ids(&g, rows), vec!["unforgiven", "clint", "morgan"]),
        other => panic!("unexpected output {:?}", other),
    }

    let encoded = serde_json::to_value(&out).unwrap();
    assert_eq!(encoded["kind"], "Paths");
    assert_eq!(encoded["rows"].as_array().unwrap().len(), 3);
}
