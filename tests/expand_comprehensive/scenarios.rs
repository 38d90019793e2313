//! Recorded behaviours over the fixture graph.

use crate::test_utils::*;
use pathexpand::{Error, Path, PathExpander};
use serde_json::json;
use std::collections::HashSet;

const MOVIE_FILTER: &str = "ACTED_IN|PRODUCED>|FOLLOWS";

// =============================================================================
// Positional expansion
// =============================================================================

#[test]
fn matrix_two_levels_yields_eleven_paths() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand(json!("matrix"), Some(MOVIE_FILTER), Some(""), 0, 2)
        .unwrap();

    assert_eq!(rows.len(), 11);
    let distinct: HashSet<Path> = rows.iter().flatten().cloned().collect();
    assert_eq!(distinct.len(), 11);
    assert_eq!(
        end_ids(&g, &rows),
        vec![
            "matrix", "keanu", "carrie", "laurence", "johnny", "reloaded", "carrie", "reloaded",
            "keanu", "reloaded", "indie",
        ]
    );
}

#[test]
fn produced_is_only_followed_outgoing() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand(json!("matrix"), Some(MOVIE_FILTER), None, 1, 1)
        .unwrap();
    // joel PRODUCED matrix points into the start node, so joel is not reached.
    assert_eq!(end_ids(&g, &rows), vec!["keanu", "carrie", "laurence"]);
}

#[test]
fn node_global_reaches_each_node_once() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"relationshipFilter": MOVIE_FILTER, "maxLevel": 2}),
        )
        .unwrap();
    assert_eq!(
        end_ids(&g, &rows),
        vec!["matrix", "keanu", "carrie", "laurence", "johnny", "reloaded", "indie"]
    );
}

// =============================================================================
// Termination
// =============================================================================

#[test]
fn western_terminator_stops_at_first_western() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("unforgiven"), json!({"labelFilter": "/Western"}))
        .unwrap();
    assert_eq!(rows.len(), 1);
    let path = rows[0].as_ref().unwrap();
    assert_eq!(path_ids(&g, path), vec!["unforgiven", "clint"]);
}

#[test]
fn western_end_node_keeps_expanding() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("unforgiven"), json!({"labelFilter": ">Western"}))
        .unwrap();
    // Unlike the terminator, gene is reached through clint.
    assert_eq!(end_ids(&g, &rows), vec!["clint", "gene"]);
}

// =============================================================================
// Subgraph min level
// =============================================================================

#[test]
fn subgraph_nodes_rejects_min_level_two() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api
        .subgraph_nodes(json!("matrix"), json!({"minLevel": 2}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    assert!(err
        .to_string()
        .contains("minLevel can only be 0 or 1 in subgraphNodes()"));
}

// =============================================================================
// Denylist precedence
// =============================================================================

#[test]
fn denylist_beats_allowlist() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"denylistNodes": ["keanu"], "allowlistNodes": ["keanu", "carrie"]}),
        )
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix", "carrie"]);
    for path in rows.iter().flatten() {
        assert!(!path_ids(&g, path).contains(&"keanu".to_string()));
    }
}
