//! Configuration errors and cancellation.

use crate::test_utils::*;
use pathexpand::{CancellationToken, Error, PathExpander};
use serde_json::json;

#[test]
fn invalid_uniqueness_lists_valid_names() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api
        .expand_config(json!("matrix"), json!({"uniqueness": "BOGUS"}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    let msg = err.to_string();
    assert!(msg.contains("Invalid uniqueness: 'BOGUS'"));
    assert!(msg.contains("RELATIONSHIP_RECENT"));
}

#[test]
fn uniqueness_names_are_case_insensitive() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"uniqueness": "node_path", "maxLevel": 1}))
        .unwrap();
    assert_eq!(rows.len(), 6);
}

#[test]
fn subgraph_family_min_level_messages() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api
        .subgraph_all(json!("matrix"), json!({"minLevel": 3}))
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("minLevel can only be 0 or 1 in subgraphAll()"));
    let err = api
        .spanning_tree(json!("matrix"), json!({"minLevel": -1}))
        .unwrap_err();
    assert!(err
        .to_string()
        .contains("minLevel can only be 0 or 1 in spanningTree()"));
}

#[test]
fn negative_min_level_is_invalid_input_for_expand() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api
        .expand_config(json!("matrix"), json!({"minLevel": -1}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn zero_sample_is_rejected() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api
        .expand_config(json!("matrix"), json!({"sample": 0}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
}

#[test]
fn options_must_be_a_map() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api.expand_config(json!("matrix"), json!([1, 2])).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
    let err = api
        .expand_config(json!("matrix"), json!({"maxLevel": "two"}))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { .. }));
}

#[test]
fn unknown_start_node() {
    let g = movies();
    let api = PathExpander::new(&g);
    let err = api.expand_config(json!("nobody"), json!({})).unwrap_err();
    assert!(matches!(err, Error::NodeNotFound { .. }));
    assert!(err.to_string().contains("nobody"));
}

#[test]
fn cancelled_traversal_aborts() {
    let g = movies();
    let token = CancellationToken::new();
    token.cancel();
    let api = PathExpander::new(&g).with_cancellation(token);
    let err = api.subgraph_nodes(json!("matrix"), json!({})).unwrap_err();
    assert!(matches!(err, Error::Aborted { .. }));
}
