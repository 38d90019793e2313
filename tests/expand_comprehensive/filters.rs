//! Label filters, node filters and start-node handling.

use crate::test_utils::*;
use pathexpand::PathExpander;
use serde_json::json;

// =============================================================================
// Label filters
// =============================================================================

#[test]
fn label_allowlist_prunes_other_labels() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("keanu"), json!({"labelFilter": "Movie", "maxLevel": 1}))
        .unwrap();
    // carrie follows keanu but is not a Movie.
    assert_eq!(end_ids(&g, &rows), vec!["keanu", "matrix", "johnny", "reloaded"]);
}

#[test]
fn label_denylist_blocks_expansion_through_node() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"labelFilter": "-Actor", "maxLevel": 2}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix", "joel", "lana", "reloaded"]);
}

#[test]
fn compound_label_requires_every_label() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"labelFilter": ">:Person:Producer", "maxLevel": 1}),
        )
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["joel"]);
}

#[test]
fn wildcard_label_filter_allows_everything() {
    let g = movies();
    let api = PathExpander::new(&g);
    let plain = api
        .expand_config(json!("matrix"), json!({"maxLevel": 1}))
        .unwrap();
    let wildcard = api
        .expand_config(json!("matrix"), json!({"labelFilter": "*", "maxLevel": 1}))
        .unwrap();
    assert_eq!(plain, wildcard);
    assert_eq!(plain.len(), 6);
}

// =============================================================================
// Node filters
// =============================================================================

#[test]
fn end_and_terminator_nodes_by_element_id() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({
                "endNodes": ["reloaded"],
                "terminatorNodes": [{"elementId": "keanu"}],
                "maxLevel": 3,
            }),
        )
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["keanu", "reloaded"]);
    let reloaded = rows[1].as_ref().unwrap();
    assert_eq!(path_ids(&g, reloaded), vec!["matrix", "carrie", "reloaded"]);
}

#[test]
fn legacy_blacklist_alias() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"blacklistNodes": ["carrie"], "maxLevel": 1}))
        .unwrap();
    assert_eq!(
        end_ids(&g, &rows),
        vec!["matrix", "keanu", "laurence", "joel", "lana"]
    );
}

#[test]
fn legacy_whitelist_alias() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"whitelistNodes": [1], "maxLevel": 1}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix", "keanu"]);
}

#[test]
fn modern_key_replaces_legacy_alias() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"denylistNodes": ["joel"], "blacklistNodes": ["carrie"], "maxLevel": 1}),
        )
        .unwrap();
    let ends = end_ids(&g, &rows);
    assert!(ends.contains(&"carrie".to_string()));
    assert!(!ends.contains(&"joel".to_string()));
}

#[test]
fn unresolvable_filter_reference_is_skipped() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"denylistNodes": ["nobody", 999], "maxLevel": 1}),
        )
        .unwrap();
    assert_eq!(rows.len(), 6);
}

#[test]
fn unresolved_allowlist_admits_only_the_start() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"allowlistNodes": ["ghost"], "maxLevel": 1}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix"]);

    let rows = api
        .expand_config(json!("matrix"), json!({"whitelistNodes": [999], "maxLevel": 1}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["matrix"]);
}

#[test]
fn empty_allowlist_places_no_restriction() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"allowlistNodes": [], "maxLevel": 1}))
        .unwrap();
    assert_eq!(rows.len(), 6);
}

#[test]
fn unresolved_end_nodes_match_nothing() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!("matrix"), json!({"endNodes": ["ghost"], "maxLevel": 1}))
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn unresolved_terminators_match_nothing() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"terminatorNodes": [{"elementId": "ghost"}], "maxLevel": 1}),
        )
        .unwrap();
    assert!(rows.is_empty());

    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"terminatorNodes": ["ghost"], "maxLevel": 1, "optional": true}),
        )
        .unwrap();
    assert_eq!(rows, vec![None]);
}

// =============================================================================
// Start node
// =============================================================================

#[test]
fn filter_start_node_applies_denylist_to_start() {
    let g = movies();
    let api = PathExpander::new(&g);
    let unfiltered = api
        .expand_config(json!("matrix"), json!({"labelFilter": "-Movie", "maxLevel": 1}))
        .unwrap();
    assert_eq!(end_ids(&g, &unfiltered)[0], "matrix");

    let filtered = api
        .expand_config(
            json!("matrix"),
            json!({"labelFilter": "-Movie", "filterStartNode": true}),
        )
        .unwrap();
    assert!(filtered.is_empty());
}

#[test]
fn optional_yields_one_empty_row() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(
            json!("matrix"),
            json!({"labelFilter": "-Movie", "filterStartNode": true, "optional": true}),
        )
        .unwrap();
    assert_eq!(rows, vec![None]);
}

#[test]
fn multiple_start_nodes() {
    let g = movies();
    let api = PathExpander::new(&g);
    let rows = api
        .expand_config(json!(["johnny", {"id": 8}]), json!({"maxLevel": 0}))
        .unwrap();
    assert_eq!(end_ids(&g, &rows), vec!["johnny", "indie"]);
}

#[test]
fn null_start_yields_nothing() {
    let g = movies();
    let api = PathExpander::new(&g);
    assert!(api.expand_config(json!(null), json!({})).unwrap().is_empty());
    assert!(api.expand_config(json!([]), json!({})).unwrap().is_empty());
}
