//! Configurable path expansion.
//!
//! A traversal starts from one or more nodes, follows relationships admitted
//! by a [`RelationshipFilter`], and decides for every node it visits whether
//! to emit it, expand it, both or neither. The decision combines a
//! [`LabelFilter`], resolved [`NodeFilterSet`]s and the depth bounds of a
//! [`TraversalConfig`]; repetition is governed by a [`Uniqueness`] policy.
//!
//! [`traverse`] yields raw paths; the functions in [`results`] shape them
//! for each public entry point.

pub mod config;
pub mod evaluator;
pub mod label_filter;
pub mod node_filter;
pub mod rel_filter;
pub mod results;
pub mod traversal;
pub mod uniqueness;

pub use config::{CancellationToken, TraversalConfig};
pub use evaluator::{Evaluation, Evaluator, Stage};
pub use label_filter::{CompoundLabel, LabelAlternatives, LabelFilter, LabelRule};
pub use node_filter::{NodeFilterInput, NodeFilterSet, NodeRef};
pub use rel_filter::{RelFilterEntry, RelationshipFilter};
pub use results::{
    expand_paths, spanning_tree, subgraph_all, subgraph_nodes, Procedure, Subgraph,
};
pub use traversal::{traverse, TraversalOutput, TraversalStats};
pub use uniqueness::{Uniqueness, UniquenessTracker, DEFAULT_RECENT_WINDOW};
