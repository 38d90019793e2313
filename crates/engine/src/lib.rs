//! Path expansion engine.
//!
//! - [`graph`]: an in-memory [`GraphSource`](pathexpand_core::GraphSource)
//!   with JSON snapshots
//! - [`expand`]: filter grammars, uniqueness policies and the traversal
//!   itself

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod expand;
pub mod graph;

pub use expand::{
    expand_paths, spanning_tree, subgraph_all, subgraph_nodes, traverse, CancellationToken,
    LabelFilter, NodeFilterInput, NodeFilterSet, NodeRef, Procedure, RelationshipFilter,
    Subgraph, TraversalConfig, TraversalOutput, TraversalStats, Uniqueness,
};
pub use graph::{GraphSnapshot, MemoryGraph};
