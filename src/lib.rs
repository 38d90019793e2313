//! Configurable path expansion and subgraph traversal over property graphs.
//!
//! Two layers are exposed:
//!
//! - the options-record layer ([`PathExpander`], [`Executor`], [`Command`]),
//!   which takes JSON start nodes and options exactly as a query caller
//!   would supply them
//! - the typed engine ([`traverse`], [`TraversalConfig`] and the result
//!   adapters in [`expand`]) for embedders that build configurations
//!   directly
//!
//! ```
//! use pathexpand::{MemoryGraph, PathExpander};
//! use serde_json::json;
//!
//! let mut graph = MemoryGraph::new();
//! let keanu = graph.add_node(&["Person"]);
//! let matrix = graph.add_node(&["Movie"]);
//! graph.add_relationship(keanu, matrix, "ACTED_IN").unwrap();
//!
//! let api = PathExpander::new(&graph);
//! let rows = api
//!     .expand_config(json!(keanu.0), json!({"labelFilter": ">Movie"}))
//!     .unwrap();
//! assert_eq!(rows.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod types;

pub use types::*;

pub use pathexpand_engine::expand;
pub use pathexpand_engine::expand::{
    expand_paths, spanning_tree, subgraph_all, subgraph_nodes, traverse,
};
pub use pathexpand_executor::{Command, Executor, ExpandOptions, Output, PathExpander};
