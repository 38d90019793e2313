//! Command handlers.
//!
//! Each handler normalizes its inputs, builds a traversal configuration and
//! runs one entry point of the engine.

pub mod config;
pub mod expand;

pub use config::{node_refs, parse_uniqueness, start_nodes, ExpandOptions};
