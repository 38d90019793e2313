//! Core types for pathexpand.
//!
//! This crate defines the data model shared by the traversal crates:
//! - [`Node`], [`Relationship`], [`Path`]: read-only graph snapshots
//! - [`GraphSource`]: the abstract graph the engine walks
//! - [`ExpandError`]: configuration and traversal errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;
pub mod types;

pub use error::{ExpandError, ExpandResult, UNIQUENESS_NAMES};
pub use source::GraphSource;
pub use types::{Direction, Node, NodeId, Path, RelId, Relationship};
