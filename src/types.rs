//! Public types for the pathexpand API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Graph model
// ============================================================================

pub use pathexpand_core::{Direction, GraphSource, Node, NodeId, Path, RelId, Relationship};

// In-memory graph and its JSON snapshot form
pub use pathexpand_engine::{GraphSnapshot, MemoryGraph};

// ============================================================================
// Traversal configuration
// ============================================================================

pub use pathexpand_engine::expand::{
    CancellationToken, LabelFilter, NodeFilterInput, NodeFilterSet, NodeRef, RelationshipFilter,
    TraversalConfig, Uniqueness,
};

// ============================================================================
// Results
// ============================================================================

pub use pathexpand_engine::expand::{Procedure, Subgraph, TraversalOutput, TraversalStats};

// ============================================================================
// Errors
// ============================================================================

pub use pathexpand_core::{ExpandError, ExpandResult};
pub use pathexpand_executor::{Error, Result};
