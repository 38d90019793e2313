//! Error type shared by the traversal crates.

use thiserror::Error;

/// Result type alias for traversal operations.
pub type ExpandResult<T> = std::result::Result<T, ExpandError>;

/// Every uniqueness policy name accepted by the engine, in documentation order.
pub const UNIQUENESS_NAMES: [&str; 9] = [
    "NODE_GLOBAL",
    "NODE_PATH",
    "NODE_RECENT",
    "NODE_LEVEL",
    "RELATIONSHIP_GLOBAL",
    "RELATIONSHIP_PATH",
    "RELATIONSHIP_RECENT",
    "RELATIONSHIP_LEVEL",
    "NONE",
];

/// Errors raised by configuration resolution or by a running traversal.
///
/// Configuration errors are raised before any node is visited. An empty
/// result is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// Malformed configuration value.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Unknown uniqueness policy name.
    #[error(
        "Invalid uniqueness: '{value}'. Valid values are: NODE_GLOBAL, NODE_PATH, NODE_RECENT, \
         NODE_LEVEL, RELATIONSHIP_GLOBAL, RELATIONSHIP_PATH, RELATIONSHIP_RECENT, \
         RELATIONSHIP_LEVEL, NONE"
    )]
    InvalidUniqueness {
        /// The rejected name.
        value: String,
    },

    /// `minLevel` outside {0, 1} for a subgraph-family call.
    #[error("minLevel can only be 0 or 1 in {procedure}(), got {value}")]
    InvalidMinLevel {
        /// Entry point name, e.g. `subgraphNodes`.
        procedure: &'static str,
        /// The rejected level.
        value: i64,
    },

    /// A start node reference could not be resolved.
    #[error("node not found: {node}")]
    NodeNotFound {
        /// The unresolved reference, rendered for display.
        node: String,
    },

    /// The traversal was cancelled through its cancellation token.
    #[error("traversal cancelled after visiting {visited} nodes")]
    Cancelled {
        /// Nodes visited before the cancellation was observed.
        visited: usize,
    },
}

impl ExpandError {
    /// Shorthand for [`ExpandError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ExpandError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Whether this error was raised before traversal began.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, ExpandError::Cancelled { .. })
    }
}
