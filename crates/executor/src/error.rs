//! Executor error type.

use thiserror::Error;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the executor.
///
/// Messages carry the underlying engine message unchanged so callers can
/// match on documented substrings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A value in the command or options record is malformed.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem.
        reason: String,
    },

    /// The options record is well-formed but not acceptable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// A start node could not be resolved.
    #[error("node not found: {node}")]
    NodeNotFound {
        /// The unresolved reference.
        node: String,
    },

    /// The traversal was cancelled.
    #[error("aborted: {reason}")]
    Aborted {
        /// Why the traversal stopped.
        reason: String,
    },

    /// The command itself could not be decoded.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Decoder message.
        reason: String,
    },

    /// An executor invariant was broken.
    #[error("internal error: {reason}")]
    Internal {
        /// Description of the problem.
        reason: String,
    },
}
