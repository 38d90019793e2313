//! Error conversion from engine error types.

use pathexpand_core::{ExpandError, ExpandResult};

use crate::Error;

/// Convert an engine error to an executor error.
///
/// Configuration problems map to [`Error::InvalidConfig`] and keep the
/// engine's message verbatim.
impl From<ExpandError> for Error {
    fn from(err: ExpandError) -> Self {
        match err {
            ExpandError::InvalidInput { reason } => Error::InvalidInput { reason },
            e @ ExpandError::InvalidUniqueness { .. } => Error::InvalidConfig {
                reason: e.to_string(),
            },
            e @ ExpandError::InvalidMinLevel { .. } => Error::InvalidConfig {
                reason: e.to_string(),
            },
            ExpandError::NodeNotFound { node } => Error::NodeNotFound { node },
            ExpandError::Cancelled { visited } => Error::Aborted {
                reason: format!("Traversal cancelled after visiting {} nodes", visited),
            },
        }
    }
}

/// Convert an engine result to an executor result.
pub fn convert_result<T>(result: ExpandResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}

/// Convert a JSON decoding failure.
pub fn serde_error(err: serde_json::Error) -> Error {
    Error::Serialization {
        reason: err.to_string(),
    }
}
