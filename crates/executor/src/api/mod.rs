//! Typed entry points.
//!
//! [`PathExpander`] wraps an [`Executor`] and unpacks each command's
//! [`Output`](crate::Output) into the row type of its entry point.

mod expand;

use pathexpand_core::GraphSource;
use pathexpand_engine::expand::CancellationToken;

use crate::Executor;

/// Typed facade over an [`Executor`].
pub struct PathExpander<'g, G: ?Sized> {
    executor: Executor<'g, G>,
}

impl<'g, G> PathExpander<'g, G>
where
    G: GraphSource + ?Sized,
{
    /// Create a facade over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self {
            executor: Executor::new(graph),
        }
    }

    /// Share `token` with every traversal started through this facade.
    pub fn with_cancellation(self, token: CancellationToken) -> Self {
        Self {
            executor: self.executor.with_cancellation(token),
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &Executor<'g, G> {
        &self.executor
    }
}
