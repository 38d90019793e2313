//! Results returned by the [`Executor`](crate::Executor).

use pathexpand_core::{NodeId, Path};
use pathexpand_engine::expand::Subgraph;
use serde::Serialize;

/// Rows produced by a command. A `None` row is the single placeholder
/// emitted for an empty result under `optional: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows")]
pub enum Output {
    /// One path per row.
    Paths(Vec<Option<Path>>),
    /// One node per row.
    Nodes(Vec<Option<NodeId>>),
    /// One subgraph per row.
    Subgraphs(Vec<Option<Subgraph>>),
}

impl Output {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Output::Paths(rows) => rows.len(),
            Output::Nodes(rows) => rows.len(),
            Output::Subgraphs(rows) => rows.len(),
        }
    }

    /// True when there are no rows at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
