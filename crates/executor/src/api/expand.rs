//! Path expansion on the typed API surface.

use pathexpand_core::{GraphSource, NodeId, Path};
use pathexpand_engine::expand::Subgraph;
use serde_json::Value;

use super::PathExpander;
use crate::{Command, Error, Output, Result};

fn unexpected(command: &str) -> Error {
    Error::Internal {
        reason: format!("Unexpected output for {}", command),
    }
}

impl<G> PathExpander<'_, G>
where
    G: GraphSource + ?Sized,
{
    /// Expand paths with positional arguments.
    ///
    /// A negative `max_level` is unbounded. Uniqueness is
    /// `RELATIONSHIP_PATH`, so every distinct route is reported.
    pub fn expand(
        &self,
        start: Value,
        relationship_filter: Option<&str>,
        label_filter: Option<&str>,
        min_level: i64,
        max_level: i64,
    ) -> Result<Vec<Option<Path>>> {
        match self.executor.execute(Command::Expand {
            start,
            relationship_filter: relationship_filter.map(|s| s.to_string()),
            label_filter: label_filter.map(|s| s.to_string()),
            min_level,
            max_level,
        })? {
            Output::Paths(rows) => Ok(rows),
            _ => Err(unexpected("Expand")),
        }
    }

    /// Expand paths with an options record.
    pub fn expand_config(&self, start: Value, config: Value) -> Result<Vec<Option<Path>>> {
        match self
            .executor
            .execute(Command::ExpandConfig { start, config })?
        {
            Output::Paths(rows) => Ok(rows),
            _ => Err(unexpected("ExpandConfig")),
        }
    }

    /// Distinct nodes reachable from `start`.
    pub fn subgraph_nodes(&self, start: Value, config: Value) -> Result<Vec<Option<NodeId>>> {
        match self
            .executor
            .execute(Command::SubgraphNodes { start, config })?
        {
            Output::Nodes(rows) => Ok(rows),
            _ => Err(unexpected("SubgraphNodes")),
        }
    }

    /// Reachable nodes and the relationships among them.
    pub fn subgraph_all(&self, start: Value, config: Value) -> Result<Vec<Option<Subgraph>>> {
        match self
            .executor
            .execute(Command::SubgraphAll { start, config })?
        {
            Output::Subgraphs(rows) => Ok(rows),
            _ => Err(unexpected("SubgraphAll")),
        }
    }

    /// One shortest path to each reachable node.
    pub fn spanning_tree(&self, start: Value, config: Value) -> Result<Vec<Option<Path>>> {
        match self
            .executor
            .execute(Command::SpanningTree { start, config })?
        {
            Output::Paths(rows) => Ok(rows),
            _ => Err(unexpected("SpanningTree")),
        }
    }
}
