//! Command dispatch.

use pathexpand_core::GraphSource;
use pathexpand_engine::expand::CancellationToken;
use tracing::debug;

use crate::convert::serde_error;
use crate::handlers::expand as handlers;
use crate::{Command, Output, Result};

/// Runs [`Command`]s against a borrowed graph.
///
/// The executor holds no state besides the graph and a cancellation token
/// shared by every command it runs.
pub struct Executor<'g, G: ?Sized> {
    graph: &'g G,
    cancellation: CancellationToken,
}

impl<'g, G> Executor<'g, G>
where
    G: GraphSource + ?Sized,
{
    /// Create an executor over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            cancellation: CancellationToken::new(),
        }
    }

    /// Use `token` to cancel running commands.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// The graph this executor reads.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Execute a command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(command = cmd.name(), "Executing command");
        let g = self.graph;
        let token = &self.cancellation;
        match cmd {
            Command::Expand {
                start,
                relationship_filter,
                label_filter,
                min_level,
                max_level,
            } => handlers::expand(
                g,
                &start,
                relationship_filter.as_deref(),
                label_filter.as_deref(),
                min_level,
                max_level,
                token,
            ),
            Command::ExpandConfig { start, config } => {
                handlers::expand_config(g, &start, &config, token)
            }
            Command::SubgraphNodes { start, config } => {
                handlers::subgraph_nodes(g, &start, &config, token)
            }
            Command::SubgraphAll { start, config } => {
                handlers::subgraph_all(g, &start, &config, token)
            }
            Command::SpanningTree { start, config } => {
                handlers::spanning_tree(g, &start, &config, token)
            }
        }
    }

    /// Decode a JSON command and execute it.
    pub fn execute_json(&self, json: &str) -> Result<Output> {
        let cmd: Command = serde_json::from_str(json).map_err(serde_error)?;
        self.execute(cmd)
    }
}
