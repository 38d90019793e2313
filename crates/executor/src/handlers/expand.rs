//! Path expansion command handlers.

use pathexpand_core::GraphSource;
use pathexpand_engine::expand::{
    self as engine, CancellationToken, Procedure, TraversalConfig, Uniqueness,
};
use pathexpand_engine::{LabelFilter, RelationshipFilter};
use serde_json::Value;

use super::config::{start_nodes, ExpandOptions};
use crate::convert::convert_result;
use crate::{Error, Output, Result};

fn options_config<G>(
    graph: &G,
    options: &Value,
    procedure: Procedure,
    cancellation: &CancellationToken,
) -> Result<TraversalConfig>
where
    G: GraphSource + ?Sized,
{
    let config = ExpandOptions::from_value(options)?.into_config(graph, procedure)?;
    Ok(config.cancellation(cancellation.clone()))
}

/// Handle Expand: positional arguments, `RELATIONSHIP_PATH` uniqueness.
pub fn expand<G>(
    graph: &G,
    start: &Value,
    relationship_filter: Option<&str>,
    label_filter: Option<&str>,
    min_level: i64,
    max_level: i64,
    cancellation: &CancellationToken,
) -> Result<Output>
where
    G: GraphSource + ?Sized,
{
    let min_level = usize::try_from(min_level).map_err(|_| Error::InvalidInput {
        reason: format!("minLevel must not be negative, got {}", min_level),
    })?;
    let config = TraversalConfig {
        relationship_filter: RelationshipFilter::parse(relationship_filter),
        label_filter: LabelFilter::parse(label_filter),
        min_level,
        max_level: usize::try_from(max_level).ok(),
        uniqueness: Uniqueness::RelationshipPath,
        cancellation: cancellation.clone(),
        ..TraversalConfig::default()
    };
    let starts = start_nodes(graph, start)?;
    let paths = convert_result(engine::expand_paths(graph, &starts, &config))?;
    Ok(Output::Paths(paths))
}

/// Handle ExpandConfig.
pub fn expand_config<G>(
    graph: &G,
    start: &Value,
    options: &Value,
    cancellation: &CancellationToken,
) -> Result<Output>
where
    G: GraphSource + ?Sized,
{
    let config = options_config(graph, options, Procedure::ExpandConfig, cancellation)?;
    let starts = start_nodes(graph, start)?;
    let paths = convert_result(engine::expand_paths(graph, &starts, &config))?;
    Ok(Output::Paths(paths))
}

/// Handle SubgraphNodes.
pub fn subgraph_nodes<G>(
    graph: &G,
    start: &Value,
    options: &Value,
    cancellation: &CancellationToken,
) -> Result<Output>
where
    G: GraphSource + ?Sized,
{
    let config = options_config(graph, options, Procedure::SubgraphNodes, cancellation)?;
    let starts = start_nodes(graph, start)?;
    let nodes = convert_result(engine::subgraph_nodes(graph, &starts, &config))?;
    Ok(Output::Nodes(nodes))
}

/// Handle SubgraphAll.
pub fn subgraph_all<G>(
    graph: &G,
    start: &Value,
    options: &Value,
    cancellation: &CancellationToken,
) -> Result<Output>
where
    G: GraphSource + ?Sized,
{
    let config = options_config(graph, options, Procedure::SubgraphAll, cancellation)?;
    let starts = start_nodes(graph, start)?;
    let subgraphs = convert_result(engine::subgraph_all(graph, &starts, &config))?;
    Ok(Output::Subgraphs(subgraphs))
}

/// Handle SpanningTree.
pub fn spanning_tree<G>(
    graph: &G,
    start: &Value,
    options: &Value,
    cancellation: &CancellationToken,
) -> Result<Output>
where
    G: GraphSource + ?Sized,
{
    let config = options_config(graph, options, Procedure::SpanningTree, cancellation)?;
    let starts = start_nodes(graph, start)?;
    let paths = convert_result(engine::spanning_tree(graph, &starts, &config))?;
    Ok(Output::Paths(paths))
}
