//! Result shapes for the public entry points.
//!
//! Every entry point runs the same traversal and differs only in what it
//! returns. The subgraph family (`subgraphNodes`, `subgraphAll`,
//! `spanningTree`) always runs breadth-first under `NODE_GLOBAL`, so each
//! reachable node is reported once through a shortest path.
//!
//! Rows are `Option`s: with `optional` set an empty result becomes a single
//! `None` row.

use std::borrow::Cow;

use pathexpand_core::{
    Direction, ExpandError, ExpandResult, GraphSource, NodeId, Path, RelId,
};
use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use super::config::TraversalConfig;
use super::traversal::traverse;
use super::uniqueness::Uniqueness;

/// The public entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    /// Positional path expansion.
    Expand,
    /// Path expansion from an options record.
    ExpandConfig,
    /// Distinct reachable nodes.
    SubgraphNodes,
    /// Reachable nodes and the relationships between them.
    SubgraphAll,
    /// One shortest path to each reachable node.
    SpanningTree,
}

impl Procedure {
    /// Name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Procedure::Expand => "expand",
            Procedure::ExpandConfig => "expandConfig",
            Procedure::SubgraphNodes => "subgraphNodes",
            Procedure::SubgraphAll => "subgraphAll",
            Procedure::SpanningTree => "spanningTree",
        }
    }

    /// Whether this entry point belongs to the subgraph family.
    pub fn is_subgraph(self) -> bool {
        matches!(
            self,
            Procedure::SubgraphNodes | Procedure::SubgraphAll | Procedure::SpanningTree
        )
    }

    /// Reject a `min_level` this entry point cannot honour.
    ///
    /// Takes the raw caller value so negative levels are reported as given.
    pub fn check_min_level(self, min_level: i64) -> ExpandResult<()> {
        if self.is_subgraph() && !(0..=1).contains(&min_level) {
            return Err(ExpandError::InvalidMinLevel {
                procedure: self.name(),
                value: min_level,
            });
        }
        Ok(())
    }
}

/// A set of nodes with the relationships connecting them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    /// Nodes in discovery order.
    pub nodes: Vec<NodeId>,
    /// Relationships with both endpoints in `nodes`.
    pub relationships: Vec<RelId>,
}

fn rows<T>(items: Vec<T>, optional: bool) -> Vec<Option<T>> {
    if items.is_empty() && optional {
        return vec![None];
    }
    items.into_iter().map(Some).collect()
}

/// Force the settings every subgraph-family call runs with.
fn subgraph_config(
    procedure: Procedure,
    config: &TraversalConfig,
) -> ExpandResult<Cow<'_, TraversalConfig>> {
    let min_level = i64::try_from(config.min_level).unwrap_or(i64::MAX);
    procedure.check_min_level(min_level)?;
    if config.uniqueness == Uniqueness::NodeGlobal && config.bfs {
        return Ok(Cow::Borrowed(config));
    }
    debug!(
        procedure = procedure.name(),
        requested = %config.uniqueness,
        bfs = config.bfs,
        "Overriding traversal order and uniqueness"
    );
    let mut forced = config.clone();
    forced.uniqueness = Uniqueness::NodeGlobal;
    forced.bfs = true;
    Ok(Cow::Owned(forced))
}

/// Every emitted path.
pub fn expand_paths<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<Vec<Option<Path>>>
where
    G: GraphSource + ?Sized,
{
    let out = traverse(graph, starts, config)?;
    Ok(rows(out.paths, config.optional))
}

/// Distinct nodes reached, in discovery order.
pub fn subgraph_nodes<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<Vec<Option<NodeId>>>
where
    G: GraphSource + ?Sized,
{
    let config = subgraph_config(Procedure::SubgraphNodes, config)?;
    let nodes = reached_nodes(graph, starts, &config)?;
    Ok(rows(nodes, config.optional))
}

/// Reached nodes plus every relationship between two of them whose type the
/// relationship filter names. Direction is not considered for the cover.
pub fn subgraph_all<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<Vec<Option<Subgraph>>>
where
    G: GraphSource + ?Sized,
{
    let config = subgraph_config(Procedure::SubgraphAll, config)?;
    let nodes = reached_nodes(graph, starts, &config)?;
    if nodes.is_empty() {
        return Ok(rows(Vec::new(), config.optional));
    }

    let members: FxHashSet<NodeId> = nodes.iter().copied().collect();
    let mut relationships = Vec::new();
    for &node in &nodes {
        for rel in graph.relationships(node, Direction::Outgoing, None) {
            if members.contains(&rel.end) && config.relationship_filter.admits_type(&rel.rel_type)
            {
                relationships.push(rel.id);
            }
        }
    }
    Ok(vec![Some(Subgraph {
        nodes,
        relationships,
    })])
}

/// One path per reached node; together they form a tree rooted at the
/// start nodes.
pub fn spanning_tree<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<Vec<Option<Path>>>
where
    G: GraphSource + ?Sized,
{
    let config = subgraph_config(Procedure::SpanningTree, config)?;
    let out = traverse(graph, starts, &config)?;
    Ok(rows(out.paths, config.optional))
}

fn reached_nodes<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<Vec<NodeId>>
where
    G: GraphSource + ?Sized,
{
    let out = traverse(graph, starts, config)?;
    let mut seen = FxHashSet::default();
    Ok(out
        .paths
        .iter()
        .map(Path::end_node)
        .filter(|n| seen.insert(*n))
        .collect())
}
