//! Breadth- and depth-first path expansion.
//!
//! Branches live in an arena of parent pointers; a [`Path`] is only built
//! when a branch is emitted. The frontier holds arena indices and is used as
//! a FIFO queue for breadth-first order and as a LIFO stack otherwise.

use std::collections::VecDeque;

use pathexpand_core::{ExpandError, ExpandResult, GraphSource, NodeId, Path, RelId};
use serde::Serialize;
use tracing::{debug, trace};

use super::config::TraversalConfig;
use super::evaluator::{Evaluation, Evaluator};
use super::uniqueness::{Step, UniquenessTracker};

/// Counters collected during one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Branches taken off the frontier and evaluated.
    pub visited: usize,
    /// Paths emitted.
    pub emitted: usize,
    /// Branches pruned by a filter.
    pub pruned: usize,
    /// Deepest depth visited.
    pub max_depth_reached: usize,
    /// Whether `limit` stopped the traversal with work left.
    pub truncated: bool,
}

/// Emitted paths in emission order, with counters.
#[derive(Debug, Clone, Default)]
pub struct TraversalOutput {
    /// Result paths.
    pub paths: Vec<Path>,
    /// Counters.
    pub stats: TraversalStats,
}

#[derive(Debug, Clone, Copy)]
struct Branch {
    node: NodeId,
    rel: Option<RelId>,
    parent: Option<usize>,
    depth: usize,
}

#[derive(Debug, Default)]
struct BranchArena {
    branches: Vec<Branch>,
}

impl BranchArena {
    fn push(&mut self, branch: Branch) -> usize {
        self.branches.push(branch);
        self.branches.len() - 1
    }

    fn get(&self, idx: usize) -> Branch {
        self.branches[idx]
    }

    /// Steps from `idx` back to its root.
    fn lineage(&self, idx: usize) -> Lineage<'_> {
        Lineage {
            arena: self,
            next: Some(idx),
        }
    }

    fn path(&self, idx: usize) -> Path {
        let mut hops = Vec::with_capacity(self.branches[idx].depth);
        let mut cursor = self.branches[idx];
        while let (Some(parent), Some(rel)) = (cursor.parent, cursor.rel) {
            hops.push((rel, cursor.node));
            cursor = self.branches[parent];
        }
        let mut path = Path::single(cursor.node);
        for (rel, node) in hops.into_iter().rev() {
            path.push(rel, node);
        }
        path
    }
}

struct Lineage<'a> {
    arena: &'a BranchArena,
    next: Option<usize>,
}

impl Iterator for Lineage<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let branch = self.arena.branches[self.next?];
        self.next = branch.parent;
        Some((branch.node, branch.rel))
    }
}

/// Expand paths from `starts` under `config`.
///
/// Start nodes must exist in `graph`. Results are produced in visit order,
/// which is stable for an unmodified graph.
pub fn traverse<G>(
    graph: &G,
    starts: &[NodeId],
    config: &TraversalConfig,
) -> ExpandResult<TraversalOutput>
where
    G: GraphSource + ?Sized,
{
    if config.sample == Some(0) {
        return Err(ExpandError::invalid_input("sample must be a positive integer"));
    }
    if let Some(missing) = starts.iter().find(|id| graph.node(**id).is_none()) {
        return Err(ExpandError::NodeNotFound {
            node: missing.to_string(),
        });
    }

    debug!(
        starts = starts.len(),
        uniqueness = %config.uniqueness,
        relationship_filter = %config.relationship_filter,
        min_level = config.min_level,
        max_level = ?config.max_level,
        bfs = config.bfs,
        "Starting path expansion"
    );

    let mut run = Expansion::new(graph, config);
    run.seed(starts);
    run.run()?;

    let stats = run.stats;
    debug!(
        visited = stats.visited,
        emitted = stats.emitted,
        pruned = stats.pruned,
        max_depth_reached = stats.max_depth_reached,
        truncated = stats.truncated,
        "Path expansion finished"
    );
    Ok(TraversalOutput {
        paths: run.paths,
        stats,
    })
}

struct Expansion<'a, G: ?Sized> {
    graph: &'a G,
    config: &'a TraversalConfig,
    evaluator: Evaluator<'a>,
    tracker: UniquenessTracker,
    arena: BranchArena,
    frontier: VecDeque<usize>,
    paths: Vec<Path>,
    stats: TraversalStats,
}

impl<'a, G> Expansion<'a, G>
where
    G: GraphSource + ?Sized,
{
    fn new(graph: &'a G, config: &'a TraversalConfig) -> Self {
        Self {
            graph,
            config,
            evaluator: Evaluator::new(config),
            tracker: UniquenessTracker::new(config.uniqueness, config.recent_window),
            arena: BranchArena::default(),
            frontier: VecDeque::new(),
            paths: Vec::new(),
            stats: TraversalStats::default(),
        }
    }

    fn seed(&mut self, starts: &[NodeId]) {
        let roots: Vec<usize> = starts
            .iter()
            .map(|&start| {
                self.arena.push(Branch {
                    node: start,
                    rel: None,
                    parent: None,
                    depth: 0,
                })
            })
            .collect();
        self.schedule(roots);
    }

    /// Uniqueness is checked when a branch is taken off the frontier, so a
    /// depth-first run claims nodes in the order it actually reaches them.
    fn admit(&mut self, branch: Branch) -> bool {
        match (branch.parent, branch.rel) {
            (Some(parent), Some(rel)) => {
                self.tracker
                    .admit(self.arena.lineage(parent), rel, branch.node, branch.depth)
            }
            _ => self.tracker.admit_root(branch.node),
        }
    }

    /// Add sibling branches so they are taken off the frontier in order.
    fn schedule(&mut self, branches: Vec<usize>) {
        if self.config.bfs {
            self.frontier.extend(branches);
        } else {
            self.frontier.extend(branches.into_iter().rev());
        }
    }

    fn next_branch(&mut self) -> Option<usize> {
        if self.config.bfs {
            self.frontier.pop_front()
        } else {
            self.frontier.pop_back()
        }
    }

    fn limit_reached(&self) -> bool {
        self.config
            .limit
            .map_or(false, |limit| self.stats.emitted >= limit)
    }

    fn run(&mut self) -> ExpandResult<()> {
        while let Some(idx) = self.next_branch() {
            if self.config.cancellation.is_cancelled() {
                debug!(visited = self.stats.visited, "Path expansion cancelled");
                return Err(ExpandError::Cancelled {
                    visited: self.stats.visited,
                });
            }
            if self.limit_reached() {
                self.stats.truncated = true;
                break;
            }

            let branch = self.arena.get(idx);
            if !self.admit(branch) {
                continue;
            }
            self.stats.visited += 1;
            self.stats.max_depth_reached = self.stats.max_depth_reached.max(branch.depth);

            let labels = self.graph.labels(branch.node);
            let evaluation = self.evaluator.evaluate(branch.node, labels, branch.depth);
            trace!(node = %branch.node, depth = branch.depth, ?evaluation, "Visited node");

            if evaluation == Evaluation::Prune {
                self.stats.pruned += 1;
                continue;
            }
            if evaluation.includes() {
                self.paths.push(self.arena.path(idx));
                self.stats.emitted += 1;
                if self.limit_reached() {
                    self.stats.truncated = !self.frontier.is_empty();
                    break;
                }
            }
            if evaluation.expands() && self.config.expands_at(branch.depth) {
                self.expand(idx, branch);
            }
        }
        Ok(())
    }

    fn expand(&mut self, idx: usize, branch: Branch) {
        let rels = self
            .config
            .relationship_filter
            .expand(self.graph, branch.node);
        let take = self.config.sample.unwrap_or(usize::MAX);

        let children: Vec<usize> = rels
            .into_iter()
            .take(take)
            .map(|rel| {
                self.arena.push(Branch {
                    node: rel.other_node(branch.node),
                    rel: Some(rel.id),
                    parent: Some(idx),
                    depth: branch.depth + 1,
                })
            })
            .collect();
        self.schedule(children);
    }
}
