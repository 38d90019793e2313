//! Node evaluation.
//!
//! Every visited node is passed through an ordered list of stages. The first
//! stage with an opinion decides; later stages are not consulted.
//!
//! 1. start node (when `filter_start_node` is off)
//! 2. denylist
//! 3. depth below `min_level`
//! 4. terminator
//! 5. end node
//! 6. allowlist

use pathexpand_core::NodeId;

use super::config::TraversalConfig;
use super::label_filter::LabelRule;

/// What to do with a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evaluation {
    /// Neither emit nor expand.
    Prune,
    /// Emit, do not expand.
    Terminate,
    /// Emit and expand.
    IncludeAndExpand,
    /// Expand without emitting.
    ExcludeAndExpand,
    /// No opinion; defer to the next stage.
    Continue,
}

impl Evaluation {
    /// Whether the node's path is a result.
    pub fn includes(self) -> bool {
        matches!(self, Evaluation::Terminate | Evaluation::IncludeAndExpand)
    }

    /// Whether the node's children are expanded.
    pub fn expands(self) -> bool {
        matches!(
            self,
            Evaluation::IncludeAndExpand | Evaluation::ExcludeAndExpand
        )
    }
}

/// Evaluation stages in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Unfiltered start node.
    StartNode,
    /// Label or node denylist.
    Denylist,
    /// Depth below `min_level`.
    BelowMinLevel,
    /// Label or node terminator.
    Terminator,
    /// Label or node end node.
    EndNode,
    /// Label and node allowlists.
    Allowlist,
}

impl Stage {
    /// Stages from highest to lowest precedence.
    pub const ORDER: [Stage; 6] = [
        Stage::StartNode,
        Stage::Denylist,
        Stage::BelowMinLevel,
        Stage::Terminator,
        Stage::EndNode,
        Stage::Allowlist,
    ];
}

/// Applies a [`TraversalConfig`]'s filters to visited nodes.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    config: &'a TraversalConfig,
    end_node_mode: bool,
    has_allowlist: bool,
}

impl<'a> Evaluator<'a> {
    /// Build an evaluator for `config`.
    pub fn new(config: &'a TraversalConfig) -> Self {
        Self {
            config,
            end_node_mode: config.end_node_mode(),
            has_allowlist: config.has_allowlist(),
        }
    }

    /// Decide what to do with `node`, carrying `labels`, at `depth`.
    pub fn evaluate(&self, node: NodeId, labels: &[String], depth: usize) -> Evaluation {
        for stage in Stage::ORDER {
            let decision = self.stage(stage, node, labels, depth);
            if decision != Evaluation::Continue {
                return decision;
            }
        }
        // The allowlist stage always decides.
        Evaluation::Prune
    }

    /// Run a single stage.
    pub fn stage(&self, stage: Stage, node: NodeId, labels: &[String], depth: usize) -> Evaluation {
        let labels_filter = &self.config.label_filter;
        let nodes = &self.config.node_filter;
        match stage {
            Stage::StartNode => {
                if depth > 0 || self.config.filter_start_node {
                    Evaluation::Continue
                } else if self.config.min_level > 0 || self.end_node_mode {
                    Evaluation::ExcludeAndExpand
                } else {
                    Evaluation::IncludeAndExpand
                }
            }
            Stage::Denylist => {
                if labels_filter.matches(LabelRule::Deny, labels) || nodes.denies(node) {
                    Evaluation::Prune
                } else {
                    Evaluation::Continue
                }
            }
            Stage::BelowMinLevel => {
                if depth < self.config.min_level {
                    Evaluation::ExcludeAndExpand
                } else {
                    Evaluation::Continue
                }
            }
            Stage::Terminator => {
                if labels_filter.matches(LabelRule::Terminate, labels)
                    || nodes.is_terminator(node)
                {
                    Evaluation::Terminate
                } else {
                    Evaluation::Continue
                }
            }
            Stage::EndNode => {
                if labels_filter.matches(LabelRule::End, labels) || nodes.is_end_node(node) {
                    Evaluation::IncludeAndExpand
                } else {
                    Evaluation::Continue
                }
            }
            Stage::Allowlist => {
                let allowed = (!labels_filter.has_allowlist()
                    || labels_filter.matches(LabelRule::Allow, labels))
                    && nodes.allows(node);
                match (allowed, self.end_node_mode, self.has_allowlist) {
                    (false, _, _) => Evaluation::Prune,
                    // Without an end-node match a node is only a result if an
                    // explicit allowlist names it.
                    (true, true, true) => Evaluation::IncludeAndExpand,
                    (true, true, false) => Evaluation::ExcludeAndExpand,
                    (true, false, _) => Evaluation::IncludeAndExpand,
                }
            }
        }
    }
}
