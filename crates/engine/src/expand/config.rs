//! Resolved traversal configuration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::label_filter::LabelFilter;
use super::node_filter::NodeFilterSet;
use super::rel_filter::RelationshipFilter;
use super::uniqueness::{Uniqueness, DEFAULT_RECENT_WINDOW};

/// Shared flag that stops a running traversal at its next node visit.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// A token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything a traversal needs, with filters already parsed and node
/// references resolved.
///
/// Builder methods share their field's name:
///
/// ```
/// use pathexpand_engine::expand::{TraversalConfig, Uniqueness};
///
/// let config = TraversalConfig::new()
///     .relationship_filter("ACTED_IN>")
///     .label_filter("+Movie")
///     .max_level(2)
///     .uniqueness(Uniqueness::NodePath);
/// assert_eq!(config.max_level, Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Which relationships may be followed.
    pub relationship_filter: RelationshipFilter,
    /// Label-based inclusion and expansion rules.
    pub label_filter: LabelFilter,
    /// Identity-based inclusion and expansion rules.
    pub node_filter: NodeFilterSet,
    /// Results shorter than this (in relationships) are not emitted.
    pub min_level: usize,
    /// Branches are not extended past this depth. `None` is unbounded.
    pub max_level: Option<usize>,
    /// Repetition policy.
    pub uniqueness: Uniqueness,
    /// Trailing steps checked by the `*_RECENT` policies.
    pub recent_window: usize,
    /// Maximum number of results. `None` is unbounded.
    pub limit: Option<usize>,
    /// Emit a single empty row instead of nothing.
    pub optional: bool,
    /// Whether the start node is subject to the filters.
    pub filter_start_node: bool,
    /// Follow at most this many relationships per expanded node.
    pub sample: Option<usize>,
    /// Breadth-first when true, depth-first otherwise.
    pub bfs: bool,
    /// Cooperative cancellation.
    pub cancellation: CancellationToken,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            relationship_filter: RelationshipFilter::any(),
            label_filter: LabelFilter::none(),
            node_filter: NodeFilterSet::default(),
            min_level: 0,
            max_level: None,
            uniqueness: Uniqueness::NodeGlobal,
            recent_window: DEFAULT_RECENT_WINDOW,
            limit: None,
            optional: false,
            filter_start_node: false,
            sample: None,
            bfs: true,
            cancellation: CancellationToken::new(),
        }
    }
}

impl TraversalConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and set the relationship filter.
    #[must_use]
    pub fn relationship_filter(mut self, filter: &str) -> Self {
        self.relationship_filter = RelationshipFilter::parse(Some(filter));
        self
    }

    /// Parse and set the label filter.
    #[must_use]
    pub fn label_filter(mut self, filter: &str) -> Self {
        self.label_filter = LabelFilter::parse(Some(filter));
        self
    }

    /// Set resolved node filters.
    #[must_use]
    pub fn node_filter(mut self, filter: NodeFilterSet) -> Self {
        self.node_filter = filter;
        self
    }

    /// Set the minimum result depth.
    #[must_use]
    pub fn min_level(mut self, level: usize) -> Self {
        self.min_level = level;
        self
    }

    /// Bound the traversal depth.
    #[must_use]
    pub fn max_level(mut self, level: usize) -> Self {
        self.max_level = Some(level);
        self
    }

    /// Set the uniqueness policy.
    #[must_use]
    pub fn uniqueness(mut self, uniqueness: Uniqueness) -> Self {
        self.uniqueness = uniqueness;
        self
    }

    /// Set the lookback of the `*_RECENT` policies.
    #[must_use]
    pub fn recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    /// Cap the number of results.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Emit a single empty row when nothing matches.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// Apply filters to the start node too.
    #[must_use]
    pub fn filter_start_node(mut self, filter: bool) -> Self {
        self.filter_start_node = filter;
        self
    }

    /// Follow at most `n` relationships per expanded node.
    #[must_use]
    pub fn sample(mut self, n: usize) -> Self {
        self.sample = Some(n);
        self
    }

    /// Choose breadth-first (true) or depth-first (false) order.
    #[must_use]
    pub fn bfs(mut self, bfs: bool) -> Self {
        self.bfs = bfs;
        self
    }

    /// Attach a cancellation token.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Whether only end-node or terminator matches are results.
    pub fn end_node_mode(&self) -> bool {
        self.label_filter.has_end_rules() || self.node_filter.has_end_nodes()
    }

    /// Whether any allowlist (label or node) was given.
    pub fn has_allowlist(&self) -> bool {
        self.label_filter.has_allowlist() || self.node_filter.has_allowlist()
    }

    /// Whether `depth` may still be expanded.
    pub fn expands_at(&self, depth: usize) -> bool {
        self.max_level.map_or(true, |max| depth < max)
    }
}
