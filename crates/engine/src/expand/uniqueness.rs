//! Uniqueness policies.
//!
//! A policy decides whether a candidate step (relationship plus the node it
//! reaches) may extend a branch. Nodes or relationships are tracked per
//! traversal (`*_GLOBAL`), per branch (`*_PATH`), within the last few steps
//! of a branch (`*_RECENT`), or per depth (`*_LEVEL`).

use pathexpand_core::{ExpandError, NodeId, RelId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::str::FromStr;

/// Default number of trailing steps checked by the `*_RECENT` policies.
pub const DEFAULT_RECENT_WINDOW: usize = 16;

/// Which repetition a traversal forbids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Uniqueness {
    /// A node is visited at most once per traversal.
    #[default]
    NodeGlobal,
    /// A node appears at most once per path.
    NodePath,
    /// A node does not repeat within the recent part of a path.
    NodeRecent,
    /// A node appears at most once per depth.
    NodeLevel,
    /// A relationship is traversed at most once per traversal.
    RelationshipGlobal,
    /// A relationship appears at most once per path.
    RelationshipPath,
    /// A relationship does not repeat within the recent part of a path.
    RelationshipRecent,
    /// A relationship appears at most once per depth.
    RelationshipLevel,
    /// No restriction.
    None,
}

impl Uniqueness {
    /// Every policy, in the order of their documented names.
    pub const ALL: [Uniqueness; 9] = [
        Uniqueness::NodeGlobal,
        Uniqueness::NodePath,
        Uniqueness::NodeRecent,
        Uniqueness::NodeLevel,
        Uniqueness::RelationshipGlobal,
        Uniqueness::RelationshipPath,
        Uniqueness::RelationshipRecent,
        Uniqueness::RelationshipLevel,
        Uniqueness::None,
    ];

    /// The policy's canonical name.
    pub fn as_str(self) -> &'static str {
        match self {
            Uniqueness::NodeGlobal => "NODE_GLOBAL",
            Uniqueness::NodePath => "NODE_PATH",
            Uniqueness::NodeRecent => "NODE_RECENT",
            Uniqueness::NodeLevel => "NODE_LEVEL",
            Uniqueness::RelationshipGlobal => "RELATIONSHIP_GLOBAL",
            Uniqueness::RelationshipPath => "RELATIONSHIP_PATH",
            Uniqueness::RelationshipRecent => "RELATIONSHIP_RECENT",
            Uniqueness::RelationshipLevel => "RELATIONSHIP_LEVEL",
            Uniqueness::None => "NONE",
        }
    }
}

impl fmt::Display for Uniqueness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uniqueness {
    type Err = ExpandError;

    /// Names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Uniqueness::ALL
            .into_iter()
            .find(|u| u.as_str() == upper)
            .ok_or_else(|| ExpandError::InvalidUniqueness {
                value: s.to_string(),
            })
    }
}

/// One step of a branch as seen by the tracker: the node reached and the
/// relationship that reached it (`None` for the branch root).
pub type Step = (NodeId, Option<RelId>);

/// Per-traversal bookkeeping for a [`Uniqueness`] policy.
#[derive(Debug)]
pub struct UniquenessTracker {
    policy: Uniqueness,
    recent_window: usize,
    nodes: FxHashSet<NodeId>,
    relationships: FxHashSet<RelId>,
    node_levels: FxHashMap<usize, FxHashSet<NodeId>>,
    relationship_levels: FxHashMap<usize, FxHashSet<RelId>>,
}

impl UniquenessTracker {
    /// A fresh tracker. A zero window is treated as one step.
    pub fn new(policy: Uniqueness, recent_window: usize) -> Self {
        Self {
            policy,
            recent_window: recent_window.max(1),
            nodes: FxHashSet::default(),
            relationships: FxHashSet::default(),
            node_levels: FxHashMap::default(),
            relationship_levels: FxHashMap::default(),
        }
    }

    /// Admit a start node. Only node-tracking policies can reject a root,
    /// and only when the same start node is given twice.
    pub fn admit_root(&mut self, node: NodeId) -> bool {
        match self.policy {
            Uniqueness::NodeGlobal => self.nodes.insert(node),
            Uniqueness::NodeLevel => self.node_levels.entry(0).or_default().insert(node),
            _ => true,
        }
    }

    /// Decide whether `rel` leading to `node` at `depth` may extend the
    /// branch whose steps are yielded by `lineage`, most recent first.
    pub fn admit<I>(&mut self, lineage: I, rel: RelId, node: NodeId, depth: usize) -> bool
    where
        I: IntoIterator<Item = Step>,
    {
        match self.policy {
            Uniqueness::None => true,
            Uniqueness::NodeGlobal => self.nodes.insert(node),
            Uniqueness::RelationshipGlobal => self.relationships.insert(rel),
            Uniqueness::NodeLevel => self.node_levels.entry(depth).or_default().insert(node),
            Uniqueness::RelationshipLevel => self
                .relationship_levels
                .entry(depth)
                .or_default()
                .insert(rel),
            Uniqueness::NodePath => !lineage.into_iter().any(|(n, _)| n == node),
            Uniqueness::RelationshipPath => !lineage.into_iter().any(|(_, r)| r == Some(rel)),
            Uniqueness::NodeRecent => !lineage
                .into_iter()
                .take(self.recent_window)
                .any(|(n, _)| n == node),
            Uniqueness::RelationshipRecent => !lineage
                .into_iter()
                .take(self.recent_window)
                .any(|(_, r)| r == Some(rel)),
        }
    }
}
