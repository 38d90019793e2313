//! Commands accepted by the [`Executor`](crate::Executor).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use pathexpand_engine::expand::Procedure;

/// One traversal request.
///
/// `start` takes a node id, an element id, a map with `id` or `elementId`,
/// or a list of those. `config` is the options record.
///
/// Commands decode from JSON tagged by `command`:
///
/// ```
/// use pathexpand_executor::Command;
///
/// let cmd: Command = serde_json::from_str(
///     r#"{"command": "SubgraphNodes", "start": 0, "config": {"maxLevel": 2}}"#,
/// ).unwrap();
/// assert_eq!(cmd.name(), "SubgraphNodes");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum Command {
    /// Positional path expansion.
    Expand {
        /// Start node(s).
        start: Value,
        /// Relationship filter text.
        #[serde(default, rename = "relationshipFilter")]
        relationship_filter: Option<String>,
        /// Label filter text.
        #[serde(default, rename = "labelFilter")]
        label_filter: Option<String>,
        /// Minimum result depth.
        #[serde(default, rename = "minLevel")]
        min_level: i64,
        /// Maximum depth, negative for unbounded.
        #[serde(default = "unbounded", rename = "maxLevel")]
        max_level: i64,
    },
    /// Path expansion from an options record.
    ExpandConfig {
        /// Start node(s).
        start: Value,
        /// Options record.
        #[serde(default)]
        config: Value,
    },
    /// Distinct reachable nodes.
    SubgraphNodes {
        /// Start node(s).
        start: Value,
        /// Options record.
        #[serde(default)]
        config: Value,
    },
    /// Reachable nodes and the relationships among them.
    SubgraphAll {
        /// Start node(s).
        start: Value,
        /// Options record.
        #[serde(default)]
        config: Value,
    },
    /// One path per reachable node.
    SpanningTree {
        /// Start node(s).
        start: Value,
        /// Options record.
        #[serde(default)]
        config: Value,
    },
}

fn unbounded() -> i64 {
    -1
}

impl Command {
    /// The command's variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Expand { .. } => "Expand",
            Command::ExpandConfig { .. } => "ExpandConfig",
            Command::SubgraphNodes { .. } => "SubgraphNodes",
            Command::SubgraphAll { .. } => "SubgraphAll",
            Command::SpanningTree { .. } => "SpanningTree",
        }
    }

    /// The engine entry point this command runs.
    pub fn procedure(&self) -> Procedure {
        match self {
            Command::Expand { .. } => Procedure::Expand,
            Command::ExpandConfig { .. } => Procedure::ExpandConfig,
            Command::SubgraphNodes { .. } => Procedure::SubgraphNodes,
            Command::SubgraphAll { .. } => Procedure::SubgraphAll,
            Command::SpanningTree { .. } => Procedure::SpanningTree,
        }
    }
}
