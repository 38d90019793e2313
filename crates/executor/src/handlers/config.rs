//! Options record parsing.
//!
//! Turns the JSON options record into a [`TraversalConfig`]. Every value is
//! validated here, so a bad record fails before any node is visited.

use pathexpand_core::{GraphSource, NodeId};
use pathexpand_engine::expand::{
    NodeFilterInput, NodeRef, Procedure, TraversalConfig, Uniqueness, DEFAULT_RECENT_WINDOW,
};
use pathexpand_engine::{LabelFilter, RelationshipFilter};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// The options record. Keys are camelCase; unknown keys are ignored and
/// `null` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpandOptions {
    /// Relationship filter text.
    pub relationship_filter: Option<String>,
    /// Label filter text.
    pub label_filter: Option<String>,
    /// Minimum result depth, default 0.
    pub min_level: Option<i64>,
    /// Maximum depth, default -1 (unbounded).
    pub max_level: Option<i64>,
    /// Uniqueness policy name, default `NODE_GLOBAL`.
    pub uniqueness: Option<String>,
    /// Result cap, default -1 (unbounded).
    pub limit: Option<i64>,
    /// Emit one empty row instead of nothing.
    pub optional: Option<bool>,
    /// Apply filters to the start node too.
    pub filter_start_node: Option<bool>,
    /// Relationships followed per expanded node.
    pub sample: Option<i64>,
    /// Breadth-first (default) or depth-first.
    pub bfs: Option<bool>,
    /// Lookback of the `*_RECENT` policies.
    pub recent_window: Option<i64>,
    /// Node allowlist.
    pub allowlist_nodes: Option<Value>,
    /// Legacy spelling of `allowlistNodes`.
    pub whitelist_nodes: Option<Value>,
    /// Node denylist.
    pub denylist_nodes: Option<Value>,
    /// Legacy spelling of `denylistNodes`.
    pub blacklist_nodes: Option<Value>,
    /// End nodes.
    pub end_nodes: Option<Value>,
    /// Terminator nodes.
    pub terminator_nodes: Option<Value>,
}

impl ExpandOptions {
    /// Decode an options record. `null` is an empty record.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(_) => {
                Self::deserialize(value).map_err(|e| Error::InvalidConfig {
                    reason: e.to_string(),
                })
            }
            other => Err(Error::InvalidConfig {
                reason: format!("Options must be a map, got {}", kind(other)),
            }),
        }
    }

    /// Validate and resolve against `graph` for `procedure`.
    pub fn into_config<G>(self, graph: &G, procedure: Procedure) -> Result<TraversalConfig>
    where
        G: GraphSource + ?Sized,
    {
        let min_level = self.min_level.unwrap_or(0);
        procedure.check_min_level(min_level)?;
        let min_level = usize::try_from(min_level).map_err(|_| Error::InvalidInput {
            reason: format!("minLevel must not be negative, got {}", min_level),
        })?;

        let uniqueness = parse_uniqueness(self.uniqueness.as_deref(), Uniqueness::NodeGlobal)?;
        let sample = match self.sample {
            None => None,
            Some(n) if n > 0 => Some(n as usize),
            Some(n) => {
                return Err(Error::InvalidInput {
                    reason: format!("sample must be a positive integer, got {}", n),
                })
            }
        };
        let recent_window = match self.recent_window {
            None => DEFAULT_RECENT_WINDOW,
            Some(n) if n > 0 => n as usize,
            Some(n) => {
                return Err(Error::InvalidInput {
                    reason: format!("recentWindow must be a positive integer, got {}", n),
                })
            }
        };

        let node_filter = NodeFilterInput {
            allowlist: optional_refs("allowlistNodes", self.allowlist_nodes.as_ref())?,
            whitelist: optional_refs("whitelistNodes", self.whitelist_nodes.as_ref())?,
            denylist: optional_refs("denylistNodes", self.denylist_nodes.as_ref())?,
            blacklist: optional_refs("blacklistNodes", self.blacklist_nodes.as_ref())?,
            end_nodes: optional_refs("endNodes", self.end_nodes.as_ref())?,
            terminator_nodes: optional_refs("terminatorNodes", self.terminator_nodes.as_ref())?,
        }
        .resolve(graph);

        Ok(TraversalConfig {
            relationship_filter: RelationshipFilter::parse(self.relationship_filter.as_deref()),
            label_filter: LabelFilter::parse(self.label_filter.as_deref()),
            node_filter,
            min_level,
            max_level: unbounded_if_negative(self.max_level),
            uniqueness,
            recent_window,
            limit: unbounded_if_negative(self.limit),
            optional: self.optional.unwrap_or(false),
            filter_start_node: self.filter_start_node.unwrap_or(false),
            sample,
            bfs: self.bfs.unwrap_or(true),
            ..TraversalConfig::default()
        })
    }
}

/// Parse a uniqueness name, falling back to `default` when absent.
pub fn parse_uniqueness(s: Option<&str>, default: Uniqueness) -> Result<Uniqueness> {
    match s {
        None => Ok(default),
        Some(name) => Ok(name.parse::<Uniqueness>()?),
    }
}

fn unbounded_if_negative(v: Option<i64>) -> Option<usize> {
    v.and_then(|n| usize::try_from(n).ok())
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

/// Normalize a node reference value: a number, an element-id string, a map
/// with `id` or `elementId`, or a list of those. `null` is an empty list.
pub fn node_refs(key: &str, value: &Value) -> Result<Vec<NodeRef>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(|item| node_ref(key, item)).collect(),
        single => Ok(vec![node_ref(key, single)?]),
    }
}

fn optional_refs(key: &str, value: Option<&Value>) -> Result<Option<Vec<NodeRef>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => node_refs(key, v).map(Some),
    }
}

fn node_ref(key: &str, value: &Value) -> Result<NodeRef> {
    match value {
        Value::Number(n) => n.as_i64().map(NodeRef::Id).ok_or_else(|| Error::InvalidInput {
            reason: format!("{}: node id must be an integer, got {}", key, n),
        }),
        Value::String(s) => Ok(NodeRef::ElementId(s.clone())),
        Value::Object(map) => {
            if let Some(id) = map.get("id").and_then(Value::as_i64) {
                Ok(NodeRef::Id(id))
            } else if let Some(eid) = map.get("elementId").and_then(Value::as_str) {
                Ok(NodeRef::ElementId(eid.to_string()))
            } else {
                Err(Error::InvalidInput {
                    reason: format!("{}: node map needs an 'id' or 'elementId'", key),
                })
            }
        }
        other => Err(Error::InvalidInput {
            reason: format!("{}: expected a node reference, got {}", key, kind(other)),
        }),
    }
}

/// Resolve the start node argument. Every reference must resolve.
pub fn start_nodes<G>(graph: &G, start: &Value) -> Result<Vec<NodeId>>
where
    G: GraphSource + ?Sized,
{
    node_refs("start", start)?
        .into_iter()
        .map(|r| {
            r.resolve(graph).ok_or_else(|| Error::NodeNotFound {
                node: r.to_string(),
            })
        })
        .collect()
}
