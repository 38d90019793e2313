//! Relationship filter grammar.
//!
//! A `|`-separated list of entries, each one of:
//!
//! - `TYPE`: that type, either direction
//! - `TYPE>` or `>TYPE`: that type, outgoing
//! - `TYPE<` or `<TYPE`: that type, incoming
//! - `>` / `<`: any type, outgoing / incoming
//!
//! An empty or absent filter follows every relationship in both directions.

use pathexpand_core::{Direction, GraphSource, NodeId, RelId, Relationship};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::fmt;

/// One entry of a relationship filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelFilterEntry {
    /// Type to follow, `None` for any type.
    pub rel_type: Option<String>,
    /// Direction to follow, relative to the node being expanded.
    pub direction: Direction,
}

impl RelFilterEntry {
    fn parse(raw: &str) -> Option<Self> {
        let mut body = raw.trim();
        if body.is_empty() {
            return None;
        }

        let mut outgoing = false;
        let mut incoming = false;
        if let Some(rest) = body.strip_prefix('<') {
            incoming = true;
            body = rest;
        } else if let Some(rest) = body.strip_prefix('>') {
            outgoing = true;
            body = rest;
        }
        if let Some(rest) = body.strip_suffix('>') {
            outgoing = true;
            body = rest;
        } else if let Some(rest) = body.strip_suffix('<') {
            incoming = true;
            body = rest;
        }

        let direction = match (outgoing, incoming) {
            (true, false) => Direction::Outgoing,
            (false, true) => Direction::Incoming,
            _ => Direction::Both,
        };
        let body = body.trim();
        let rel_type = (!body.is_empty() && body != "*").then(|| body.to_string());
        Some(RelFilterEntry {
            rel_type,
            direction,
        })
    }

    /// Whether `rel`, seen from `node`, is admitted by this entry.
    pub fn admits(&self, rel: &Relationship, node: NodeId) -> bool {
        self.admits_type(&rel.rel_type) && self.direction.admits(rel.direction_from(node))
    }

    fn admits_type(&self, rel_type: &str) -> bool {
        self.rel_type.as_deref().map_or(true, |t| t == rel_type)
    }
}

impl fmt::Display for RelFilterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.rel_type.as_deref().unwrap_or("");
        match self.direction {
            Direction::Outgoing => write!(f, "{}>", ty),
            Direction::Incoming => write!(f, "<{}", ty),
            Direction::Both => f.write_str(ty),
        }
    }
}

/// A parsed relationship filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipFilter {
    entries: SmallVec<[RelFilterEntry; 4]>,
}

impl RelationshipFilter {
    /// Follow everything.
    pub fn any() -> Self {
        Self::default()
    }

    /// Parse a filter. Empty entries are skipped.
    pub fn parse(filter: Option<&str>) -> Self {
        let entries = filter
            .map(|f| f.split('|').filter_map(RelFilterEntry::parse).collect())
            .unwrap_or_default();
        RelationshipFilter { entries }
    }

    /// Entries in filter order.
    pub fn entries(&self) -> &[RelFilterEntry] {
        &self.entries
    }

    /// True if every relationship is followed.
    pub fn is_any(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `rel`, seen from `node`, may be followed.
    pub fn admits(&self, rel: &Relationship, node: NodeId) -> bool {
        self.is_any() || self.entries.iter().any(|e| e.admits(rel, node))
    }

    /// Whether some entry names `rel_type` (or any type), ignoring direction.
    pub fn admits_type(&self, rel_type: &str) -> bool {
        self.is_any() || self.entries.iter().any(|e| e.admits_type(rel_type))
    }

    /// Relationships of `node` admitted by this filter, each reported once.
    ///
    /// Entries are enumerated in filter order; within an entry the source's
    /// order is kept.
    pub fn expand<'g, G>(&self, graph: &'g G, node: NodeId) -> Vec<&'g Relationship>
    where
        G: GraphSource + ?Sized,
    {
        let mut seen: FxHashSet<RelId> = FxHashSet::default();
        let mut out = Vec::new();
        if self.is_any() {
            for rel in graph.relationships(node, Direction::Both, None) {
                if seen.insert(rel.id) {
                    out.push(rel);
                }
            }
            return out;
        }
        for entry in &self.entries {
            for rel in graph.relationships(node, entry.direction, entry.rel_type.as_deref()) {
                if seen.insert(rel.id) {
                    out.push(rel);
                }
            }
        }
        out
    }
}

impl fmt::Display for RelationshipFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
