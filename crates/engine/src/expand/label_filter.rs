//! Label filter grammar.
//!
//! A label filter is a `|`-separated list of clauses. Each clause carries an
//! optional rule prefix followed by a compound label:
//!
//! | Prefix | Rule | Effect |
//! |--------|------|--------|
//! | `-` | deny | node and its subtree are pruned |
//! | `/` | terminate | node is a result, its children are not expanded |
//! | `>` | end node | node is a result, its children are still expanded |
//! | `+` or none | allow | only matching nodes are included and expanded |
//!
//! A compound label `:A:B` (leading colon optional) requires every listed
//! label. Within a label name `\:` and `\|` are literal characters. Any
//! other backslash sequence is kept verbatim; the grammar never fails.
//!
//! A bare `*` clause allows every node.

use smallvec::SmallVec;
use std::convert::Infallible;
use std::str::FromStr;

/// The four rule kinds, in evaluation precedence order (highest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelRule {
    /// `-Label`
    Deny,
    /// `/Label`
    Terminate,
    /// `>Label`
    End,
    /// `+Label` or `Label`
    Allow,
}

impl LabelRule {
    /// Rules ordered from highest to lowest precedence.
    pub const PRECEDENCE: [LabelRule; 4] = [
        LabelRule::Deny,
        LabelRule::Terminate,
        LabelRule::End,
        LabelRule::Allow,
    ];

    fn from_prefix(c: char) -> Option<Self> {
        match c {
            '-' => Some(LabelRule::Deny),
            '/' => Some(LabelRule::Terminate),
            '>' => Some(LabelRule::End),
            '+' => Some(LabelRule::Allow),
            _ => None,
        }
    }
}

/// A conjunction of labels: a node matches if it carries all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundLabel(SmallVec<[String; 2]>);

impl CompoundLabel {
    /// The labels that must all be present.
    pub fn labels(&self) -> &[String] {
        &self.0
    }

    /// Whether `node_labels` contains every label of this compound.
    pub fn matches(&self, node_labels: &[String]) -> bool {
        self.0.iter().all(|l| node_labels.contains(l))
    }
}

/// A disjunction of compound labels for one rule kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelAlternatives(Vec<CompoundLabel>);

impl LabelAlternatives {
    /// True if no clause of this kind was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The compound labels, in filter order.
    pub fn alternatives(&self) -> &[CompoundLabel] {
        &self.0
    }

    /// Whether any alternative matches.
    pub fn matches(&self, node_labels: &[String]) -> bool {
        self.0.iter().any(|c| c.matches(node_labels))
    }
}

/// A parsed label filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    deny: LabelAlternatives,
    terminate: LabelAlternatives,
    end: LabelAlternatives,
    allow: LabelAlternatives,
    allow_all: bool,
}

impl LabelFilter {
    /// A filter that lets every node through.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a filter; `None` and the empty string mean no filtering.
    pub fn parse(filter: Option<&str>) -> Self {
        let mut parsed = LabelFilter::default();
        let Some(filter) = filter else {
            return parsed;
        };

        for clause in split_unescaped(filter, '|') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            if clause == "*" {
                parsed.allow_all = true;
                continue;
            }

            let mut chars = clause.chars();
            let (rule, body) = match chars.next().and_then(LabelRule::from_prefix) {
                Some(rule) => (rule, chars.as_str()),
                None => (LabelRule::Allow, clause),
            };

            let labels: SmallVec<[String; 2]> = split_unescaped(body, ':')
                .into_iter()
                .map(|l| unescape(l.trim()))
                .filter(|l| !l.is_empty())
                .collect();
            if labels.is_empty() {
                continue;
            }

            parsed.rule_mut(rule).0.push(CompoundLabel(labels));
        }

        if parsed.allow_all {
            parsed.allow = LabelAlternatives::default();
        }
        parsed
    }

    /// Clauses of the given rule kind.
    pub fn rule(&self, rule: LabelRule) -> &LabelAlternatives {
        match rule {
            LabelRule::Deny => &self.deny,
            LabelRule::Terminate => &self.terminate,
            LabelRule::End => &self.end,
            LabelRule::Allow => &self.allow,
        }
    }

    fn rule_mut(&mut self, rule: LabelRule) -> &mut LabelAlternatives {
        match rule {
            LabelRule::Deny => &mut self.deny,
            LabelRule::Terminate => &mut self.terminate,
            LabelRule::End => &mut self.end,
            LabelRule::Allow => &mut self.allow,
        }
    }

    /// Whether a node with these labels matches a clause of `rule`.
    pub fn matches(&self, rule: LabelRule, node_labels: &[String]) -> bool {
        self.rule(rule).matches(node_labels)
    }

    /// Whether an allowlist restricts the traversal.
    pub fn has_allowlist(&self) -> bool {
        !self.allow.is_empty()
    }

    /// Whether termination or end-node clauses are present, in which case
    /// only matching nodes (or explicitly allowlisted ones) are results.
    pub fn has_end_rules(&self) -> bool {
        !self.terminate.is_empty() || !self.end.is_empty()
    }

    /// True when the filter places no constraint at all.
    pub fn is_empty(&self) -> bool {
        LabelRule::PRECEDENCE.iter().all(|r| self.rule(*r).is_empty())
    }
}

impl FromStr for LabelFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LabelFilter::parse(Some(s)))
    }
}

/// Split on `sep` wherever it is not preceded by a backslash. Escapes are
/// left in place for [`unescape`].
fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Resolve `\:` and `\|`; every other backslash is literal.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == ':' || next == '|' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
