//! # Flatten Module
//!
//! Projects nested token trees into ordered rows for tabular display.
//!
//! ## Key Types
//! - `ResolvedRow`: One semantic token with its reference resolved.
//! - `FlatToken`: One primitive token with its dotted path.

use crate::resolve::{lookup_reference, Resolution};
use serde::Serialize;
use token_data::{TokenGroup, TokenNode};
use tracing::debug;

/// A semantic token after reference resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRow {
    /// Dotted path, e.g. `semantic.text.link`.
    pub path: String,
    /// The raw reference, e.g. `{color.blue.600}`.
    #[serde(rename = "ref")]
    pub reference: String,
    /// The resolved value, or the raw reference when it does not resolve.
    pub value: String,
    pub description: String,
    /// False only when a `{...}` reference points nowhere. Literal values count as resolved.
    pub resolved: bool,
}

impl ResolvedRow {
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// A primitive token with its dotted path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatToken {
    pub path: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub description: String,
}

/// Flattens a semantic tree into rows, resolving each token against `primitives`.
///
/// Rows follow the tree's insertion order; `prefix` is prepended to every path.
pub fn flatten_semantic<S: AsRef<str>>(
    group: &TokenGroup,
    prefix: &[S],
    primitives: &TokenNode,
) -> Vec<ResolvedRow> {
    let mut path: Vec<String> = prefix.iter().map(|s| s.as_ref().to_string()).collect();
    let mut rows = Vec::new();
    flatten_semantic_into(group, &mut path, primitives, &mut rows);
    rows
}

fn flatten_semantic_into(
    group: &TokenGroup,
    path: &mut Vec<String>,
    primitives: &TokenNode,
    rows: &mut Vec<ResolvedRow>,
) {
    for (key, node) in group.iter() {
        path.push(key.to_string());
        match node {
            TokenNode::Leaf(leaf) => {
                let reference = leaf.value.display();
                let joined = path.join(".");
                let (value, resolved) = match lookup_reference(&reference, primitives) {
                    Resolution::Resolved(target) => (target.value.display(), true),
                    Resolution::NotAReference => (reference.clone(), true),
                    failure => {
                        debug!(path = %joined, reference = %reference, ?failure, "unresolved token reference");
                        (reference.clone(), false)
                    }
                };
                rows.push(ResolvedRow {
                    path: joined,
                    reference,
                    value,
                    description: leaf.description.clone().unwrap_or_default(),
                    resolved,
                });
            }
            TokenNode::Group(child) => flatten_semantic_into(child, path, primitives, rows),
        }
        path.pop();
    }
}

/// Flattens any token tree without resolving references.
pub fn flatten_tokens<S: AsRef<str>>(node: &TokenNode, prefix: &[S]) -> Vec<FlatToken> {
    let mut path: Vec<String> = prefix.iter().map(|s| s.as_ref().to_string()).collect();
    let mut out = Vec::new();
    flatten_tokens_into(node, &mut path, &mut out);
    out
}

fn flatten_tokens_into(node: &TokenNode, path: &mut Vec<String>, out: &mut Vec<FlatToken>) {
    match node {
        TokenNode::Leaf(leaf) => out.push(FlatToken {
            path: path.join("."),
            value: leaf.value.display(),
            kind: leaf.kind.clone(),
            description: leaf.description.clone().unwrap_or_default(),
        }),
        TokenNode::Group(group) => {
            for (key, child) in group.iter() {
                path.push(key.to_string());
                flatten_tokens_into(child, path, out);
                path.pop();
            }
        }
    }
}

/// Number of tokens in a tree, at any depth.
pub fn count_leaves(node: &TokenNode) -> usize {
    node.leaf_count()
}
