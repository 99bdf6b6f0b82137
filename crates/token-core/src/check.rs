//! # Check Module
//!
//! Reports what the rendered pages quietly paper over: references that do not
//! resolve, groups with nothing in them, and tokens without a type.

use crate::catalog::TokenCatalog;
use crate::resolve::{lookup_reference, Resolution};
use serde::Serialize;
use token_data::TokenNode;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub path: String,
    pub reference: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub unresolved: Vec<UnresolvedReference>,
    pub empty_groups: Vec<String>,
    pub untyped: Vec<String>,
    /// Semantic tokens holding a literal value instead of a `{...}` reference.
    pub literals: Vec<String>,
}

impl CheckReport {
    /// No unresolved references. Empty groups, untyped tokens and literals are warnings only.
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Walks every document of the catalog.
pub fn check_catalog(catalog: &TokenCatalog) -> CheckReport {
    let mut report = CheckReport::default();
    for category in catalog.categories() {
        let Some(document) = catalog.document(category) else {
            continue;
        };
        let resolve = !category.is_primitive();
        walk(
            document,
            &mut Vec::new(),
            resolve,
            catalog.primitives(),
            &mut report,
        );
    }

    for item in &report.unresolved {
        warn!(path = %item.path, reference = %item.reference, reason = %item.reason, "unresolved reference");
    }
    for path in &report.empty_groups {
        warn!(path = %path, "empty token group");
    }
    for path in &report.literals {
        warn!(path = %path, "semantic token holds a literal value");
    }
    report
}

fn walk(
    node: &TokenNode,
    path: &mut Vec<String>,
    resolve: bool,
    primitives: &TokenNode,
    report: &mut CheckReport,
) {
    match node {
        TokenNode::Leaf(leaf) => {
            let joined = path.join(".");
            if leaf.kind.is_none() {
                report.untyped.push(joined.clone());
            }
            if !resolve {
                return;
            }
            let reference = leaf.value.display();
            let reason = match lookup_reference(&reference, primitives) {
                Resolution::Resolved(_) => return,
                Resolution::NotAReference => {
                    report.literals.push(joined);
                    return;
                }
                Resolution::MissingPath { at_segment } => format!("no token at `{}`", at_segment),
                Resolution::NotALeaf => "points at a group".to_string(),
            };
            report.unresolved.push(UnresolvedReference {
                path: joined,
                reference,
                reason,
            });
        }
        TokenNode::Group(group) => {
            if group.is_empty() && !path.is_empty() {
                report.empty_groups.push(path.join("."));
            }
            for (key, child) in group.iter() {
                path.push(key.to_string());
                walk(child, path, resolve, primitives, report);
                path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use serde_json::json;

    fn node(value: serde_json::Value) -> TokenNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_embedded_tokens_are_clean() {
        let catalog = TokenCatalog::embedded().unwrap();
        let report = check_catalog(&catalog);
        assert!(report.is_clean(), "{:?}", report.unresolved);
        assert!(report.empty_groups.is_empty());
        assert!(report.untyped.is_empty());
        assert!(report.literals.is_empty());
    }

    #[test]
    fn test_reports_findings() {
        let catalog = TokenCatalog::from_documents(vec![
            (
                Category::Color,
                node(json!({ "color": { "$type": "color", "blue": { "500": { "$value": "#3b82f6" } } } })),
            ),
            (
                Category::Semantic,
                node(json!({
                    "semantic": {
                        "border": { "focus": { "$value": "{color.blue.500}", "$type": "color" } },
                        "accent": { "$value": "{color.teal.500}" },
                        "group": { "$value": "{color.blue}" },
                        "literal": { "$value": "#ff0000" },
                        "broken": {}
                    }
                })),
            ),
        ]);
        let report = check_catalog(&catalog);
        assert!(!report.is_clean());

        let paths: Vec<&str> = report.unresolved.iter().map(|u| u.path.as_str()).collect();
        assert_eq!(paths, vec!["semantic.accent", "semantic.group"]);
        assert_eq!(report.unresolved[1].reason, "points at a group");
        assert_eq!(report.literals, vec!["semantic.literal".to_string()]);
        assert_eq!(report.unresolved[0].reason, "no token at `color.teal`");
        assert_eq!(report.empty_groups, vec!["semantic.broken".to_string()]);
        assert_eq!(
            report.untyped,
            vec![
                "semantic.accent".to_string(),
                "semantic.group".to_string(),
                "semantic.literal".to_string()
            ]
        );
    }

    #[test]
    fn test_literal_semantic_value_is_clean() {
        let catalog = TokenCatalog::from_documents(vec![
            (
                Category::Color,
                node(json!({ "color": { "red": { "500": { "$value": "#ef4444" } } } })),
            ),
            (
                Category::Semantic,
                node(json!({
                    "semantic": {
                        "feedback": { "error": { "$value": "#ff0000", "$type": "color" } }
                    }
                })),
            ),
        ]);
        let report = check_catalog(&catalog);
        assert!(report.is_clean());
        assert!(report.unresolved.is_empty());
        assert_eq!(report.literals, vec!["semantic.feedback.error".to_string()]);
    }
}
