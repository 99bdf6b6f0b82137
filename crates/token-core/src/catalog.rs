//! # Catalog Module
//!
//! Loads the token documents that every page is rendered from.
//!
//! ## Responsibilities
//! - **Sources**: Embedded (bundled at compile time) or a directory on disk.
//! - **Parsing**: One `TokenNode` per category, checked for its root group.
//! - **Primitive Root**: All primitive documents merged into one tree for reference resolution.
//!
//! ## Key Types
//! - `Category`: The seven token documents.
//! - `TokenSource`: Where document text comes from.
//! - `TokenCatalog`: The parsed, immutable document set.

use crate::errors::{Result, TokenError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use token_data::{TokenGroup, TokenNode};
use tracing::{debug, instrument};

/// One token document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Color,
    Typography,
    Spacing,
    BorderRadius,
    Shadow,
    Opacity,
    Semantic,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Color,
        Category::Typography,
        Category::Spacing,
        Category::BorderRadius,
        Category::Shadow,
        Category::Opacity,
        Category::Semantic,
    ];

    /// Path of the document relative to the tokens directory.
    pub fn file(self) -> &'static str {
        match self {
            Category::Color => "primitives/color.json",
            Category::Typography => "primitives/typography.json",
            Category::Spacing => "primitives/spacing.json",
            Category::BorderRadius => "primitives/border-radius.json",
            Category::Shadow => "primitives/shadow.json",
            Category::Opacity => "primitives/opacity.json",
            Category::Semantic => "semantic/color.json",
        }
    }

    /// Top-level key every document nests its tokens under.
    pub fn root_key(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Typography => "font",
            Category::Spacing => "spacing",
            Category::BorderRadius => "borderRadius",
            Category::Shadow => "shadow",
            Category::Opacity => "opacity",
            Category::Semantic => "semantic",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Color => "color",
            Category::Typography => "typography",
            Category::Spacing => "spacing",
            Category::BorderRadius => "border-radius",
            Category::Shadow => "shadow",
            Category::Opacity => "opacity",
            Category::Semantic => "semantic",
        }
    }

    pub fn is_primitive(self) -> bool {
        self != Category::Semantic
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s || c.root_key() == s)
            .ok_or_else(|| TokenError::UnknownCategory(s.to_string()))
    }
}

/// A trait for abstracting where token documents are read from.
pub trait TokenSource {
    /// Returns the raw JSON text of a category's document.
    fn read_document(&self, category: Category) -> Result<String>;

    /// Human readable description used in logs.
    fn describe(&self) -> String;
}

/// The token set bundled into the binary.
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn document(category: Category) -> &'static str {
        match category {
            Category::Color => include_str!("../tokens/primitives/color.json"),
            Category::Typography => include_str!("../tokens/primitives/typography.json"),
            Category::Spacing => include_str!("../tokens/primitives/spacing.json"),
            Category::BorderRadius => include_str!("../tokens/primitives/border-radius.json"),
            Category::Shadow => include_str!("../tokens/primitives/shadow.json"),
            Category::Opacity => include_str!("../tokens/primitives/opacity.json"),
            Category::Semantic => include_str!("../tokens/semantic/color.json"),
        }
    }
}

impl TokenSource for EmbeddedSource {
    fn read_document(&self, category: Category) -> Result<String> {
        Ok(Self::document(category).to_string())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Reads `primitives/*.json` and `semantic/color.json` below `root`.
pub struct DirectorySource {
    pub root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TokenSource for DirectorySource {
    #[instrument(level = "debug", skip(self), fields(root = %self.root.display()))]
    fn read_document(&self, category: Category) -> Result<String> {
        let path = self.root.join(category.file());
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => TokenError::DocumentNotFound(path.display().to_string()),
            _ => TokenError::IoError(e),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// The parsed token documents.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    documents: Vec<(Category, TokenNode)>,
    primitives: TokenNode,
}

impl TokenCatalog {
    /// Reads and parses every category from `source`.
    #[instrument(level = "info", skip(source), fields(source = %source.describe()))]
    pub fn load(source: &dyn TokenSource) -> Result<Self> {
        let mut documents = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let text = source.read_document(category)?;
            let node = parse_document(category, &text)?;
            debug!(
                category = %category,
                tokens = node.leaf_count(),
                "loaded token document"
            );
            documents.push((category, node));
        }
        Ok(Self::from_documents(documents))
    }

    /// Loads the bundled token set.
    pub fn embedded() -> Result<Self> {
        Self::load(&EmbeddedSource)
    }

    /// Builds a catalog from already parsed documents. Categories may be missing.
    pub fn from_documents(documents: impl IntoIterator<Item = (Category, TokenNode)>) -> Self {
        let documents: Vec<_> = documents.into_iter().collect();
        let mut merged = TokenGroup::default();
        for (category, node) in &documents {
            if !category.is_primitive() {
                continue;
            }
            if let Some(group) = node.as_group() {
                for (key, child) in group.iter() {
                    merged.insert(key, child.clone());
                }
            }
        }
        Self {
            documents,
            primitives: TokenNode::Group(merged),
        }
    }

    /// The whole document of a category, including its root key.
    pub fn document(&self, category: Category) -> Option<&TokenNode> {
        self.documents
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, node)| node)
    }

    /// The group under the category's root key (`color`, `font`, ...).
    pub fn group(&self, category: Category) -> Option<&TokenGroup> {
        self.document(category)?
            .get(category.root_key())?
            .as_group()
    }

    /// Every primitive document merged into one tree; references resolve against this.
    pub fn primitives(&self) -> &TokenNode {
        &self.primitives
    }

    pub fn semantic(&self) -> Option<&TokenGroup> {
        self.group(Category::Semantic)
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.documents.iter().map(|(c, _)| *c)
    }
}

fn parse_document(category: Category, text: &str) -> Result<TokenNode> {
    let node: TokenNode = serde_json::from_str(text).map_err(|source| TokenError::Parse {
        file: category.file().to_string(),
        source,
    })?;
    match node.get(category.root_key()) {
        Some(TokenNode::Group(_)) => Ok(node),
        _ => Err(TokenError::MissingRoot {
            file: category.file().to_string(),
            key: category.root_key().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads_all_categories() {
        let catalog = TokenCatalog::embedded().unwrap();
        assert_eq!(catalog.categories().count(), Category::ALL.len());
        for category in Category::ALL {
            assert!(catalog.group(category).is_some(), "missing {}", category);
        }
    }

    #[test]
    fn test_primitives_are_merged() {
        let catalog = TokenCatalog::embedded().unwrap();
        let keys: Vec<&str> = catalog.primitives().as_group().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["color", "font", "spacing", "borderRadius", "shadow", "opacity"]
        );
        assert!(catalog.primitives().get("semantic").is_none());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("border-radius".parse::<Category>().unwrap(), Category::BorderRadius);
        assert_eq!("borderRadius".parse::<Category>().unwrap(), Category::BorderRadius);
        assert_eq!("font".parse::<Category>().unwrap(), Category::Typography);
        assert!(matches!(
            "motion".parse::<Category>(),
            Err(TokenError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_missing_root_key() {
        struct WrongRoot;
        impl TokenSource for WrongRoot {
            fn read_document(&self, _category: Category) -> Result<String> {
                Ok(r##"{ "colour": { "red": { "$value": "#f00" } } }"##.to_string())
            }
            fn describe(&self) -> String {
                "wrong-root".to_string()
            }
        }
        let err = TokenCatalog::load(&WrongRoot).unwrap_err();
        assert!(matches!(err, TokenError::MissingRoot { ref key, .. } if key == "color"));
    }

    #[test]
    fn test_directory_source_missing_file() {
        let source = DirectorySource::new("/nonexistent/tokens");
        let err = source.read_document(Category::Color).unwrap_err();
        assert!(matches!(err, TokenError::DocumentNotFound(_)));
    }
}
