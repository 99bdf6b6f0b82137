//! # Showcase Module
//!
//! Builds renderer-independent page models from a [`TokenCatalog`].
//!
//! ## Responsibilities
//! - **Primitive Pages**: Colors, typography, spacing, radius, shadows, opacity.
//! - **Semantic Page**: Resolved semantic color table.
//! - **Guides**: Static platform guides bundled as Markdown.
//! - **Index**: A page linking every other page.
//!
//! ## Key Types
//! - `Page`: Title, intro and an ordered list of sections.
//! - `SectionContent`: Swatches, a table, or Markdown text.

pub mod guides;
pub mod primitives;
pub mod semantic;

use crate::catalog::TokenCatalog;

pub use guides::guide_pages;
pub use primitives::{
    color_palette, opacity_scale, radius_scale, shadow_scale, spacing_scale, typography,
};
pub use semantic::{semantic_color_table, semantic_rows};

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Output path without extension, e.g. `colors` or `guides/css`.
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: Option<String>,
    pub content: SectionContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Swatches(Vec<Swatch>),
    Table(Table),
    Markdown(String),
}

/// A color chip with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    /// Label text on the chip should be dark.
    pub dark_text: bool,
    /// Chip needs a border to stand out from the page.
    pub outlined: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Code(String),
    /// A color chip filled with the given value.
    Swatch(String),
    /// Sample text styled with inline CSS.
    Preview { style: String, text: String },
    /// A horizontal bar `width` pixels wide.
    Bar { width: u32 },
    /// A link to another page by slug.
    Link { slug: String, text: String },
}

impl Page {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, intro: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            intro: intro.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, heading: Option<&str>, content: SectionContent) {
        self.sections.push(Section {
            heading: heading.map(str::to_string),
            content,
        });
    }
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

/// The token reference pages in sidebar order.
pub fn token_pages(catalog: &TokenCatalog) -> Vec<Page> {
    vec![
        color_palette(catalog),
        typography(catalog),
        spacing_scale(catalog),
        radius_scale(catalog),
        shadow_scale(catalog),
        opacity_scale(catalog),
        semantic_color_table(catalog),
    ]
}

/// Links every page in `pages`, grouped into token reference and guides.
pub fn index_page(title: &str, pages: &[Page]) -> Page {
    let mut index = Page::new(
        "index",
        title,
        "Reference pages for every design token, generated from the token JSON sources.",
    );
    let (guides, tokens): (Vec<&Page>, Vec<&Page>) =
        pages.iter().partition(|p| p.slug.starts_with("guides/"));

    for (heading, group) in [("Token Reference", tokens), ("Platform Guides", guides)] {
        if group.is_empty() {
            continue;
        }
        let mut table = Table::new(&["Page", "About"]);
        for page in group {
            table.rows.push(vec![
                Cell::Link {
                    slug: page.slug.clone(),
                    text: page.title.clone(),
                },
                Cell::Text(page.intro.clone()),
            ]);
        }
        index.push(Some(heading), SectionContent::Table(table));
    }
    index
}

/// Leading number of a CSS length, e.g. `16` for `"16px"`.
pub(crate) fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(value.len());
    value[..end].parse().ok()
}
