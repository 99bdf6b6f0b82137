//! The semantic color table.

use super::{Cell, Page, SectionContent, Table};
use crate::catalog::TokenCatalog;
use crate::flatten::{flatten_semantic, ResolvedRow};

/// Path prefix of every semantic row.
pub const SEMANTIC_PREFIX: &str = "semantic";

/// Semantic tokens resolved against the catalog's primitives.
pub fn semantic_rows(catalog: &TokenCatalog) -> Vec<ResolvedRow> {
    match catalog.semantic() {
        Some(semantic) => flatten_semantic(semantic, &[SEMANTIC_PREFIX], catalog.primitives()),
        None => Vec::new(),
    }
}

pub fn semantic_color_table(catalog: &TokenCatalog) -> Page {
    let rows = semantic_rows(catalog);
    let unresolved = rows.iter().filter(|r| !r.is_resolved()).count();
    let mut intro = format!(
        "{} semantic color tokens and the primitives they reference.",
        rows.len()
    );
    if unresolved > 0 {
        intro.push_str(&format!(
            " {} reference(s) do not resolve and are shown as written.",
            unresolved
        ));
    }

    let mut page = Page::new("semantic-colors", "Semantic Colors", intro);
    if rows.is_empty() {
        return page;
    }

    let mut table = Table::new(&["Swatch", "Token", "References", "Resolved", "Description"]);
    for row in rows {
        table.rows.push(vec![
            Cell::Swatch(row.value.clone()),
            Cell::Code(row.path),
            Cell::Code(row.reference),
            Cell::Code(row.value),
            Cell::Text(row.description),
        ]);
    }
    page.push(None, SectionContent::Table(table));
    page
}
