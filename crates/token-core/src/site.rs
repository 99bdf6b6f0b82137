//! # Site Module
//!
//! Writes every page of the token reference to disk.
//!
//! ## Key Functions
//! - `site_pages`: Token pages, guides and the index, in output order.
//! - `build_site`: Renders and writes them below `SiteConfig::out_dir`.

use crate::catalog::TokenCatalog;
use crate::check::check_catalog;
use crate::config::SiteConfig;
use crate::render::render_page;
use crate::showcase::{guide_pages, index_page, token_pages, Page};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument, warn};

/// Summary of a site build.
#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub out_dir: PathBuf,
    pub pages: Vec<PathBuf>,
    pub unresolved_references: usize,
}

/// The index first, then token pages, then guides.
pub fn site_pages(catalog: &TokenCatalog, config: &SiteConfig) -> Vec<Page> {
    let mut pages = token_pages(catalog);
    pages.extend(guide_pages());
    let index = index_page(&config.title, &pages);
    pages.insert(0, index);
    pages
}

/// Renders every page and writes it to `config.out_dir`.
///
/// Existing files with the same names are overwritten; other files are left alone.
#[instrument(level = "info", skip(catalog, config), fields(out_dir = %config.out_dir.display(), format = ?config.format))]
pub fn build_site(catalog: &TokenCatalog, config: &SiteConfig) -> Result<SiteReport> {
    let check = check_catalog(catalog);
    if !check.is_clean() {
        warn!(
            count = check.unresolved.len(),
            "building with unresolved references; they are shown as written"
        );
    }

    let mut written = Vec::new();
    for page in site_pages(catalog, config) {
        let path = config
            .out_dir
            .join(format!("{}.{}", page.slug, config.format.extension()));
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&path, render_page(&page, config))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(page = %page.slug, path = %path.display(), "wrote page");
        written.push(path);
    }

    Ok(SiteReport {
        out_dir: config.out_dir.clone(),
        pages: written,
        unresolved_references: check.unresolved.len(),
    })
}
