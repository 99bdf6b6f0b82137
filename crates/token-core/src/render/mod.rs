//! # Render Module
//!
//! Turns [`Page`] models into Markdown or standalone HTML.
//!
//! ## Key Functions
//! - `render_page`: Dispatches on the configured output format.
//! - `render_markdown` / `render_html`: The two backends.

pub mod html;
pub mod markdown;

use crate::config::{OutputFormat, SiteConfig};
use crate::showcase::Page;

pub use html::render_html;
pub use markdown::render_markdown;

pub fn render_page(page: &Page, config: &SiteConfig) -> String {
    match config.format {
        OutputFormat::Markdown => render_markdown(page),
        OutputFormat::Html => render_html(page, config),
    }
}

/// Relative link from the page at `from` to the page at `to`.
pub fn page_href(from: &str, to: &str, format: OutputFormat) -> String {
    let depth = from.matches('/').count();
    format!("{}{}.{}", "../".repeat(depth), to, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_href() {
        assert_eq!(page_href("index", "colors", OutputFormat::Html), "colors.html");
        assert_eq!(
            page_href("guides/css", "colors", OutputFormat::Markdown),
            "../colors.md"
        );
        assert_eq!(
            page_href("index", "guides/ios", OutputFormat::Markdown),
            "guides/ios.md"
        );
    }
}
