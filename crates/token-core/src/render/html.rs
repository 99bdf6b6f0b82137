use super::page_href;
use crate::config::{OutputFormat, SiteConfig};
use crate::showcase::{Cell, Page, SectionContent, Swatch, Table};
use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, Options, Parser};
use std::fmt::Write;

const STYLESHEET: &str = r#"
body { margin: 0; font-family: Inter, system-ui, sans-serif; color: #111827; background: #ffffff; }
header { padding: 16px 32px; border-bottom: 1px solid #e5e7eb; font-weight: 600; }
header a { color: inherit; text-decoration: none; }
main { max-width: 1080px; padding: 24px 32px 64px; }
code { font-family: "JetBrains Mono", monospace; font-size: 12px; }
table { width: 100%; border-collapse: collapse; font-size: 13px; }
th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e5e7eb; vertical-align: middle; }
.token-grid { display: flex; flex-wrap: wrap; gap: 12px; }
.token-swatch { width: 112px; border-radius: 8px; overflow: hidden; border: 1px solid #e5e7eb; }
.token-swatch__color { height: 64px; padding: 6px; font-size: 11px; }
.token-swatch__label { padding: 6px 8px; font-size: 12px; }
.token-swatch__value { display: block; font-family: "JetBrains Mono", monospace; font-size: 11px; color: #4b5563; }
.swatch { display: inline-block; width: 32px; height: 32px; border-radius: 6px; border: 1px solid #e5e7eb; }
.bar { height: 8px; border-radius: 4px; background: #2563eb; min-width: 2px; }
"#;

/// Renders a standalone HTML document for `page`.
pub fn render_html(page: &Page, config: &SiteConfig) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", encode_text(&page.title));
    if !page.intro.is_empty() {
        let _ = writeln!(body, "<p>{}</p>", encode_text(&page.intro));
    }

    for section in &page.sections {
        body.push_str("<section>\n");
        if let Some(heading) = &section.heading {
            let _ = writeln!(body, "<h2>{}</h2>", encode_text(heading));
        }
        match &section.content {
            SectionContent::Swatches(swatches) => write_swatches(&mut body, swatches),
            SectionContent::Table(table) => write_table(&mut body, table, &page.slug),
            SectionContent::Markdown(markdown) => {
                let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
                html::push_html(&mut body, parser);
            }
        }
        body.push_str("</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {site}</title>
<style>{style}</style>
</head>
<body>
<header><a href="{home}">{site}</a></header>
<main>
{body}</main>
</body>
</html>
"#,
        title = encode_text(&page.title),
        site = encode_text(&config.title),
        style = STYLESHEET,
        home = page_href(&page.slug, "index", OutputFormat::Html),
        body = body,
    )
}

fn write_swatches(out: &mut String, swatches: &[Swatch]) {
    out.push_str("<div class=\"token-grid\">\n");
    for s in swatches {
        let text = if s.dark_text { "#111827" } else { "#ffffff" };
        let border = if s.outlined {
            "; box-shadow: inset 0 0 0 1px #e5e7eb"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "<div class=\"token-swatch\"><div class=\"token-swatch__color\" style=\"background: {color}; color: {text}{border}\">{name}</div><div class=\"token-swatch__label\"><strong>{name}</strong><span class=\"token-swatch__value\">{value}</span>{desc}</div></div>",
            color = encode_double_quoted_attribute(&s.value),
            value = encode_text(&s.value),
            name = encode_text(&s.name),
            text = text,
            border = border,
            desc = s
                .description
                .as_deref()
                .map(|d| format!("<span class=\"token-swatch__value\">{}</span>", encode_text(d)))
                .unwrap_or_default(),
        );
    }
    out.push_str("</div>\n");
}

fn write_table(out: &mut String, table: &Table, slug: &str) {
    out.push_str("<table>\n<thead><tr>");
    for header in &table.headers {
        let _ = write!(out, "<th>{}</th>", encode_text(header));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for c in row {
            let _ = write!(out, "<td>{}</td>", cell(c, slug));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

fn cell(cell: &Cell, slug: &str) -> String {
    match cell {
        Cell::Text(text) => encode_text(text).into_owned(),
        Cell::Code(code) => format!("<code>{}</code>", encode_text(code)),
        Cell::Swatch(value) => format!(
            "<span class=\"swatch\" style=\"background: {}\"></span>",
            encode_double_quoted_attribute(value)
        ),
        Cell::Preview { style, text } => format!(
            "<div style=\"{}\">{}</div>",
            encode_double_quoted_attribute(style),
            encode_text(text)
        ),
        Cell::Bar { width } => format!("<div class=\"bar\" style=\"width: {}px\"></div>", width),
        Cell::Link { slug: to, text } => format!(
            "<a href=\"{}\">{}</a>",
            encode_double_quoted_attribute(&page_href(slug, to, OutputFormat::Html)),
            encode_text(text)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            format: OutputFormat::Html,
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_document_shell() {
        let page = Page::new("colors", "Colors", "Ramps & base colors");
        let html = render_html(&page, &config());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Colors - Design Tokens</title>"));
        assert!(html.contains("<p>Ramps &amp; base colors</p>"));
        assert!(html.contains("<a href=\"index.html\">Design Tokens</a>"));
    }

    #[test]
    fn test_guide_links_home_relative() {
        let page = Page::new("guides/css", "CSS", "");
        let html = render_html(&page, &config());
        assert!(html.contains("<a href=\"../index.html\">"));
    }

    #[test]
    fn test_swatch_contrast() {
        let mut page = Page::new("colors", "Colors", "");
        page.push(
            Some("Blue"),
            SectionContent::Swatches(vec![Swatch {
                name: "900".to_string(),
                value: "#1e3a8a".to_string(),
                description: None,
                dark_text: false,
                outlined: false,
            }]),
        );
        let html = render_html(&page, &config());
        assert!(html.contains("style=\"background: #1e3a8a; color: #ffffff\""));
        assert!(html.contains("<h2>Blue</h2>"));
    }

    #[test]
    fn test_markdown_sections_become_html() {
        let mut page = Page::new("guides/ios", "iOS", "");
        page.push(None, SectionContent::Markdown("Use `DesignTokens`.".to_string()));
        let html = render_html(&page, &config());
        assert!(html.contains("<p>Use <code>DesignTokens</code>.</p>"));
    }

    #[test]
    fn test_cells_are_escaped() {
        assert_eq!(
            cell(&Cell::Code("<b>".to_string()), "x"),
            "<code>&lt;b&gt;</code>"
        );
        assert_eq!(
            cell(&Cell::Text("Tom & \"Jerry\"".to_string()), "x"),
            "Tom &amp; \"Jerry\""
        );
        assert_eq!(
            cell(&Cell::Swatch("url(\"x\")".to_string()), "x"),
            "<span class=\"swatch\" style=\"background: url(&quot;x&quot;)\"></span>"
        );
        assert_eq!(
            cell(&Cell::Bar { width: 48 }, "spacing"),
            "<div class=\"bar\" style=\"width: 48px\"></div>"
        );
    }
}
