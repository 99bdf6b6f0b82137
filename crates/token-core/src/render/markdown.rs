use super::page_href;
use crate::config::OutputFormat;
use crate::showcase::{Cell, Page, SectionContent, Swatch, Table};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

pub fn render_markdown(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", page.title);
    if !page.intro.is_empty() {
        let _ = writeln!(out, "{}\n", page.intro);
    }

    for section in &page.sections {
        if let Some(heading) = &section.heading {
            let _ = writeln!(out, "## {}\n", heading);
        }
        match &section.content {
            SectionContent::Swatches(swatches) => write_swatches(&mut out, swatches),
            SectionContent::Table(table) => write_table(&mut out, table, &page.slug),
            SectionContent::Markdown(body) => {
                out.push_str(body.trim_end());
                out.push_str("\n\n");
            }
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

fn write_swatches(out: &mut String, swatches: &[Swatch]) {
    let table = Table {
        headers: vec![
            "Swatch".to_string(),
            "Name".to_string(),
            "Value".to_string(),
            "Description".to_string(),
        ],
        rows: swatches
            .iter()
            .map(|s| {
                vec![
                    Cell::Swatch(s.value.clone()),
                    Cell::Text(s.name.clone()),
                    Cell::Code(s.value.clone()),
                    Cell::Text(s.description.clone().unwrap_or_default()),
                ]
            })
            .collect(),
    };
    write_table(out, &table, "");
}

fn write_table(out: &mut String, table: &Table, slug: &str) {
    let _ = writeln!(out, "| {} |", table.headers.join(" | "));
    let _ = writeln!(
        out,
        "|{}",
        table.headers.iter().map(|_| " --- |").collect::<String>()
    );
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| cell(c, slug)).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out.push('\n');
}

fn pipe_safe(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

/// Inline code with a fence longer than any backtick run inside `code`.
fn code_span(code: &str) -> String {
    let longest = code
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if code.starts_with('`') || code.ends_with('`') {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

fn cell(cell: &Cell, slug: &str) -> String {
    match cell {
        Cell::Text(text) => pipe_safe(text),
        Cell::Code(code) => code_span(&pipe_safe(code)),
        Cell::Swatch(value) => format!(
            "<span style=\"display:inline-block;width:20px;height:20px;border-radius:4px;border:1px solid #e5e7eb;background:{}\"></span>",
            encode_double_quoted_attribute(value)
        ),
        Cell::Preview { style, text } => format!(
            "<span style=\"{}\">{}</span>",
            encode_double_quoted_attribute(style),
            pipe_safe(&encode_text(text))
        ),
        Cell::Bar { width } => {
            // one block per 8px, rounded up
            let blocks = (*width as usize).div_ceil(8);
            if blocks == 0 {
                "▏".to_string()
            } else {
                "▇".repeat(blocks)
            }
        }
        Cell::Link { slug: to, text } => format!(
            "[{}]({})",
            pipe_safe(text),
            page_href(slug, to, OutputFormat::Markdown)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_markdown() {
        let mut page = Page::new("semantic-colors", "Semantic Colors", "Intro");
        let mut table = Table::new(&["Token", "Resolved"]);
        table.rows.push(vec![
            Cell::Code("semantic.text.link".to_string()),
            Cell::Code("#2563eb".to_string()),
        ]);
        page.push(Some("Text"), SectionContent::Table(table));

        let md = render_markdown(&page);
        assert_eq!(
            md,
            "# Semantic Colors\n\nIntro\n\n## Text\n\n| Token | Resolved |\n| --- | --- |\n| `semantic.text.link` | `#2563eb` |\n"
        );
    }

    #[test]
    fn test_pipes_are_escaped() {
        assert_eq!(cell(&Cell::Text("a | b".to_string()), "x"), "a \\| b");
    }

    #[test]
    fn test_code_with_backticks() {
        assert_eq!(cell(&Cell::Code("a`b".to_string()), "x"), "``a`b``");
        assert_eq!(cell(&Cell::Code("x``y`".to_string()), "x"), "``` x``y` ```");
        assert_eq!(cell(&Cell::Code("plain".to_string()), "x"), "`plain`");
    }

    #[test]
    fn test_preview_is_escaped() {
        let preview = Cell::Preview {
            style: "font-family: \"Inter\"".to_string(),
            text: "<b> & co".to_string(),
        };
        assert_eq!(
            cell(&preview, "typography"),
            "<span style=\"font-family: &quot;Inter&quot;\">&lt;b&gt; &amp; co</span>"
        );
    }

    #[test]
    fn test_bars() {
        assert_eq!(cell(&Cell::Bar { width: 16 }, "spacing"), "▇▇");
        assert_eq!(cell(&Cell::Bar { width: 1 }, "spacing"), "▇");
        assert_eq!(cell(&Cell::Bar { width: 0 }, "spacing"), "▏");
    }

    #[test]
    fn test_links_are_relative() {
        let link = Cell::Link {
            slug: "guides/css".to_string(),
            text: "CSS".to_string(),
        };
        assert_eq!(cell(&link, "index"), "[CSS](guides/css.md)");
    }

    #[test]
    fn test_markdown_section_is_verbatim() {
        let mut page = Page::new("guides/ios", "iOS", "");
        page.push(None, SectionContent::Markdown("Some **bold** text.\n".to_string()));
        assert_eq!(render_markdown(&page), "# iOS\n\nSome **bold** text.\n");
    }
}
