//! Pages for the primitive token documents.

use super::{parse_px, Cell, Page, SectionContent, Swatch, Table};
use crate::catalog::{Category, TokenCatalog};
use crate::color::{needs_dark_text, needs_outline};
use token_data::{TokenGroup, TokenLeaf, TokenNode};

const COLOR_HUES: [&str; 6] = ["blue", "gray", "green", "red", "yellow", "purple"];
const SHADE_STEPS: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];
const BASE_COLORS: [&str; 2] = ["white", "black"];

const FONT_SIZES: [&str; 11] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
];
const FONT_WEIGHTS: [&str; 8] = [
    "thin",
    "light",
    "regular",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const RADIUS_KEYS: [&str; 9] = ["none", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];
const SHADOW_KEYS: [&str; 8] = ["none", "xs", "sm", "md", "lg", "xl", "2xl", "inner"];

const SAMPLE_TEXT: &str = "The quick brown fox";
const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";
const MAX_BAR_WIDTH: f64 = 300.0;

fn leaf<'a>(group: &'a TokenGroup, key: &str) -> Option<&'a TokenLeaf> {
    group.get(key).and_then(TokenNode::as_leaf)
}

fn subgroup<'a>(group: &'a TokenGroup, key: &str) -> Option<&'a TokenGroup> {
    group.get(key).and_then(TokenNode::as_group)
}

fn leaves(group: &TokenGroup) -> impl Iterator<Item = (&str, &TokenLeaf)> {
    group
        .iter()
        .filter_map(|(key, node)| node.as_leaf().map(|l| (key, l)))
}

fn swatch(name: &str, token: &TokenLeaf) -> Swatch {
    let value = token.value.display();
    Swatch {
        name: name.to_string(),
        dark_text: needs_dark_text(&value),
        outlined: needs_outline(&value),
        value,
        description: token.description.clone(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn with_description(value: String, token: &TokenLeaf) -> String {
    match &token.description {
        Some(desc) => format!("{} ({})", value, desc),
        None => value,
    }
}

/// Hue ramps in a fixed order, then the base colors.
pub fn color_palette(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new(
        "colors",
        "Colors",
        "Primitive color ramps. Semantic tokens reference these values.",
    );
    let Some(colors) = catalog.group(Category::Color) else {
        return page;
    };

    for hue in COLOR_HUES {
        let Some(ramp) = subgroup(colors, hue) else {
            continue;
        };
        let swatches: Vec<Swatch> = SHADE_STEPS
            .iter()
            .filter_map(|step| leaf(ramp, step).map(|t| swatch(step, t)))
            .collect();
        if !swatches.is_empty() {
            page.push(Some(capitalize(hue).as_str()), SectionContent::Swatches(swatches));
        }
    }

    let base: Vec<Swatch> = BASE_COLORS
        .iter()
        .filter_map(|name| leaf(colors, name).map(|t| swatch(name, t)))
        .collect();
    if !base.is_empty() {
        page.push(Some("Base"), SectionContent::Swatches(base));
    }
    page
}

fn preview_table(
    group: &TokenGroup,
    prefix: &str,
    keys: Option<&[&str]>,
    preview: impl Fn(&str, &str) -> Cell,
) -> Table {
    let mut table = Table::new(&["Token", "Value", "Preview"]);
    let entries: Vec<(&str, &TokenLeaf)> = match keys {
        Some(keys) => keys
            .iter()
            .filter_map(|k| leaf(group, k).map(|t| (*k, t)))
            .collect(),
        None => leaves(group).collect(),
    };
    for (key, token) in entries {
        let value = token.value.display();
        table.rows.push(vec![
            Cell::Code(format!("{}.{}", prefix, key)),
            Cell::Code(value.clone()),
            preview(key, &value),
        ]);
    }
    table
}

/// Font sizes, weights, families, line heights and letter spacing.
pub fn typography(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new(
        "typography",
        "Typography",
        "Font families, the type scale, weights and spacing.",
    );
    let Some(font) = catalog.group(Category::Typography) else {
        return page;
    };

    if let Some(sizes) = subgroup(font, "size") {
        let table = preview_table(sizes, "font.size", Some(&FONT_SIZES[..]), |_, value| {
            Cell::Preview {
                style: format!("font-size: {}; line-height: 1.3; white-space: nowrap", value),
                text: SAMPLE_TEXT.to_string(),
            }
        });
        page.push(Some("Font Size Scale"), SectionContent::Table(table));
    }

    if let Some(weights) = subgroup(font, "weight") {
        let table = preview_table(weights, "font.weight", Some(&FONT_WEIGHTS[..]), |_, value| {
            Cell::Preview {
                style: format!("font-weight: {}; font-size: 18px", value),
                text: PANGRAM.to_string(),
            }
        });
        page.push(Some("Font Weights"), SectionContent::Table(table));
    }

    if let Some(families) = subgroup(font, "family") {
        let table = preview_table(families, "font.family", None, |_, value| Cell::Preview {
            style: format!("font-family: {}; font-size: 18px", value),
            text: PANGRAM.to_string(),
        });
        page.push(Some("Font Families"), SectionContent::Table(table));
    }

    if let Some(heights) = subgroup(font, "lineHeight") {
        let table = preview_table(heights, "font.lineHeight", None, |name, value| {
            Cell::Preview {
                style: format!("line-height: {}; font-size: 14px; max-width: 320px", value),
                text: format!(
                    "This text demonstrates the \"{}\" line height ({}). A second line shows the rhythm.",
                    name, value
                ),
            }
        });
        page.push(Some("Line Heights"), SectionContent::Table(table));
    }

    if let Some(tracking) = subgroup(font, "letterSpacing") {
        let table = preview_table(tracking, "font.letterSpacing", None, |_, value| {
            Cell::Preview {
                style: format!("letter-spacing: {}; font-size: 16px", value),
                text: SAMPLE_TEXT.to_string(),
            }
        });
        page.push(Some("Letter Spacing"), SectionContent::Table(table));
    }
    page
}

/// Every spacing step with a bar capped at 300px.
pub fn spacing_scale(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new(
        "spacing",
        "Spacing",
        "The spacing scale used for padding, margins and gaps.",
    );
    let Some(spacing) = catalog.group(Category::Spacing) else {
        return page;
    };

    let mut table = Table::new(&["Token", "Value", "Scale"]);
    for (key, token) in leaves(spacing) {
        let value = token.value.display();
        let px = parse_px(&value).unwrap_or(0.0).max(0.0);
        table.rows.push(vec![
            Cell::Code(format!("spacing.{}", key)),
            Cell::Text(with_description(value, token)),
            Cell::Bar {
                width: px.min(MAX_BAR_WIDTH).round() as u32,
            },
        ]);
    }
    page.push(None, SectionContent::Table(table));
    page
}

pub fn radius_scale(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new(
        "border-radius",
        "Border Radius",
        "Corner radii from square to fully rounded.",
    );
    let Some(radii) = catalog.group(Category::BorderRadius) else {
        return page;
    };

    let table = preview_table(radii, "borderRadius", Some(&RADIUS_KEYS[..]), |key, value| {
        Cell::Preview {
            style: format!(
                "border-radius: {}; width: 64px; height: 64px; background: #e5e7eb; display: flex; align-items: center; justify-content: center",
                value
            ),
            text: key.to_string(),
        }
    });
    page.push(None, SectionContent::Table(table));
    page
}

pub fn shadow_scale(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new(
        "shadows",
        "Shadows",
        "Elevation levels expressed as box shadows.",
    );
    let Some(shadows) = catalog.group(Category::Shadow) else {
        return page;
    };

    let mut table = Table::new(&["Token", "Value", "Description", "Preview"]);
    for key in SHADOW_KEYS {
        let Some(token) = leaf(shadows, key) else {
            continue;
        };
        let css = token.value.display();
        table.rows.push(vec![
            Cell::Code(format!("shadow.{}", key)),
            Cell::Code(css.clone()),
            Cell::Text(token.description.clone().unwrap_or_default()),
            Cell::Preview {
                style: format!(
                    "box-shadow: {}; width: 96px; height: 64px; border-radius: 8px; background: #ffffff",
                    css
                ),
                text: key.to_string(),
            },
        ]);
    }
    page.push(None, SectionContent::Table(table));
    page
}

pub fn opacity_scale(catalog: &TokenCatalog) -> Page {
    let mut page = Page::new("opacity", "Opacity", "Opacity steps from 0 to 1.");
    let Some(opacity) = catalog.group(Category::Opacity) else {
        return page;
    };

    let table = preview_table(opacity, "opacity", None, |key, value| Cell::Preview {
        style: format!(
            "opacity: {}; background: #2563eb; color: #ffffff; padding: 8px 12px",
            value
        ),
        text: format!("{}%", key),
    });
    page.push(None, SectionContent::Table(table));
    page
}
