//! Color helpers for swatches: hex parsing and label contrast.

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Perceived brightness on a 0-255 scale.
    pub fn luminance(&self) -> f32 {
        self.r as f32 * 0.299 + self.g as f32 * 0.587 + self.b as f32 * 0.114
    }
}

/// Helper to parse hex strings like "#RRGGBB" or "#RGB"
pub fn parse_hex_color(hex: &str) -> Option<Rgb> {
    let hex = hex.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        _ => None,
    }
}

/// Whether a label drawn on top of `value` should use dark text.
///
/// Values that are not hex colors (references, `transparent`) count as light.
pub fn needs_dark_text(value: &str) -> bool {
    parse_hex_color(value)
        .map(|rgb| rgb.luminance() > 186.0)
        .unwrap_or(true)
}

/// Near-white swatches get an outline so they stay visible on a white page.
pub fn needs_outline(value: &str) -> bool {
    parse_hex_color(value)
        .map(|rgb| rgb.luminance() >= 250.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            parse_hex_color("#2563eb"),
            Some(Rgb {
                r: 0x25,
                g: 0x63,
                b: 0xeb
            })
        );
        assert_eq!(
            parse_hex_color("#fff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(parse_hex_color("{color.white}"), None);
        assert_eq!(parse_hex_color("#12"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_contrast() {
        assert!(needs_dark_text("#eff6ff"));
        assert!(!needs_dark_text("#1e3a8a"));
        assert!(!needs_dark_text("#2563eb"));
        assert!(needs_dark_text("transparent"));
    }

    #[test]
    fn test_outline() {
        assert!(needs_outline("#ffffff"));
        assert!(!needs_outline("#f3f4f6"));
        assert!(!needs_outline("#000000"));
    }
}
