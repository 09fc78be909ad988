//! Light/dark palettes and the game background colour.

use std::str::FromStr;

use ratzilla::ratatui::style::{Color, Style};

use crate::settings::DisplayMode;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Light => Palette {
                fg: Color::Black,
                bg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
            },
            DisplayMode::Dark => Palette {
                fg: Color::White,
                bg: Color::Black,
                muted: Color::Gray,
                accent: Color::LightCyan,
                border: Color::DarkGray,
            },
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).bg(self.bg)
    }
}

/// Parse a `#rrggbb` string. Anything else (named colours, short forms) is
/// rejected.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Color::from_str(s).ok()
}

/// Black or white, whichever reads better on `bg`.
pub fn contrasting(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        Color::Black | Color::DarkGray | Color::Blue | Color::Red | Color::Magenta => Color::White,
        _ => Color::Black,
    }
}

/// Preset swatches offered by the colour picker.
pub const SWATCHES: &[(&str, &str)] = &[
    ("#ffffff", "White"),
    ("#fff8dc", "Cornsilk"),
    ("#ffe4e1", "Misty rose"),
    ("#e0f7fa", "Pale cyan"),
    ("#d0f0c0", "Tea green"),
    ("#808080", "Gray"),
    ("#1e1e2e", "Night"),
    ("#000000", "Black"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("#1E1e2E"), Some(Color::Rgb(0x1e, 0x1e, 0x2e)));
    }

    #[test]
    fn rejects_other_forms() {
        assert_eq!(parse_hex_color("white"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("ffffff"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn every_swatch_parses() {
        for (hex, name) in SWATCHES {
            assert!(parse_hex_color(hex).is_some(), "{name} ({hex})");
        }
    }

    #[test]
    fn contrast_picks_readable_side() {
        assert_eq!(contrasting(Color::Rgb(255, 255, 255)), Color::Black);
        assert_eq!(contrasting(Color::Rgb(0, 0, 0)), Color::White);
        assert_eq!(contrasting(Color::Rgb(0x1e, 0x1e, 0x2e)), Color::White);
        assert_eq!(contrasting(Color::Black), Color::White);
    }

    #[test]
    fn palettes_differ_by_mode() {
        let light = Palette::for_mode(DisplayMode::Light);
        let dark = Palette::for_mode(DisplayMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_eq!(light.fg, dark.bg);
    }
}
