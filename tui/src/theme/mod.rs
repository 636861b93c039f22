//! Theme and Colors
//!
//! The palette file holds `#rrggbb` strings; this turns them into ratatui
//! colours once at startup so drawing never has to parse anything.

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use waifu_core::Palette;

/// A palette entry that is not a `#rrggbb` colour
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid {field} colour {value:?}, expected #rrggbb")]
pub struct ThemeError {
    /// Palette field name
    pub field: &'static str,
    /// Offending value
    pub value: String,
}

/// Resolved panel colours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Panel background
    pub background: Color,
    /// Text
    pub foreground: Color,
    /// Borders
    pub border: Color,
    /// Selected list entry
    pub accent: Color,
    /// Border titles
    pub title: Color,
}

impl Theme {
    /// Resolve every palette entry
    pub fn from_palette(palette: &Palette) -> Result<Self, ThemeError> {
        Ok(Self {
            background: parse_color("background", &palette.background)?,
            foreground: parse_color("foreground", &palette.foreground)?,
            border: parse_color("border", &palette.border)?,
            accent: parse_color("accent", &palette.accent)?,
            title: parse_color("title", &palette.title)?,
        })
    }

    /// Base style for every panel
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Border lines
    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border titles
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Selected list entry
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default().fg(self.background).bg(self.accent)
    }

    /// Secondary list text
    #[must_use]
    pub fn secondary(&self) -> Style {
        Style::default().fg(self.foreground).add_modifier(Modifier::DIM)
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ThemeError> {
    let invalid = || ThemeError {
        field,
        value: value.to_string(),
    };

    // Color::from_str also takes names and indices; the palette is hex only
    let hex = value.trim();
    if !hex.starts_with('#') || hex.len() != 7 {
        return Err(invalid());
    }
    hex.parse::<Color>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_palette_resolves() {
        let theme = Theme::from_palette(&Palette::default()).unwrap();
        assert_eq!(theme.background, Color::Rgb(0x1e, 0x1e, 0x2e));
        assert_eq!(theme.border, Color::Rgb(0xcb, 0xa6, 0xf7));
    }

    #[test]
    fn test_bad_colour_names_field() {
        let palette = Palette {
            accent: "pink".to_string(),
            ..Palette::default()
        };
        let err = Theme::from_palette(&palette).unwrap_err();
        assert_eq!(err.field, "accent");

        for bad in ["#12345", "#gggggg", "#1234567", "123456", "red", "#ééé"] {
            assert!(parse_color("title", bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn test_hex_colour_trimmed_and_parsed() {
        assert_eq!(parse_color("title", " #FF8000 "), Ok(Color::Rgb(0xff, 0x80, 0x00)));
    }
}
