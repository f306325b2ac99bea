//! Theme service for loading wallust colors.

use anyhow::Result;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// The subset of a wallust JSON palette the theme reads.
#[derive(Debug, Clone, Deserialize)]
struct WallustColors {
    background: String,
    foreground: String,
    color1: String,
    color4: String,
    color6: String,
    color8: String,
}

/// Semantic colors used across the UI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    /// Focused borders, the banner, and the popover frame.
    pub accent: Color,
    /// Secondary text and unfocused borders.
    pub muted: Color,
    /// Selection emphasis.
    pub highlight: Color,
    pub error: Color,
}

impl Theme {
    /// Load theme from wallust colors file, falling back to defaults.
    pub fn load() -> Self {
        let path = Self::colors_path();
        if path.exists() {
            Self::from_file(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Get the path to wallust colors file.
    fn colors_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("wallust")
            .join("colors-original.json")
    }

    /// Load theme from a specific file.
    fn from_file(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let colors: WallustColors = serde_json::from_str(&content)?;
        Ok(Self {
            background: parse_hex(&colors.background),
            foreground: parse_hex(&colors.foreground),
            accent: parse_hex(&colors.color6),
            muted: parse_hex(&colors.color8),
            highlight: parse_hex(&colors.color4),
            error: parse_hex(&colors.color1),
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            highlight: Color::Blue,
            error: Color::Red,
        }
    }
}

/// Parse a hex color string like "#RRGGBB" to a ratatui Color.
fn parse_hex(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_hex_accepts_rrggbb() {
        assert_eq!(parse_hex("#00ffff"), Color::Rgb(0, 255, 255));
        assert_eq!(parse_hex("101010"), Color::Rgb(16, 16, 16));
    }

    #[test]
    fn parse_hex_falls_back_on_malformed_input() {
        assert_eq!(parse_hex("#fff"), Color::White);
        assert_eq!(parse_hex(""), Color::White);
    }

    #[test]
    fn wallust_palette_maps_to_semantic_colors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"background":"#101010","foreground":"#e0e0e0","cursor":"#ffffff",
                 "color1":"#ff0000","color4":"#0000ff","color6":"#00ffff","color8":"#808080"}}"##
        )
        .unwrap();

        let theme = Theme::from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
        assert_eq!(theme.muted, Color::Rgb(128, 128, 128));
        assert_eq!(theme.error, Color::Rgb(255, 0, 0));
    }
}
