//! Configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Identity shown on the card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Discord handle; shown on the card and copied to the clipboard.
    /// An empty value removes the copy entry entirely.
    #[serde(default = "default_username")]
    pub username: String,
    /// Short line shown under the owner name.
    #[serde(default)]
    pub tagline: Option<String>,
    /// GitHub account, rendered as a profile URL.
    #[serde(default = "default_github")]
    pub github: Option<String>,
    /// Personal site URL.
    #[serde(default)]
    pub website: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            tagline: None,
            github: default_github(),
            website: None,
        }
    }
}

fn default_username() -> String {
    "KenkiCZ".to_string()
}

fn default_github() -> Option<String> {
    Some("KenkiCZ".to_string())
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the banner above the card
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
    /// Capture mouse clicks on card rows
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_banner: default_show_banner(),
            mouse: default_mouse(),
        }
    }
}

fn default_show_banner() -> bool {
    true
}

fn default_mouse() -> bool {
    true
}

impl Config {
    /// Load configuration from default location.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            Self::from_file(&config_path.to_string_lossy())
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &str) -> Result<Self> {
        let expanded = expand_path(path);
        let content = std::fs::read_to_string(&expanded)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("calling-card")
            .join("config.toml")
    }
}

/// Expand ~ to home directory.
fn expand_path(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]).to_string_lossy().to_string();
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_describe_the_stock_card() {
        let config = Config::default();
        assert_eq!(config.profile.username, "KenkiCZ");
        assert_eq!(config.profile.github.as_deref(), Some("KenkiCZ"));
        assert!(config.profile.website.is_none());
        assert!(config.display.show_banner);
        assert!(config.display.mouse);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nusername = \"someone-else\"").unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.profile.username, "someone-else");
        // Unnamed fields keep their defaults
        assert_eq!(config.profile.github.as_deref(), Some("KenkiCZ"));
        assert!(config.display.show_banner);
    }

    #[test]
    fn explicitly_empty_handle_is_preserved() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[profile]\nusername = \"\"").unwrap();

        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.profile.username, "");
    }
}
