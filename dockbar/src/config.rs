//! TOML configuration for the panel.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use dockbar_core::models::Size;
use serde::{Deserialize, Serialize};
use xdg::BaseDirectories;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Height of the panel strip in pixels.
    pub panel_height: i32,
    /// Cap on the space a single strip will take.
    pub entry_width: i32,
    pub entry_height: i32,
    /// Cosmetic gap between strips.
    pub entry_gutter: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
    pub background_color: String,
    pub text_color: String,
    pub highlight_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_height: 30,
            entry_width: 256,
            entry_height: 256,
            entry_gutter: 4,
            font_path: Some(PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf")),
            font_size: 13.0,
            background_color: "#1d1f21".to_string(),
            text_color: "#ffffff".to_string(),
            highlight_color: "#ffffff".to_string(),
        }
    }
}

#[must_use]
pub fn load(path: Option<&Path>) -> Config {
    load_from_file(path)
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if the
/// user doesn't have permissions to place config.toml, or if config.toml
/// cannot be read or parsed. It can also error from inability to save
/// config.toml (if it is the first time running dockbar).
fn load_from_file(path: Option<&Path>) -> Result<Config> {
    tracing::debug!("Loading config file");

    let config_file = match path {
        Some(path) => path.to_path_buf(),
        None => BaseDirectories::with_prefix("dockbar")?.place_config_file("config.toml")?,
    };

    if config_file.exists() {
        tracing::debug!("Config file '{}' found.", config_file.to_string_lossy());
        let contents = fs::read_to_string(config_file)?;
        Ok(toml::from_str(&contents)?)
    } else {
        tracing::debug!("Config file not found. Writing the default config file.");
        let config = Config::default();
        fs::write(&config_file, toml::to_string_pretty(&config)?)?;
        Ok(config)
    }
}

/// Parse a "#rrggbb" string into an X pixel value.
/// Unparseable colors fall back to white.
fn parse_color(hex: &str) -> u32 {
    u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0x00ff_ffff)
}

impl dockbar_core::Config for Config {
    fn panel_height(&self) -> i32 {
        self.panel_height
    }

    fn entry_desired_size(&self) -> Size {
        Size::new(self.entry_width, self.entry_height)
    }

    fn entry_gutter(&self) -> i32 {
        self.entry_gutter
    }

    fn font_path(&self) -> Option<PathBuf> {
        self.font_path.clone()
    }

    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn background_color(&self) -> u32 {
        parse_color(&self.background_color)
    }

    fn text_color(&self) -> u32 {
        parse_color(&self.text_color)
    }

    fn highlight_color(&self) -> u32 {
        parse_color(&self.highlight_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_file_means_the_default_config() {
        let config: Config = toml::from_str("").expect("parse empty config");
        assert_eq!(config.panel_height, 30);
        assert_eq!(config.entry_width, 256);
        assert_eq!(config.entry_gutter, 4);
    }

    #[test]
    fn partial_configs_keep_the_remaining_defaults() {
        let config: Config =
            toml::from_str("panel_height = 42\ntext_color = \"#aabbcc\"").expect("parse config");
        assert_eq!(config.panel_height, 42);
        assert_eq!(config.text_color, "#aabbcc");
        assert_eq!(config.entry_width, 256);
    }

    #[test]
    fn the_default_config_round_trips_through_toml() {
        let written = toml::to_string_pretty(&Config::default()).expect("serialize config");
        let read: Config = toml::from_str(&written).expect("parse config");
        assert_eq!(read.panel_height, Config::default().panel_height);
        assert_eq!(read.background_color, Config::default().background_color);
    }

    #[test]
    fn colors_parse_from_hex_strings() {
        assert_eq!(parse_color("#1d1f21"), 0x001d_1f21);
        assert_eq!(parse_color("ffffff"), 0x00ff_ffff);
        assert_eq!(parse_color("not a color"), 0x00ff_ffff);
    }
}
