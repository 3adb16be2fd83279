//! Configuration file support for redboxman.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/redboxman/config.toml`. Settings include the window size and
//! background, the image path, and the coordinate overlay style.
//!
//! If no config file exists, an 800x600 white canvas with the overlay enabled is used.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ImageConfig, OverlayConfig, PerformanceConfig, WindowConfig};

use crate::draw::{FontDescriptor, Surface};
use crate::input::OverlaySettings;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MIN_WINDOW_SIZE: u32 = 200;
const MAX_WINDOW_SIZE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [window]
/// title = "Red Box Man Renderer"
/// width = 800
/// height = 600
/// background = "white"
///
/// [image]
/// path = "images/RedBoxMan.png"
///
/// [overlay]
/// enabled = true
/// font_family = "Arial"
/// font_size = 32.0
/// color = "black"
/// x = 10.0
/// y = 50.0
///
/// [performance]
/// buffer_count = 2
/// enable_vsync = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Window size, title, and background
    #[serde(default)]
    pub window: WindowConfig,

    /// Red Box Man bitmap location
    #[serde(default)]
    pub image: ImageConfig,

    /// Pointer-coordinate overlay
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `window.width`, `window.height`: 200 - 8192
    /// - `overlay.font_size`: 8.0 - 96.0
    /// - `overlay.x`, `overlay.y`: finite
    /// - `buffer_count`: 2 - 4
    pub fn validate_and_clamp(&mut self) {
        let size_range = MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE;
        if !size_range.contains(&self.window.width) {
            warn!(
                "Invalid window width {}, clamping to {}-{} range",
                self.window.width, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            );
            self.window.width = self.window.width.clamp(MIN_WINDOW_SIZE, MAX_WINDOW_SIZE);
        }
        if !size_range.contains(&self.window.height) {
            warn!(
                "Invalid window height {}, clamping to {}-{} range",
                self.window.height, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            );
            self.window.height = self.window.height.clamp(MIN_WINDOW_SIZE, MAX_WINDOW_SIZE);
        }

        if !self.window.background.is_valid() {
            warn!(
                "Invalid window background {:?}, falling back to white",
                self.window.background
            );
            self.window.background = WindowConfig::default().background;
        }

        if !(8.0..=96.0).contains(&self.overlay.font_size) {
            warn!(
                "Invalid overlay font_size {:.1}, clamping to 8.0-96.0 range",
                self.overlay.font_size
            );
            // NaN fails the range check but survives clamp
            self.overlay.font_size = if self.overlay.font_size.is_nan() {
                OverlayConfig::default().font_size
            } else {
                self.overlay.font_size.clamp(8.0, 96.0)
            };
        }

        if !self.overlay.x.is_finite() || !self.overlay.y.is_finite() {
            warn!(
                "Invalid overlay position ({}, {}), using default",
                self.overlay.x, self.overlay.y
            );
            let defaults = OverlayConfig::default();
            self.overlay.x = defaults.x;
            self.overlay.y = defaults.y;
        }

        if !self.overlay.color.is_valid() {
            warn!(
                "Invalid overlay color {:?}, falling back to black",
                self.overlay.color
            );
            self.overlay.color = OverlayConfig::default().color;
        }

        if self.overlay.font_family.trim().is_empty() {
            warn!("Empty overlay font_family, falling back to 'Arial'");
            self.overlay.font_family = OverlayConfig::default().font_family;
        }

        if !(2..=4).contains(&self.performance.buffer_count) {
            warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if self.image.path.trim().is_empty() {
            warn!("Empty image path, falling back to the default");
            self.image.path = ImageConfig::default().path;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/redboxman/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("redboxman");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Builds the unsized drawing surface described by `[window]`.
    pub fn surface(&self) -> Surface {
        Surface::new(self.window.background.to_color())
    }

    /// Resolves the overlay text style described by `[overlay]`.
    pub fn overlay_settings(&self) -> OverlaySettings {
        OverlaySettings {
            font: FontDescriptor::new(
                self.overlay.font_family.clone(),
                self.overlay.font_weight.clone(),
                self.overlay.font_size,
            ),
            color: self.overlay.color.to_color(),
            x: self.overlay.x,
            y: self.overlay.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, CYAN, WHITE};

    #[test]
    fn defaults_describe_white_800x600_canvas() {
        let config = Config::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.image.path, "images/RedBoxMan.png");
        assert!(config.overlay.enabled);

        let overlay = config.overlay_settings();
        assert_eq!(overlay.font.to_pango_string(), "Arial 32");
        assert_eq!((overlay.x, overlay.y), (10.0, 50.0));
        assert_eq!(overlay.color, BLACK);
        assert_eq!(config.surface().background(), WHITE);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = Config::from_toml(
            r#"
            [window]
            background = [0, 255, 255]

            [overlay]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.window.background.to_color(), CYAN);
        assert_eq!(config.window.title, "Red Box Man Renderer");
        assert!(!config.overlay.enabled);
        assert_eq!(config.overlay.font_size, 32.0);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::from_toml(
            r##"
            [window]
            width = 10
            height = 100000
            background = "#zzzzzz"

            [overlay]
            font_size = 500.0
            color = "nope"

            [performance]
            buffer_count = 9
            "##,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.window.width, MIN_WINDOW_SIZE);
        assert_eq!(config.window.height, MAX_WINDOW_SIZE);
        assert_eq!(config.window.background.to_color(), WHITE);
        assert_eq!(config.overlay.font_size, 96.0);
        assert_eq!(config.overlay.color.to_color(), BLACK);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn load_from_reports_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[window\nwidth = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[image]\npath = \"assets/man.png\"\n[overlay]\nfont_size = 2.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.image.path, "assets/man.png");
        assert_eq!(config.overlay.font_size, 8.0);
    }

    #[test]
    fn schema_names_every_section() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["window", "image", "overlay", "performance"] {
            assert!(properties.contains_key(section), "missing {section}");
        }
    }
}
