//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Window (surface element) settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Initial width in pixels (valid range: 200 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Initial height in pixels (valid range: 200 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color the canvas is cleared to
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Bitmap asset settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImageConfig {
    /// Path of the Red Box Man PNG; relative paths resolve against the working directory
    #[serde(default = "default_image_path")]
    pub path: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            path: default_image_path(),
        }
    }
}

/// Pointer-coordinate overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverlayConfig {
    /// Draw the coordinates of the last click at startup (toggle with `m`)
    #[serde(default = "default_overlay_enabled")]
    pub enabled: bool,

    /// Font family name (e.g., "Arial", "Sans")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold")
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font size in points (valid range: 8.0 - 96.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Outline color of the text
    #[serde(default = "default_overlay_color")]
    pub color: ColorSpec,

    /// Baseline start X in pixels (fixed; does not follow the pointer)
    #[serde(default = "default_overlay_x")]
    pub x: f64,

    /// Baseline Y in pixels
    #[serde(default = "default_overlay_y")]
    pub y: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: default_overlay_enabled(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_size: default_font_size(),
            color: default_overlay_color(),
            x: default_overlay_x(),
            y: default_overlay_y(),
        }
    }
}

/// Performance tuning options.
///
/// These settings control rendering performance and smoothness. Most users
/// won't need to change these from their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceConfig {
    /// Number of buffers for buffering (valid range: 2 - 4)
    #[serde(default = "default_buffer_count")]
    pub buffer_count: u32,

    /// Enable vsync frame synchronization to prevent tearing
    #[serde(default = "default_enable_vsync")]
    pub enable_vsync: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            buffer_count: default_buffer_count(),
            enable_vsync: default_enable_vsync(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_title() -> String {
    "Red Box Man Renderer".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_image_path() -> String {
    "images/RedBoxMan.png".to_string()
}

fn default_overlay_enabled() -> bool {
    true
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    32.0
}

fn default_overlay_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_overlay_x() -> f64 {
    10.0
}

fn default_overlay_y() -> f64 {
    50.0
}

fn default_buffer_count() -> u32 {
    2
}

fn default_enable_vsync() -> bool {
    true
}
