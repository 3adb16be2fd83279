//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a name/hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "white"
///
/// # Hex color
/// background = "#DD0000"
///
/// # Custom RGB color (0-255 per component)
/// background = [0, 255, 255]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, yellow, black, white, cyan, transparent) or `#RRGGBB`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Whether the specification names a color we can resolve.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{CYAN, HEAD_RED};

    #[test]
    fn rgb_and_hex_resolve_to_same_color() {
        assert_eq!(ColorSpec::Rgb([0xDD, 0, 0]).to_color(), HEAD_RED);
        assert_eq!(ColorSpec::Name("#dd0000".to_string()).to_color(), HEAD_RED);
        assert_eq!(ColorSpec::Name("cyan".to_string()).to_color(), CYAN);
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        let spec = ColorSpec::Name("chartreuse-ish".to_string());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color(), BLACK);
    }
}
