//! RGBA color type and the palette used by the figure and the canvas.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use redboxman::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(Color::from_hex("#FF0000"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string into an opaque color.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Looks up a named color (case-insensitive), or parses a hex string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "red" => Some(RED),
            "box-red" | "boxred" => Some(HEAD_RED),
            "yellow" => Some(YELLOW),
            "black" => Some(BLACK),
            "white" => Some(WHITE),
            "cyan" => Some(CYAN),
            "transparent" => Some(TRANSPARENT),
            other => Self::from_hex(other),
        }
    }
}

/// Pure red (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Red Box Man head color (#DD0000)
pub const HEAD_RED: Color = Color::from_rgb8(0xDD, 0x00, 0x00);

/// Eye color (#FFFF00)
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);

/// Outline, pupil, and body color (#000000)
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Default canvas background
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Cyan, the JavaFX canvas style color
pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Fully transparent
pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
