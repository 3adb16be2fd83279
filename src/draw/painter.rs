//! Drawing-surface capability used by the renderer.
//!
//! The figure and scene renderers only talk to a [`Painter`], so they can be
//! driven by Cairo in the window and by a recording painter in tests.

use super::color::Color;
use super::font::FontDescriptor;
use crate::assets::Bitmap;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Primitive operations the renderer needs from a drawing surface.
pub trait Painter {
    /// Erases the whole surface to `background`.
    fn clear(&mut self, background: Color);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Outlines `rect` with a stroke of `line_width` pixels.
    fn stroke_rect(&mut self, rect: RectF, color: Color, line_width: f64);

    /// Draws `image` unscaled with its top-left corner at (`x`, `y`).
    fn draw_image(&mut self, image: &Bitmap, x: f64, y: f64);

    /// Strokes the outline of `text` with its baseline starting at (`x`, `y`).
    fn stroke_text(&mut self, text: &str, x: f64, y: f64, font: &FontDescriptor, color: Color);
}
