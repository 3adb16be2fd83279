//! Canvas geometry and the clear primitive.

use super::color::{Color, WHITE};
use super::painter::Painter;

/// Bounding box of the surface in the coordinate space pointer events use.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The drawing surface: pixel size, placement, and background.
///
/// Pixel dimensions always equal the layout size reported by the host, so
/// one buffer pixel maps to one surface pixel.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    left: f64,
    top: f64,
    background: Color,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new(WHITE)
    }
}

impl Surface {
    /// Creates an unsized surface that clears to `background`.
    pub fn new(background: Color) -> Self {
        Self {
            width: 0,
            height: 0,
            left: 0.0,
            top: 0.0,
            background,
        }
    }

    /// Binds the surface to the host's layout size.
    ///
    /// Returns `true` if the pixel dimensions changed.
    pub fn initialize(&mut self, layout_width: u32, layout_height: u32) -> bool {
        let changed = self.width != layout_width || self.height != layout_height;
        self.width = layout_width;
        self.height = layout_height;
        changed
    }

    /// Moves the surface origin within the pointer coordinate space.
    ///
    /// Wayland pointer events are surface-local, so the backend leaves this at (0, 0).
    pub fn set_origin(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn bounds(&self) -> SurfaceRect {
        SurfaceRect {
            left: self.left,
            top: self.top,
            width: self.width as f64,
            height: self.height as f64,
        }
    }

    /// Erases everything on the surface.
    pub fn clear<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_reports_size_changes() {
        let mut surface = Surface::default();
        assert!(surface.initialize(800, 600));
        assert!(!surface.initialize(800, 600));
        assert!(surface.initialize(1024, 600));
        assert_eq!((surface.width(), surface.height()), (1024, 600));
    }

    #[test]
    fn bounds_follow_origin_and_size() {
        let mut surface = Surface::default();
        surface.initialize(640, 480);
        surface.set_origin(8.0, 16.0);

        assert_eq!(
            surface.bounds(),
            SurfaceRect {
                left: 8.0,
                top: 16.0,
                width: 640.0,
                height: 480.0,
            }
        );
    }
}
