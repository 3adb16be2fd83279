//! Rendering primitives for the Red Box Man canvas (Cairo-based).
//!
//! This module defines the drawing side of the application:
//! - [`Color`]: RGBA color representation with the figure's palette
//! - [`Surface`]: canvas geometry and the clear primitive
//! - [`Painter`]: drawing-surface capability, implemented for Cairo by [`CairoPainter`]
//! - [`render_figure`] / [`render_scene`]: the procedural figure and full redraw

pub mod color;
pub mod figure;
pub mod font;
pub mod painter;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use figure::{FigurePart, RED_BOX_MAN, render_figure};
pub use font::FontDescriptor;
pub use painter::{Painter, RectF};
pub use render::{CairoPainter, overlay_text, render_scene};
pub use surface::{Surface, SurfaceRect};
