//! Scene rendering and the Cairo-backed painter.

use super::color::Color;
use super::figure::render_figure;
use super::font::FontDescriptor;
use super::painter::{Painter, RectF};
use crate::assets::Bitmap;
use crate::input::InputState;

/// Formats pointer coordinates the way the overlay shows them: `(x,y)`.
///
/// Whole-pixel coordinates print without a fractional part.
pub fn overlay_text(x: f64, y: f64) -> String {
    format!("({},{})", x, y)
}

/// Redraws the whole canvas from `state`.
///
/// Order: clear, drawn figures, bitmap stamps, coordinate overlay. Within
/// each sequence figures are painted in placement order (first = bottom).
/// After a reset click the surface is only cleared.
pub fn render_scene<P: Painter + ?Sized>(painter: &mut P, state: &InputState) {
    state.surface.clear(painter);
    if state.is_blank() {
        return;
    }

    for location in state.scene.shape_placements() {
        render_figure(painter, *location);
    }

    // Stamps are only recorded once the bitmap is ready
    if let Some(bitmap) = state.asset.bitmap() {
        for location in state.scene.image_placements() {
            painter.draw_image(bitmap, location.x, location.y);
        }
    }

    if state.pointer.overlay_enabled {
        let overlay = &state.overlay;
        painter.stroke_text(
            &overlay_text(state.pointer.x, state.pointer.y),
            overlay.x,
            overlay.y,
            &overlay.font,
            overlay.color,
        );
    }
}

/// [`Painter`] over a Cairo context.
///
/// Cairo reports drawing errors through the context status; they are
/// ignored here so a failed primitive leaves the rest of the frame intact.
pub struct CairoPainter<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoPainter<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }

    fn set_color(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl Painter for CairoPainter<'_> {
    fn clear(&mut self, background: Color) {
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Source);
        self.set_color(background);
        let _ = self.ctx.paint();
        self.ctx.restore().ok();
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.set_color(color);
        self.ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        let _ = self.ctx.fill();
    }

    fn stroke_rect(&mut self, rect: RectF, color: Color, line_width: f64) {
        self.set_color(color);
        self.ctx.set_line_width(line_width);
        self.ctx.set_line_join(cairo::LineJoin::Miter);
        self.ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        let _ = self.ctx.stroke();
    }

    fn draw_image(&mut self, image: &Bitmap, x: f64, y: f64) {
        self.ctx.save().ok();
        if self.ctx.set_source_surface(image.surface(), x, y).is_ok() {
            let _ = self.ctx.paint();
        }
        self.ctx.restore().ok();
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, font: &FontDescriptor, color: Color) {
        // Save context state to prevent settings from leaking to other drawing operations
        self.ctx.save().ok();
        self.ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        // Pango positions layouts from the top-left; (x, y) is the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        self.ctx.move_to(x, y - baseline);
        pangocairo::functions::layout_path(self.ctx, &layout);

        self.set_color(color);
        self.ctx.set_line_width(1.0);
        self.ctx.set_line_join(cairo::LineJoin::Round);
        let _ = self.ctx.stroke();

        self.ctx.restore().ok();
    }
}
