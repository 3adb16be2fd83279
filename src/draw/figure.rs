//! The procedurally drawn Red Box Man.
//!
//! The figure is a fixed stack of rectangles relative to its anchor. It is
//! never scaled or rotated; later parts are painted over earlier ones.

use super::color::{BLACK, Color, HEAD_RED, YELLOW};
use super::painter::{Painter, RectF};
use crate::scene::Location;

/// Outline color shared by every part.
pub const OUTLINE_COLOR: Color = BLACK;

/// Outline stroke width in pixels.
pub const OUTLINE_WIDTH: f64 = 1.0;

pub const HEAD_WIDTH: f64 = 115.0;
pub const HEAD_HEIGHT: f64 = 88.0;
pub const EYE_WIDTH: f64 = 33.0;
pub const EYE_HEIGHT: f64 = 26.0;
pub const PUPIL_SIZE: f64 = 6.0;
pub const FOOT_SIZE: f64 = 10.0;

/// One filled-and-outlined rectangle of the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigurePart {
    pub name: &'static str,
    /// Offset and size relative to the anchor.
    pub bounds: RectF,
    pub fill: Color,
}

const fn part(name: &'static str, x: f64, y: f64, w: f64, h: f64, fill: Color) -> FigurePart {
    FigurePart {
        name,
        bounds: RectF::new(x, y, w, h),
        fill,
    }
}

/// Parts in paint order: head, eyes, pupils, mouth, body, feet.
pub const RED_BOX_MAN: [FigurePart; 10] = [
    part("head", 0.0, 0.0, HEAD_WIDTH, HEAD_HEIGHT, HEAD_RED),
    part("left eye", 15.0, 13.0, EYE_WIDTH, EYE_HEIGHT, YELLOW),
    part("right eye", 72.0, 13.0, EYE_WIDTH, EYE_HEIGHT, YELLOW),
    part("left pupil", 30.0, 22.0, PUPIL_SIZE, PUPIL_SIZE, OUTLINE_COLOR),
    part("right pupil", 87.0, 22.0, PUPIL_SIZE, PUPIL_SIZE, OUTLINE_COLOR),
    part("mouth", 22.0, 65.0, 80.0, 8.0, OUTLINE_COLOR),
    part("upper body", 30.0, 88.0, 55.0, 20.0, OUTLINE_COLOR),
    part("lower body", 34.0, 108.0, 45.0, 10.0, OUTLINE_COLOR),
    part("left foot", 30.0, 118.0, FOOT_SIZE, FOOT_SIZE, OUTLINE_COLOR),
    part("right foot", 73.0, 118.0, FOOT_SIZE, FOOT_SIZE, OUTLINE_COLOR),
];

/// Places a part's bounds at `anchor`.
pub fn part_rect(part: &FigurePart, anchor: Location) -> RectF {
    RectF::new(
        anchor.x + part.bounds.x,
        anchor.y + part.bounds.y,
        part.bounds.width,
        part.bounds.height,
    )
}

/// Draws one Red Box Man with its top-left corner at `anchor`.
pub fn render_figure<P: Painter + ?Sized>(painter: &mut P, anchor: Location) {
    for part in &RED_BOX_MAN {
        let rect = part_rect(part, anchor);
        painter.fill_rect(rect, part.fill);
        painter.stroke_rect(rect, OUTLINE_COLOR, OUTLINE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_spans_head_width_and_reaches_feet() {
        let (width, height) = RED_BOX_MAN.iter().fold((0.0, 0.0), |(w, h), part| {
            (
                f64::max(w, part.bounds.x + part.bounds.width),
                f64::max(h, part.bounds.y + part.bounds.height),
            )
        });
        assert_eq!((width, height), (HEAD_WIDTH, 118.0 + FOOT_SIZE));
    }

    #[test]
    fn pupils_sit_inside_their_eyes() {
        let inside = |inner: &FigurePart, outer: &FigurePart| {
            inner.bounds.x >= outer.bounds.x
                && inner.bounds.y >= outer.bounds.y
                && inner.bounds.x + inner.bounds.width <= outer.bounds.x + outer.bounds.width
                && inner.bounds.y + inner.bounds.height <= outer.bounds.y + outer.bounds.height
        };
        assert!(inside(&RED_BOX_MAN[3], &RED_BOX_MAN[1]));
        assert!(inside(&RED_BOX_MAN[4], &RED_BOX_MAN[2]));
    }

    #[test]
    fn part_rect_is_offset_from_anchor() {
        let mouth = &RED_BOX_MAN[5];
        assert_eq!(mouth.name, "mouth");
        assert_eq!(
            part_rect(mouth, Location::new(100.0, 50.0)),
            RectF::new(122.0, 115.0, 80.0, 8.0)
        );
    }
}
