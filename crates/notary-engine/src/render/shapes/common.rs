//! Shared tiny-skia plumbing used by the vector painters.

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::coords::Rect;
use crate::paint::Color;

pub(super) fn solid_paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

pub(super) fn fill(pixmap: &mut Pixmap, path: &Path, color: Color) {
    pixmap.fill_path(path, &solid_paint(color), FillRule::Winding, Transform::identity(), None);
}

pub(super) fn stroke(pixmap: &mut Pixmap, path: &Path, width: f32, color: Color) {
    let stroke = Stroke { width, ..Stroke::default() };
    pixmap.stroke_path(path, &solid_paint(color), &stroke, Transform::identity(), None);
}

pub(super) fn rect_path(rect: Rect) -> Option<Path> {
    let r = tiny_skia::Rect::from_xywh(rect.origin.x, rect.origin.y, rect.size.x, rect.size.y)?;
    Some(PathBuilder::from_rect(r))
}

/// Offset that puts the edges of an axis-aligned stroke of `width` on pixel
/// boundaries: odd widths center on a pixel middle, even widths on a seam.
pub(super) fn grid_snap(width: f32) -> f32 {
    if (width.round() as i64) % 2 == 1 { 0.5 } else { 0.0 }
}
