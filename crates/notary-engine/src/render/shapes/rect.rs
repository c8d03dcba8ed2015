use tiny_skia::Pixmap;

use crate::scene::shapes::RectCmd;

use super::common::{fill, rect_path, stroke};

/// Fills and/or outlines a rectangle. The border is kept inside `cmd.rect`.
pub fn paint(pixmap: &mut Pixmap, cmd: &RectCmd) -> bool {
    if !cmd.rect.is_finite() || cmd.rect.is_empty() {
        return false;
    }

    if let Some(color) = cmd.fill {
        let Some(path) = rect_path(cmd.rect) else { return false };
        fill(pixmap, &path, color);
    }

    if let Some(border) = &cmd.border {
        if border.width <= 0.0 {
            return false;
        }
        let Some(path) = rect_path(cmd.rect.inset(border.width * 0.5)) else { return false };
        stroke(pixmap, &path, border.width, border.color);
    }

    true
}
