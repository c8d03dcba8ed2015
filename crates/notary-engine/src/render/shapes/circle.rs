use tiny_skia::{PathBuilder, Pixmap};

use crate::scene::shapes::CircleCmd;

use super::common::stroke;

/// Outlines a circle. The border occupies the ring `[radius - width, radius]`.
pub fn paint(pixmap: &mut Pixmap, cmd: &CircleCmd) -> bool {
    if !cmd.center.is_finite() || !cmd.radius.is_finite() || cmd.radius <= 0.0 {
        return false;
    }

    let width = cmd.border.width.min(cmd.radius);
    if width <= 0.0 {
        return false;
    }
    let mid = cmd.radius - width * 0.5;
    let Some(path) = PathBuilder::from_circle(cmd.center.x, cmd.center.y, mid.max(f32::EPSILON)) else {
        return false;
    };
    stroke(pixmap, &path, width, cmd.border.color);
    true
}
