use tiny_skia::{PathBuilder, Pixmap};

use crate::coords::Vec2;
use crate::scene::shapes::LineCmd;

use super::common::{grid_snap, stroke};

/// Strokes a line segment. Horizontal and vertical segments are snapped so
/// integer coordinates produce solid, unblurred rows or columns.
pub fn paint(pixmap: &mut Pixmap, cmd: &LineCmd) -> bool {
    if !(cmd.from.is_finite() && cmd.to.is_finite()) || cmd.width <= 0.0 {
        return false;
    }

    let snap = grid_snap(cmd.width);
    let (from, to) = if cmd.from.y == cmd.to.y {
        (cmd.from + Vec2::new(0.0, snap), cmd.to + Vec2::new(0.0, snap))
    } else if cmd.from.x == cmd.to.x {
        (cmd.from + Vec2::new(snap, 0.0), cmd.to + Vec2::new(snap, 0.0))
    } else {
        (cmd.from, cmd.to)
    };

    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    let Some(path) = pb.finish() else { return false };

    stroke(pixmap, &path, cmd.width, cmd.color);
    true
}
