use tiny_skia::{PathBuilder, Pixmap};

use crate::scene::shapes::PolygonCmd;

use super::common::fill;

pub fn paint(pixmap: &mut Pixmap, cmd: &PolygonCmd) -> bool {
    let [first, rest @ ..] = cmd.points.as_slice() else { return false };
    if rest.len() < 2 || !cmd.points.iter().all(|p| p.is_finite()) {
        return false;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    let Some(path) = pb.finish() else { return false };

    fill(pixmap, &path, cmd.fill);
    true
}
