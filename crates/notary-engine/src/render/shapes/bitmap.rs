use tiny_skia::Pixmap;

use crate::scene::shapes::ImageCmd;

/// Copies an opaque RGB bitmap onto the pixmap, clipped to its bounds.
pub fn paint(pixmap: &mut Pixmap, cmd: &ImageCmd) -> bool {
    let width = pixmap.width() as i64;
    let height = pixmap.height() as i64;
    let (iw, ih) = cmd.pixels.dimensions();
    if iw == 0 || ih == 0 {
        return false;
    }

    let data = pixmap.data_mut();
    for (sx, sy, px) in cmd.pixels.enumerate_pixels() {
        let x = cmd.x as i64 + sx as i64;
        let y = cmd.y as i64 + sy as i64;
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }
        let i = ((y * width + x) * 4) as usize;
        data[i..i + 3].copy_from_slice(&px.0);
        data[i + 3] = 255;
    }
    true
}
