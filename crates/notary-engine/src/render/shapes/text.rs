use tiny_skia::Pixmap;

use crate::scene::shapes::TextCmd;
use crate::text::FontSystem;

/// Rasterizes each glyph through fontdue and blends its coverage into the
/// pixmap with `cmd.color`.
///
/// Glyph bitmaps are rasterized per call; a render touches each glyph only a
/// handful of times, so no atlas or cache is kept.
pub fn paint(pixmap: &mut Pixmap, cmd: &TextCmd, fonts: &FontSystem) -> bool {
    if !cmd.origin.is_finite() || cmd.size <= 0.0 {
        return false;
    }
    if cmd.text.is_empty() {
        return true;
    }

    let width = pixmap.width() as i64;
    let height = pixmap.height() as i64;
    let data = pixmap.data_mut();

    for glyph in fonts.layout_line(&cmd.text, cmd.font, cmd.size, cmd.origin) {
        let Some((gw, gh, coverage)) = fonts.rasterize(cmd.font, &glyph) else { continue };
        let gx = glyph.x.round() as i64;
        let gy = glyph.y.round() as i64;

        for row in 0..gh {
            let y = gy + row as i64;
            if y < 0 || y >= height {
                continue;
            }
            for col in 0..gw {
                let x = gx + col as i64;
                if x < 0 || x >= width {
                    continue;
                }
                let cov = coverage[row * gw + col];
                if cov == 0 {
                    continue;
                }
                let i = ((y * width + x) * 4) as usize;
                cmd.color.blend_onto_premul(&mut data[i..i + 4], cov);
            }
        }
    }

    true
}
