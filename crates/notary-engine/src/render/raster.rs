use image::{Rgb, RgbImage};
use tiny_skia::Pixmap;

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontSystem;

use super::shapes;

/// Fixed-size canvas that draw lists are played back onto.
///
/// The canvas is allocated once, filled with the background color, and then
/// mutated in place by [`execute`](Rasterizer::execute). It stays opaque as
/// long as the background is opaque.
pub struct Rasterizer {
    pixmap: Pixmap,
}

impl Rasterizer {
    /// Allocates a `width × height` canvas filled with `background`.
    ///
    /// Returns `None` for zero or overflowing dimensions.
    pub fn new(width: u32, height: u32, background: Color) -> Option<Self> {
        let mut pixmap = Pixmap::new(width, height)?;
        pixmap.fill(background.to_skia());
        Some(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Paints every item of `draw_list` in paint order.
    ///
    /// Malformed commands (non-finite geometry, empty paths, unknown fonts)
    /// are skipped with a warning; they never abort the remaining items.
    pub fn execute(&mut self, draw_list: &mut DrawList, fonts: &FontSystem) {
        let mut painted = 0usize;
        for item in draw_list.iter_in_paint_order() {
            let ok = match &item.cmd {
                DrawCmd::Line(cmd) => shapes::line::paint(&mut self.pixmap, cmd),
                DrawCmd::Rect(cmd) => shapes::rect::paint(&mut self.pixmap, cmd),
                DrawCmd::Circle(cmd) => shapes::circle::paint(&mut self.pixmap, cmd),
                DrawCmd::Polygon(cmd) => shapes::polygon::paint(&mut self.pixmap, cmd),
                DrawCmd::Text(cmd) => shapes::text::paint(&mut self.pixmap, cmd, fonts),
                DrawCmd::Image(cmd) => shapes::bitmap::paint(&mut self.pixmap, cmd),
            };
            if ok {
                painted += 1;
            } else {
                log::warn!("Rasterizer: skipped {} command {:?}", item.cmd.kind(), item.key);
            }
        }
        log::trace!("Rasterizer: painted {painted} commands");
    }

    /// Straight-alpha color at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Drops the alpha channel and returns the canvas as an RGB image.
    pub fn into_rgb_image(self) -> RgbImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgb([c.red(), c.green(), c.blue()])
        })
    }
}
