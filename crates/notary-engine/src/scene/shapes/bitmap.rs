use image::RgbImage;

use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Opaque RGB bitmap copied 1:1 onto the canvas.
///
/// `x`/`y` are whole pixels; no resampling happens at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub x: i32,
    pub y: i32,
    pub pixels: RgbImage,
}

impl DrawList {
    /// Records an image paste with its top-left corner at (`x`, `y`).
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, x: i32, y: i32, pixels: RgbImage) {
        self.push(z, DrawCmd::Image(ImageCmd { x, y, pixels }));
    }
}
