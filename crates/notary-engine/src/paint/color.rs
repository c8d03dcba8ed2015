/// Straight-alpha sRGB color, one byte per channel.
///
/// Invariant:
/// - channels are *not* premultiplied; conversion happens at the
///   rasterizer boundary (`to_skia`, glyph blending).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Source-over blend of `self` at `coverage` (0..=255) onto a
    /// premultiplied RGBA destination pixel.
    #[inline]
    pub fn blend_onto_premul(self, dst: &mut [u8], coverage: u8) {
        let sa = (self.a as u32 * coverage as u32 + 127) / 255;
        if sa == 0 {
            return;
        }
        let inv = 255 - sa;
        let src = [self.r, self.g, self.b];
        for (d, s) in dst.iter_mut().take(3).zip(src) {
            *d = ((s as u32 * sa + *d as u32 * inv + 127) / 255) as u8;
        }
        dst[3] = (sa + (dst[3] as u32 * inv + 127) / 255).min(255) as u8;
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
