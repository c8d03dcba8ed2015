use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::coords::{Rect, Vec2};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// One glyph placed by [`FontSystem::layout_line`].
///
/// `x`/`y` is the top-left of the glyph's coverage bitmap in canvas pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PositionedGlyph {
    pub key: GlyphRasterConfig,
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading, so a `FontSystem` can be shared
/// read-only between any number of renders (including across threads).
/// Sizes are not baked in: every query takes a pixel size.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        if font.glyph_count() == 0 {
            return Err(FontLoadError("font contains no glyphs".to_string()));
        }
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} glyphs)", id, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Distance from the top of the line box to the baseline, if the font
    /// carries horizontal line metrics.
    #[must_use]
    pub fn ascent(&self, id: FontId, size: f32) -> Option<f32> {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.ascent)
    }

    /// Horizontal advance contributed by `c` when it follows `prev`
    /// (kerning included).
    ///
    /// Summing this over a string gives the same width as [`measure_text`],
    /// which lets callers grow a line one character at a time without
    /// re-measuring the whole prefix.
    #[must_use]
    pub fn advance(&self, id: FontId, prev: Option<char>, c: char, size: f32) -> f32 {
        let Some(font) = self.get(id) else {
            return 0.0;
        };
        let kern = prev
            .and_then(|p| font.horizontal_kern(p, c, size))
            .unwrap_or(0.0);
        font.metrics(c, size).advance_width + kern
    }

    /// Advance width and line height of a single line of text.
    ///
    /// Newlines are not interpreted; the text is treated as one line.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let mut prev = None;
        let mut width = 0.0f32;
        for c in text.chars() {
            width += self.advance(id, prev, c, size);
            prev = Some(c);
        }
        let height = self
            .get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map(|m| m.ascent - m.descent)
            .unwrap_or(size * 1.2);
        Vec2::new(width, height)
    }

    /// Lays out one line with its line box top-left at `origin`.
    ///
    /// Whitespace and other glyphs without coverage are omitted.
    pub fn layout_line(&self, text: &str, id: FontId, size: f32, origin: Vec2) -> Vec<PositionedGlyph> {
        let Some(font) = self.get(id) else {
            log::warn!("FontSystem: unknown FontId {id:?}");
            return Vec::new();
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            max_width: None,
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| PositionedGlyph { key: g.key, x: g.x, y: g.y, width: g.width, height: g.height })
            .collect()
    }

    /// Bounding box of the inked pixels of `text` drawn with its line box
    /// at the origin.
    ///
    /// Returns `None` for text with no visible glyphs.
    #[must_use]
    pub fn ink_bounds(&self, text: &str, id: FontId, size: f32) -> Option<Rect> {
        let glyphs = self.layout_line(text, id, size, Vec2::zero());
        let first = glyphs.first()?;
        let (mut x0, mut y0) = (first.x, first.y);
        let (mut x1, mut y1) = (first.x + first.width as f32, first.y + first.height as f32);
        for g in &glyphs[1..] {
            x0 = x0.min(g.x);
            y0 = y0.min(g.y);
            x1 = x1.max(g.x + g.width as f32);
            y1 = y1.max(g.y + g.height as f32);
        }
        Some(Rect::from_corners(Vec2::new(x0, y0), Vec2::new(x1, y1)))
    }

    /// Rasterizes one positioned glyph into an 8-bit coverage bitmap
    /// (`width * height`, row-major).
    pub(crate) fn rasterize(&self, id: FontId, glyph: &PositionedGlyph) -> Option<(usize, usize, Vec<u8>)> {
        let font = self.get(id)?;
        let (metrics, bitmap) = font.rasterize_config(glyph.key);
        if metrics.width == 0 || metrics.height == 0 {
            return None;
        }
        Some((metrics.width, metrics.height, bitmap))
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &[u8] = include_bytes!("../../../notary-certificate/tests/fixtures/DejaVuSans.ttf");

    fn loaded() -> (FontSystem, FontId) {
        let mut fonts = FontSystem::new();
        let id = fonts.load_font(FIXTURE).unwrap();
        (fonts, id)
    }

    #[test]
    fn measure_equals_summed_advances() {
        let (fonts, id) = loaded();
        let text = "AVATAR Wavy";
        let mut prev = None;
        let mut sum = 0.0;
        for c in text.chars() {
            sum += fonts.advance(id, prev, c, 28.0);
            prev = Some(c);
        }
        let measured = fonts.measure_text(text, id, 28.0);
        assert!((measured.x - sum).abs() < 1e-3);
        assert!(measured.y > 28.0);
    }

    #[test]
    fn layout_follows_origin() {
        let (fonts, id) = loaded();
        let a = fonts.layout_line("Hi", id, 26.0, Vec2::new(0.0, 0.0));
        let b = fonts.layout_line("Hi", id, 26.0, Vec2::new(100.0, 50.0));
        assert_eq!(a.len(), 2);
        assert_eq!(a.len(), b.len());
        for (ga, gb) in a.iter().zip(&b) {
            assert!((gb.x - ga.x - 100.0).abs() <= 1.0);
            assert!((gb.y - ga.y - 50.0).abs() <= 1.0);
        }
    }

    #[test]
    fn glyphs_sit_below_line_top() {
        let (fonts, id) = loaded();
        let ascent = fonts.ascent(id, 40.0).unwrap();
        let bounds = fonts.ink_bounds("H", id, 40.0).unwrap();
        assert!(bounds.origin.y >= 0.0);
        // Cap height ends on the baseline.
        assert!((bounds.max().y - ascent).abs() <= 1.5, "{bounds:?} vs ascent {ascent}");
    }

    #[test]
    fn whitespace_has_no_ink() {
        let (fonts, id) = loaded();
        assert!(fonts.ink_bounds("   ", id, 20.0).is_none());
        assert!(fonts.measure_text("   ", id, 20.0).x > 0.0);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.ascent(FontId(0), 20.0).is_none());
    }

    #[test]
    fn unknown_font_measures_zero_width() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("abc", FontId(3), 20.0);
        assert_eq!(size.x, 0.0);
        assert!(fonts.layout_line("abc", FontId(3), 20.0, Vec2::zero()).is_empty());
        assert!(fonts.ink_bounds("abc", FontId(3), 20.0).is_none());
        assert!(fonts.ascent(FontId(3), 20.0).is_none());
    }
}
