//! Page composition: turns the fixed layout plus per-render inputs into a
//! draw list.

use chrono::{Datelike, NaiveDate};
use image::RgbImage;
use notary_engine::coords::{Rect, Vec2};
use notary_engine::paint::Color;
use notary_engine::scene::{Border, DrawList, ZIndex};

use crate::error::PhotoError;
use crate::fonts::{CertificateFonts, TextRole};
use crate::layout;
use crate::stamp::StampGeometry;
use crate::wrap::wrap_greedy;

/// Everything sits on one layer; paint order is push order.
const Z_PAGE: ZIndex = ZIndex::BACKGROUND;

/// Left edge that horizontally centers a run of `text_width` on the canvas.
#[inline]
pub fn centered_x(canvas_width: f32, text_width: f32) -> f32 {
    (canvas_width - text_width) / 2.0
}

/// `"<year> 年 <month> 月 <day> 日"`, fields without zero padding.
pub fn date_caption(date: NaiveDate) -> String {
    format!("{} 年 {} 月 {} 日", date.year(), date.month(), date.day())
}

/// Signature line. The name is used verbatim; long names simply run off
/// the right edge.
pub fn signature_caption(name: &str) -> String {
    format!("{}{name}", layout::SIGNATURE_LABEL)
}

/// How the photo slot ended up being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlot {
    Placed,
    Placeholder,
}

/// One wrapped paragraph line and the y of its line box.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyLine {
    pub text: String,
    pub y: f32,
}

/// Resolved positions of the computed parts of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub title_x: f32,
    pub subtitle_x: f32,
    pub body_lines: Vec<BodyLine>,
    pub photo: PhotoSlot,
    pub date_text: String,
}

/// Builds the full page for one render.
pub(crate) struct Document<'a> {
    fonts: &'a CertificateFonts,
    list: DrawList,
}

impl<'a> Document<'a> {
    pub(crate) fn new(fonts: &'a CertificateFonts) -> Self {
        Self { fonts, list: DrawList::new() }
    }

    /// Records every element in page order and returns the stream together
    /// with the resolved layout.
    pub(crate) fn compose(
        mut self,
        name: &str,
        photo: Result<RgbImage, PhotoError>,
        date: NaiveDate,
    ) -> (DrawList, PageLayout) {
        self.rules();
        let (title_x, subtitle_x) = self.heading();
        let body_lines = self.body();
        let photo = self.photo(photo);
        self.slogans();
        self.stamp();
        let date_text = self.signature(name, date);

        let layout = PageLayout { title_x, subtitle_x, body_lines, photo, date_text };
        (self.list, layout)
    }

    fn text(&mut self, role: TextRole, color: Color, origin: Vec2, text: impl Into<String>) {
        self.list
            .push_text(Z_PAGE, text, self.fonts.face(), role.size(), color, origin);
    }

    fn rules(&mut self) {
        let right = layout::CANVAS_WIDTH as f32 - layout::RULE_MARGIN;
        for rule in layout::RULES {
            self.list.push_line(
                Z_PAGE,
                Vec2::new(layout::RULE_MARGIN, rule.y),
                Vec2::new(right, rule.y),
                rule.width,
                rule.color,
            );
        }
    }

    fn heading(&mut self) -> (f32, f32) {
        let canvas_w = layout::CANVAS_WIDTH as f32;

        let title_x = centered_x(canvas_w, self.fonts.ink_width(layout::TITLE, TextRole::Title));
        self.text(TextRole::Title, layout::ACCENT, Vec2::new(title_x, layout::TITLE_Y), layout::TITLE);

        let subtitle_x =
            centered_x(canvas_w, self.fonts.ink_width(layout::SUBTITLE, TextRole::Subtitle));
        self.text(
            TextRole::Subtitle,
            layout::INK,
            Vec2::new(subtitle_x, layout::SUBTITLE_Y),
            layout::SUBTITLE,
        );

        log::debug!("heading centered at x={title_x:.1} / x={subtitle_x:.1}");
        (title_x, subtitle_x)
    }

    fn body(&mut self) -> Vec<BodyLine> {
        let x = layout::BODY_MARGIN;
        let mut y = layout::GREETING_Y;
        self.text(TextRole::Body, layout::INK, Vec2::new(x, y), layout::GREETING);
        y += layout::GREETING_GAP;

        let lines = wrap_body(self.fonts, layout::BODY_TEXT);
        let mut placed = Vec::with_capacity(lines.len());
        for line in lines {
            self.text(TextRole::Body, layout::INK, Vec2::new(x, y), line.as_str());
            placed.push(BodyLine { text: line, y });
            y += layout::BODY_LINE_HEIGHT;
        }

        log::debug!("body wrapped into {} lines", placed.len());
        placed
    }

    fn photo(&mut self, photo: Result<RgbImage, PhotoError>) -> PhotoSlot {
        match photo {
            Ok(pixels) => {
                self.list.push_image(Z_PAGE, layout::PHOTO_X, layout::PHOTO_Y, pixels);
                PhotoSlot::Placed
            }
            Err(err) => {
                log::warn!("photo unusable, drawing placeholder: {err}");
                self.list.push_outlined_rect(
                    Z_PAGE,
                    placeholder_box(),
                    Border::new(layout::PLACEHOLDER_BORDER, layout::INK),
                );
                self.text(
                    TextRole::Body,
                    layout::INK,
                    layout::PLACEHOLDER_TEXT_AT,
                    layout::PLACEHOLDER_TEXT,
                );
                PhotoSlot::Placeholder
            }
        }
    }

    fn slogans(&mut self) {
        for (i, slogan) in layout::SLOGANS.iter().enumerate() {
            let y = layout::SLOGAN_Y + i as f32 * layout::SLOGAN_SPACING;
            self.text(TextRole::Slogan, layout::INK, Vec2::new(layout::SLOGAN_X, y), *slogan);
        }
    }

    fn stamp(&mut self) {
        let stamp = StampGeometry::certificate();
        self.list.push_ring(
            Z_PAGE,
            stamp.center,
            stamp.ring_radius,
            Border::new(stamp.ring_width, layout::ACCENT),
        );
        self.list
            .push_filled_polygon(Z_PAGE, stamp.star_vertices().to_vec(), layout::ACCENT);
        self.text(
            TextRole::Stamp,
            layout::ACCENT,
            layout::STAMP_TOP_CAPTION_AT,
            layout::STAMP_TOP_CAPTION,
        );
        self.text(
            TextRole::Stamp,
            layout::ACCENT,
            layout::STAMP_BOTTOM_CAPTION_AT,
            layout::STAMP_BOTTOM_CAPTION,
        );
    }

    fn signature(&mut self, name: &str, date: NaiveDate) -> String {
        self.text(TextRole::Signature, layout::INK, layout::SIGNATURE_AT, signature_caption(name));
        let date_text = date_caption(date);
        self.text(TextRole::Signature, layout::INK, layout::DATE_AT, date_text.as_str());
        date_text
    }
}

/// Wraps `text` at the body font against the page's text column.
pub(crate) fn wrap_body(fonts: &CertificateFonts, text: &str) -> Vec<String> {
    let system = fonts.system();
    let face = fonts.face();
    let size = TextRole::Body.size();
    wrap_greedy(text, layout::body_max_width(), |prev, c| system.advance(face, prev, c, size))
}

/// The placeholder outline covers the photo box including its far edges.
fn placeholder_box() -> Rect {
    let b = layout::photo_box();
    Rect::new(b.origin.x, b.origin.y, b.width() + 1.0, b.height() + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_caption_has_no_padding() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(date_caption(d), "2026 年 3 月 7 日");
    }

    #[test]
    fn date_caption_two_digit_fields() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(date_caption(d), "2025 年 12 月 31 日");
    }

    #[test]
    fn signature_keeps_name_verbatim() {
        assert_eq!(signature_caption("Test User"), "戒导人：Test User");
        assert_eq!(signature_caption(""), "戒导人：");
    }

    #[test]
    fn centered_x_splits_remaining_space() {
        assert_eq!(centered_x(800.0, 500.0), 150.0);
        assert_eq!(centered_x(800.0, 0.0), 400.0);
        assert_eq!(centered_x(800.0, 900.0), -50.0);
    }

    #[test]
    fn placeholder_box_spans_inclusive_corners() {
        let r = placeholder_box();
        assert_eq!(r.min(), Vec2::new(100.0, 480.0));
        assert_eq!(r.max(), Vec2::new(451.0, 931.0));
    }
}
