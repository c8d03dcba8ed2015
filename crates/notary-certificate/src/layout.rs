//! Fixed page layout: canvas size, palette, copy and coordinates.
//!
//! Every position is the top-left of a line box or shape in canvas pixels.

use notary_engine::coords::{Rect, Vec2};
use notary_engine::paint::Color;

/// Canvas size in pixels. Both sides must stay non-zero: the renderer
/// allocates the canvas from these without a fallback.
pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 1130;
const _: () = assert!(CANVAS_WIDTH > 0 && CANVAS_HEIGHT > 0);

pub const BACKGROUND: Color = Color::WHITE;
pub const ACCENT: Color = Color::rgb(200, 20, 20);
pub const INK: Color = Color::BLACK;

// ── font sizes (px) ───────────────────────────────────────────────────────

pub const TITLE_SIZE: f32 = 65.0;
pub const SUBTITLE_SIZE: f32 = 32.0;
pub const BODY_SIZE: f32 = 28.0;
pub const SLOGAN_SIZE: f32 = 45.0;
pub const SIGNATURE_SIZE: f32 = 26.0;
pub const STAMP_TEXT_SIZE: f32 = 20.0;

// ── rules ─────────────────────────────────────────────────────────────────

/// Horizontal rule spanning the page between the side margins.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rule {
    pub y: f32,
    pub width: f32,
    pub color: Color,
}

pub const RULE_MARGIN: f32 = 50.0;

/// Double header rule (thick over thin) and the footer rule.
pub const RULES: [Rule; 3] = [
    Rule { y: 110.0, width: 5.0, color: ACCENT },
    Rule { y: 120.0, width: 2.0, color: ACCENT },
    Rule { y: CANVAS_HEIGHT as f32 - 50.0, width: 3.0, color: ACCENT },
];

// ── heading ───────────────────────────────────────────────────────────────

pub const TITLE: &str = "戒 色 公 证 办 事 处";
pub const TITLE_Y: f32 = 30.0;

pub const SUBTITLE: &str = "关于本人“戒导”的重要通知";
pub const SUBTITLE_Y: f32 = 160.0;

// ── body ──────────────────────────────────────────────────────────────────

pub const BODY_MARGIN: f32 = 80.0;
pub const GREETING: &str = "各位亲朋好友：";
pub const GREETING_Y: f32 = 230.0;
/// Gap between the greeting and the first paragraph line.
pub const GREETING_GAP: f32 = 50.0;
pub const BODY_LINE_HEIGHT: f32 = 45.0;
pub const BODY_TEXT: &str = "        我承认我有色情成瘾的问题，自奖励以来，严重损害了我的身心健康，浪费了我的时间和精力，影响了我的学习和工作，今后，我将以此为戒，洗心革面，痛改前非，做到：";

/// Lines must stay strictly narrower than this.
pub const fn body_max_width() -> f32 {
    CANVAS_WIDTH as f32 - 2.0 * BODY_MARGIN
}

// ── photo ─────────────────────────────────────────────────────────────────

pub const PHOTO_WIDTH: u32 = 350;
pub const PHOTO_HEIGHT: u32 = 450;
pub const PHOTO_X: i32 = 100;
pub const PHOTO_Y: i32 = 480;

pub const fn photo_box() -> Rect {
    Rect::new(PHOTO_X as f32, PHOTO_Y as f32, PHOTO_WIDTH as f32, PHOTO_HEIGHT as f32)
}

pub const PLACEHOLDER_BORDER: f32 = 2.0;
pub const PLACEHOLDER_TEXT: &str = "图片加载失败";
pub const PLACEHOLDER_TEXT_AT: Vec2 = Vec2::new(150.0, 600.0);

// ── slogans ───────────────────────────────────────────────────────────────

pub const SLOGANS: [&str; 3] = ["严 于 律 己", "提 升 自 我", "奉 献 社 会"];
pub const SLOGAN_X: f32 = 480.0;
pub const SLOGAN_Y: f32 = 550.0;
pub const SLOGAN_SPACING: f32 = 100.0;

// ── stamp ─────────────────────────────────────────────────────────────────

pub const STAMP_CENTER: Vec2 = Vec2::new(630.0, 920.0);
pub const STAMP_RADIUS: f32 = 90.0;
pub const STAMP_BORDER: f32 = 4.0;
pub const STAR_OUTER_RADIUS: f32 = 25.0;
pub const STAR_INNER_RADIUS: f32 = 10.0;

pub const STAMP_TOP_CAPTION: &str = "公 证 办";
pub const STAMP_TOP_CAPTION_AT: Vec2 = Vec2::new(STAMP_CENTER.x - 40.0, STAMP_CENTER.y - 70.0);
pub const STAMP_BOTTOM_CAPTION: &str = "业务专用章";
pub const STAMP_BOTTOM_CAPTION_AT: Vec2 = Vec2::new(STAMP_CENTER.x - 40.0, STAMP_CENTER.y + 50.0);

// ── signature ─────────────────────────────────────────────────────────────

pub const SIGNATURE_LABEL: &str = "戒导人：";
pub const SIGNATURE_AT: Vec2 = Vec2::new(520.0, 880.0);
pub const DATE_AT: Vec2 = Vec2::new(520.0, 930.0);
