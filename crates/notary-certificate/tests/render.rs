use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use image::{ImageFormat, Rgb, RgbImage};
use notary_certificate::layout::{self, CANVAS_HEIGHT, CANVAS_WIDTH};
use notary_certificate::{
    render_certificate, CertificateConfig, CertificateRenderer, PhotoSlot, RenderError, TextRole,
};

fn fixture_font() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf")
}

fn config() -> CertificateConfig {
    CertificateConfig::default().with_font_path(fixture_font())
}

fn renderer() -> CertificateRenderer {
    CertificateRenderer::load(&config()).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

fn solid_jpeg(w: u32, h: u32, color: [u8; 3]) -> Vec<u8> {
    encode(&RgbImage::from_pixel(w, h, Rgb(color)), ImageFormat::Jpeg)
}

fn near(p: &Rgb<u8>, expected: [u8; 3], tol: u8) -> bool {
    p.0.iter().zip(expected).all(|(a, b)| a.abs_diff(b) <= tol)
}

fn is_white(p: &Rgb<u8>) -> bool {
    p.0 == [255, 255, 255]
}

fn is_dark(p: &Rgb<u8>) -> bool {
    p.0.iter().all(|&c| c < 80)
}

fn is_accent(p: &Rgb<u8>) -> bool {
    p[0] > 120 && p[0] as i32 - p[1] as i32 > 60 && p[0] as i32 - p[2] as i32 > 60
}

// ── font asset ────────────────────────────────────────────────────────────

#[test]
fn missing_font_is_reported_before_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = CertificateConfig::default().with_font_path(dir.path().join("simhei.ttf"));
    let photo = solid_jpeg(10, 10, [0, 0, 0]);

    let err = render_certificate(&cfg, &photo, "Test User").unwrap_err();
    match &err {
        RenderError::FontAssetMissing { path } => assert!(path.ends_with("simhei.ttf")),
        other => panic!("expected FontAssetMissing, got {other:?}"),
    }
    assert!(err.to_string().contains("simhei.ttf"));
}

#[test]
fn unparseable_font_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ttf");
    std::fs::write(&path, b"this is not a truetype file").unwrap();

    let err = CertificateRenderer::load(&CertificateConfig::default().with_font_path(&path))
        .err()
        .unwrap();
    assert!(matches!(err, RenderError::FontLoad { .. }), "{err:?}");
}

#[test]
fn loaded_renderer_can_be_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CertificateRenderer>();

    let r = renderer();
    let photo = solid_jpeg(20, 20, [90, 90, 90]);
    let date = day(2026, 10, 14);
    let (a, b) = std::thread::scope(|s| {
        let a = s.spawn(|| r.render_on(&photo, "A", date));
        let b = s.spawn(|| r.render_on(&photo, "A", date));
        (a.join().unwrap(), b.join().unwrap())
    });
    assert_eq!(a.as_rgb(), b.as_rgb());
}

// ── canvas ────────────────────────────────────────────────────────────────

#[test]
fn canvas_has_fixed_size() {
    let cert = renderer().render(&solid_jpeg(64, 64, [10, 20, 30]), "Test User");
    assert_eq!((cert.width(), cert.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn same_inputs_same_day_are_pixel_identical() {
    let r = renderer();
    let photo = solid_jpeg(300, 500, [200, 180, 40]);
    let a = r.render_on(&photo, "Test User", day(2026, 10, 14));
    let b = r.render_on(&photo, "Test User", day(2026, 10, 14));
    assert_eq!(a.as_rgb(), b.as_rgb());
}

#[test]
fn only_the_date_caption_changes_between_days() {
    let r = renderer();
    let photo = solid_jpeg(300, 500, [200, 180, 40]);
    let a = r.render_on(&photo, "Test User", day(2026, 10, 14));
    let b = r.render_on(&photo, "Test User", day(2027, 3, 7));
    assert_ne!(a.as_rgb(), b.as_rgb());

    // Generous box around the date line box at (520, 930).
    let in_date_region = |x: u32, y: u32| x >= 510 && (925..975).contains(&y);
    for (x, y, pa) in a.as_rgb().enumerate_pixels() {
        if !in_date_region(x, y) {
            assert_eq!(pa, b.as_rgb().get_pixel(x, y), "pixel ({x}, {y}) differs");
        }
    }
    assert_eq!(b.layout().date_text, "2027 年 3 月 7 日");
}

// ── photo ─────────────────────────────────────────────────────────────────

#[test]
fn solid_photo_fills_the_photo_box() {
    let color = [40, 120, 200];
    let cert = renderer().render_on(&solid_jpeg(200, 100, color), "Test User", day(2026, 10, 14));
    assert_eq!(cert.layout().photo, PhotoSlot::Placed);

    let img = cert.as_rgb();
    for (x, y) in [(275, 705), (101, 481), (449, 929), (400, 500)] {
        let p = img.get_pixel(x, y);
        assert!(near(p, color, 10), "({x}, {y}) = {p:?}");
    }
    assert!(is_white(img.get_pixel(99, 705)));
    assert!(is_white(img.get_pixel(275, 931)));
}

#[test]
fn png_photo_is_accepted() {
    let png = encode(&RgbImage::from_pixel(30, 90, Rgb([0, 160, 0])), ImageFormat::Png);
    let cert = renderer().render_on(&png, "x", day(2026, 1, 1));
    assert_eq!(cert.layout().photo, PhotoSlot::Placed);
    assert!(near(cert.as_rgb().get_pixel(275, 705), [0, 160, 0], 3));
}

#[test]
fn extreme_aspect_photos_still_render() {
    let renderer = renderer();
    for (w, h) in [(1, 20000), (20000, 1)] {
        let png = encode(&RgbImage::from_pixel(w, h, Rgb([30, 90, 150])), ImageFormat::Png);
        let cert = renderer.render_on(&png, "Test User", day(2026, 10, 14));
        assert_eq!(cert.layout().photo, PhotoSlot::Placed, "{w}×{h}");
        assert!(near(cert.as_rgb().get_pixel(275, 705), [30, 90, 150], 3), "{w}×{h}");
        assert_rest_of_page_is_drawn(cert.as_rgb());
    }
}

#[test]
fn corrupt_photo_falls_back_to_placeholder() {
    let cert = renderer().render_on(b"\xff\xd8 definitely not a jpeg", "Test User", day(2026, 10, 14));
    assert_eq!(cert.layout().photo, PhotoSlot::Placeholder);
    assert_eq!((cert.width(), cert.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));

    let img = cert.as_rgb();
    // 2px outline on every side of [100, 480]..[450, 930].
    for (x, y) in [(100, 800), (101, 800), (449, 800), (450, 800), (275, 480), (275, 930)] {
        assert!(is_dark(img.get_pixel(x, y)), "outline at ({x}, {y}) = {:?}", img.get_pixel(x, y));
    }
    assert!(is_white(img.get_pixel(275, 850)));
    assert!(is_white(img.get_pixel(99, 800)));

    // Placeholder caption is inked near (150, 600).
    let caption_ink = (600..640)
        .flat_map(|y| (150..260).map(move |x| (x, y)))
        .any(|(x, y)| is_dark(img.get_pixel(x, y)));
    assert!(caption_ink);

    assert_rest_of_page_is_drawn(img);
}

fn assert_rest_of_page_is_drawn(img: &RgbImage) {
    let inked = |xs: std::ops::Range<u32>, ys: std::ops::Range<u32>, pred: fn(&Rgb<u8>) -> bool| {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| pred(img.get_pixel(x, y)))
    };
    assert!(inked(50..750, 30..105, is_accent), "title");
    assert!(inked(50..750, 160..200, is_dark), "subtitle");
    assert!(inked(480..780, 550..600, is_dark), "slogan");
    assert!(inked(520..780, 880..910, is_dark), "signature");
    assert!(is_accent(img.get_pixel(400, 110)), "header rule");
    assert!(is_accent(img.get_pixel(400, 1080)), "footer rule");
    assert!(is_accent(img.get_pixel(630, 920)), "star");
    assert!(is_accent(img.get_pixel(630 - 88, 920)), "stamp ring");
    assert!(is_white(img.get_pixel(630 - 60, 920)), "stamp interior");
}

#[test]
fn good_photo_page_has_all_decorations() {
    let cert = renderer().render_on(&solid_jpeg(200, 100, [250, 250, 250]), "Test User", day(2026, 10, 14));
    assert_rest_of_page_is_drawn(cert.as_rgb());
}

// ── text layout ───────────────────────────────────────────────────────────

#[test]
fn body_wraps_into_lines_narrower_than_the_column() {
    let r = renderer();
    let cert = r.render_on(&solid_jpeg(8, 8, [0, 0, 0]), "n", day(2026, 10, 14));
    let lines = &cert.layout().body_lines;

    let full = r.fonts().text_width(layout::BODY_TEXT, TextRole::Body);
    assert!(full >= layout::body_max_width(), "fixture text should overflow one line");
    assert!(lines.len() >= 2);

    for (i, line) in lines.iter().enumerate() {
        let w = r.fonts().text_width(&line.text, TextRole::Body);
        assert!(w < layout::body_max_width(), "line {i} is {w}px: {:?}", line.text);
        let expected_y = layout::GREETING_Y + layout::GREETING_GAP + i as f32 * layout::BODY_LINE_HEIGHT;
        assert_eq!(line.y, expected_y);
    }
    let joined: String = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(joined, layout::BODY_TEXT);
}

#[test]
fn heading_is_centered_on_measured_width() {
    let r = renderer();
    let cert = r.render_on(&solid_jpeg(8, 8, [0, 0, 0]), "n", day(2026, 10, 14));
    let page = cert.layout();

    let w = CANVAS_WIDTH as f32;
    let title_w = r.fonts().ink_width(layout::TITLE, TextRole::Title);
    let subtitle_w = r.fonts().ink_width(layout::SUBTITLE, TextRole::Subtitle);
    assert!(title_w > 0.0 && subtitle_w > 0.0);
    assert!((page.title_x - (w - title_w) / 2.0).abs() <= 1.0);
    assert!((page.subtitle_x - (w - subtitle_w) / 2.0).abs() <= 1.0);

    // Ink starts at the centered pen position plus the first glyph's bearing.
    let bearing = r
        .fonts()
        .system()
        .ink_bounds(layout::TITLE, r.fonts().face(), TextRole::Title.size())
        .unwrap()
        .origin
        .x;
    let img = cert.as_rgb();
    let first = (0..CANVAS_WIDTH)
        .find(|&x| (30..105).any(|y| is_accent(img.get_pixel(x, y))))
        .unwrap();
    let expected = page.title_x + bearing;
    assert!((first as f32 - expected).abs() <= 2.0, "title ink at {first}, expected {expected}");
}

// ── export ────────────────────────────────────────────────────────────────

#[test]
fn end_to_end_jpeg_export() {
    let dir = tempfile::tempdir().unwrap();
    let cert = render_certificate(&config(), &solid_jpeg(200, 100, [30, 60, 90]), "Test User").unwrap();

    let bytes = cert.encode_jpeg().unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 1130));

    let out = dir.path().join(notary_certificate::DOWNLOAD_FILE_NAME);
    cert.save_jpeg(&out).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), bytes);
}
