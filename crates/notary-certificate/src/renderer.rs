use chrono::{Local, NaiveDate};
use notary_engine::render::Rasterizer;

use crate::certificate::Certificate;
use crate::config::CertificateConfig;
use crate::document::Document;
use crate::error::RenderError;
use crate::fonts::CertificateFonts;
use crate::layout;
use crate::photo;

/// Renders certificates with a loaded font asset.
///
/// Loading is the only fallible step. Once constructed, every render yields
/// a complete page: photo problems are absorbed into placeholder artwork.
/// The renderer is immutable, so one instance can serve renders on many
/// threads; each call owns its own canvas.
pub struct CertificateRenderer {
    fonts: CertificateFonts,
}

impl CertificateRenderer {
    /// Loads the font asset named by `config`.
    pub fn load(config: &CertificateConfig) -> Result<Self, RenderError> {
        let fonts = CertificateFonts::load(config.font_path())?;
        log::debug!("certificate fonts loaded from {}", config.font_path().display());
        Ok(Self { fonts })
    }

    pub fn from_fonts(fonts: CertificateFonts) -> Self {
        Self { fonts }
    }

    #[inline]
    pub fn fonts(&self) -> &CertificateFonts {
        &self.fonts
    }

    /// Renders with today's local date.
    pub fn render(&self, photo: &[u8], name: &str) -> Certificate {
        self.render_on(photo, name, Local::now().date_naive())
    }

    /// Renders with an explicit date. Identical inputs give identical pixels.
    pub fn render_on(&self, photo: &[u8], name: &str, date: NaiveDate) -> Certificate {
        let photo = photo::prepare(photo, layout::PHOTO_WIDTH, layout::PHOTO_HEIGHT);

        let (mut draw_list, page) = Document::new(&self.fonts).compose(name, photo, date);

        let mut canvas = Rasterizer::new(layout::CANVAS_WIDTH, layout::CANVAS_HEIGHT, layout::BACKGROUND)
            .expect("canvas size is asserted non-zero in `layout`");
        canvas.execute(&mut draw_list, self.fonts.system());

        log::info!(
            "rendered certificate for {name:?} dated {date} ({} draw commands, photo {:?})",
            draw_list.len(),
            page.photo,
        );
        Certificate::new(canvas.into_rgb_image(), date, page)
    }
}

/// One-shot render: loads the font asset, then renders with today's date.
///
/// Font problems are reported before any drawing starts.
pub fn render_certificate(
    config: &CertificateConfig,
    photo: &[u8],
    name: &str,
) -> Result<Certificate, RenderError> {
    Ok(CertificateRenderer::load(config)?.render(photo, name))
}
