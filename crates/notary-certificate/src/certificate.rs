use std::path::Path;

use chrono::NaiveDate;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::document::PageLayout;
use crate::error::ExportError;

/// Suggested file name when the certificate is offered for download.
pub const DOWNLOAD_FILE_NAME: &str = "jiese.jpg";

/// Quality used for JPEG export.
pub const JPEG_QUALITY: u8 = 75;

/// A fully drawn certificate page.
#[derive(Debug, Clone)]
pub struct Certificate {
    image: RgbImage,
    date: NaiveDate,
    layout: PageLayout,
}

impl Certificate {
    pub(crate) fn new(image: RgbImage, date: NaiveDate, layout: PageLayout) -> Self {
        Self { image, date, layout }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The date printed on the page.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Resolved positions of the computed page elements.
    #[inline]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[inline]
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    #[inline]
    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    /// Encodes the page as a baseline JPEG.
    pub fn encode_jpeg(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
        self.image.write_with_encoder(encoder)?;
        Ok(bytes)
    }

    /// Encodes and writes the page to `path`.
    pub fn save_jpeg(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let bytes = self.encode_jpeg()?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::info!("wrote {} ({} bytes)", path.as_ref().display(), bytes.len());
        Ok(())
    }
}
