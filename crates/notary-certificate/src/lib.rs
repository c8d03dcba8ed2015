//! Notary certificate renderer.
//!
//! Turns a photo and a name into a fixed 800×1130 "certificate" page:
//! ruled header, centered title, a wrapped notice paragraph, the
//! cover-cropped photo, slogans, a red seal and a dated signature.
//!
//! ```no_run
//! use notary_certificate::{CertificateConfig, CertificateRenderer};
//!
//! let renderer = CertificateRenderer::load(&CertificateConfig::default())?;
//! let photo = std::fs::read("me.png")?;
//! renderer.render(&photo, "高风亮节").save_jpeg("jiese.jpg")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod certificate;
mod config;
mod document;
mod error;
mod fonts;
mod renderer;

pub mod layout;
pub mod photo;
pub mod stamp;
pub mod wrap;

pub use certificate::{Certificate, DOWNLOAD_FILE_NAME, JPEG_QUALITY};
pub use config::{CertificateConfig, DEFAULT_FONT_PATH};
pub use document::{centered_x, date_caption, signature_caption, BodyLine, PageLayout, PhotoSlot};
pub use error::{ExportError, PhotoError, RenderError};
pub use fonts::{CertificateFonts, TextRole};
pub use renderer::{render_certificate, CertificateRenderer};
