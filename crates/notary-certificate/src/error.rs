//! Error types for certificate rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal render errors. Both abort before any canvas is allocated; re-running
/// after fixing the font asset is always safe.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The configured font file does not exist.
    #[error("未找到字体文件 {}，请确保该文件已上传！", .path.display())]
    FontAssetMissing { path: PathBuf },

    /// The font file exists but could not be read or parsed.
    #[error("字体加载失败 ({}): {reason}", .path.display())]
    FontLoad { path: PathBuf, reason: String },
}

/// Reasons the photo could not be placed. Recovered locally by drawing the
/// placeholder box; never escapes the renderer.
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("photo could not be decoded: {0}")]
    Decode(#[from] image::ImageError),

    #[error("photo has no pixels ({width}×{height})")]
    Empty { width: u32, height: u32 },
}

/// Errors while serializing a finished certificate.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JPEG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("could not write certificate: {0}")]
    Io(#[from] std::io::Error),
}
