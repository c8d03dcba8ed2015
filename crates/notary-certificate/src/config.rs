use std::path::{Path, PathBuf};

/// Default font asset, resolved against the working directory.
pub const DEFAULT_FONT_PATH: &str = "simhei.ttf";

/// Renderer configuration.
///
/// The layout itself is fixed; the only injectable input is where the font
/// asset lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateConfig {
    pub font_path: PathBuf,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self { font_path: PathBuf::from(DEFAULT_FONT_PATH) }
    }
}

impl CertificateConfig {
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    #[inline]
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }
}
