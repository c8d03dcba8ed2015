use std::path::Path;

use notary_engine::text::{FontId, FontSystem};

use crate::error::RenderError;
use crate::layout;

/// The six type styles on the page. All share one face; only the pixel
/// size differs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextRole {
    Title,
    Subtitle,
    Body,
    Slogan,
    Signature,
    Stamp,
}

impl TextRole {
    pub const ALL: [TextRole; 6] = [
        TextRole::Title,
        TextRole::Subtitle,
        TextRole::Body,
        TextRole::Slogan,
        TextRole::Signature,
        TextRole::Stamp,
    ];

    pub const fn size(self) -> f32 {
        match self {
            TextRole::Title => layout::TITLE_SIZE,
            TextRole::Subtitle => layout::SUBTITLE_SIZE,
            TextRole::Body => layout::BODY_SIZE,
            TextRole::Slogan => layout::SLOGAN_SIZE,
            TextRole::Signature => layout::SIGNATURE_SIZE,
            TextRole::Stamp => layout::STAMP_TEXT_SIZE,
        }
    }
}

/// Loaded font asset plus the handle every text command refers to.
///
/// Read-only after [`load`](Self::load); safe to share across renders.
pub struct CertificateFonts {
    system: FontSystem,
    face: FontId,
}

impl CertificateFonts {
    /// Reads and parses the font at `path`.
    ///
    /// A missing file is reported separately from an unreadable or
    /// unparseable one so the caller can tell the user which to fix.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        if !path.exists() {
            log::error!("font asset missing: {}", path.display());
            return Err(RenderError::FontAssetMissing { path: path.to_path_buf() });
        }

        let bytes = std::fs::read(path).map_err(|e| {
            log::error!("font asset unreadable: {}: {e}", path.display());
            RenderError::FontLoad { path: path.to_path_buf(), reason: e.to_string() }
        })?;

        Self::from_bytes(&bytes).map_err(|reason| {
            log::error!("font asset rejected: {}: {reason}", path.display());
            RenderError::FontLoad { path: path.to_path_buf(), reason }
        })
    }

    /// Parses an in-memory font. Every role must have usable line metrics.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, String> {
        let mut system = FontSystem::new();
        let face = system.load_font(bytes).map_err(|e| e.to_string())?;

        for role in TextRole::ALL {
            if !system.ascent(face, role.size()).is_some_and(|a| a > 0.0) {
                return Err(format!("no usable line metrics at {}px", role.size()));
            }
        }

        Ok(Self { system, face })
    }

    #[inline]
    pub fn system(&self) -> &FontSystem {
        &self.system
    }

    #[inline]
    pub fn face(&self) -> FontId {
        self.face
    }

    /// Advance width of `text` in `role`.
    pub fn text_width(&self, text: &str, role: TextRole) -> f32 {
        self.system.measure_text(text, self.face, role.size()).x
    }

    /// Width of the inked pixels of `text`, the quantity centering uses.
    pub fn ink_width(&self, text: &str, role: TextRole) -> f32 {
        self.system
            .ink_bounds(text, self.face, role.size())
            .map(|r| r.width())
            .unwrap_or(0.0)
    }
}
