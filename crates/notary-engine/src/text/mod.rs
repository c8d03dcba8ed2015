//! Font loading, measurement and glyph layout.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, PositionedGlyph};
