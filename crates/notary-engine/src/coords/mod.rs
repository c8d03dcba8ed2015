//! Coordinate and geometry types shared across the scene and the rasterizer.
//!
//! Canonical canvas space:
//! - Pixels
//! - Origin top-left
//! - +X right, +Y down (angles therefore turn clockwise on screen)

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
