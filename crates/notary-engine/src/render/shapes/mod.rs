//! Shape painters, one per `DrawCmd` variant.
//!
//! Each painter returns `false` when the command could not be painted
//! (degenerate geometry); the rasterizer logs and moves on.

mod common;

pub mod bitmap;
pub mod circle;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod text;
