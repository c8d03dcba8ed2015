//! Paint model shared between the scene and the rasterizer.
//!
//! Scope is deliberately narrow: the canvas is opaque 8-bit RGB, so a solid
//! straight-alpha color covers every fill, stroke and glyph in use.

pub mod color;

pub use color::Color;
