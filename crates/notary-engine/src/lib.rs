//! Notary engine crate.
//!
//! This crate owns the renderer-agnostic 2D pieces used by the certificate
//! layer: geometry, colors, fonts, a recorded draw stream and a CPU
//! rasterizer that plays that stream back onto an RGB canvas.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
