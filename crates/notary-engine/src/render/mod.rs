//! CPU rendering subsystem.
//!
//! The rasterizer consumes a `scene` draw stream and paints it onto an
//! in-memory tiny-skia pixmap. Each shape painter lives in its own file under
//! `render::shapes`.
//!
//! Convention:
//! - geometry is in canvas pixels (top-left origin, +Y down).
//! - items paint back-to-front in `DrawList` paint order.

mod raster;
pub mod shapes;

pub use raster::Rasterizer;
