pub(crate) mod bitmap;
pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rect;
pub(crate) mod text;

pub use bitmap::ImageCmd;
pub use circle::CircleCmd;
pub use line::LineCmd;
pub use polygon::PolygonCmd;
pub use rect::RectCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Outline stroked along the inside of a shape's edge.
///
/// The stroke never grows the shape: a 4px border on a radius-90 circle
/// covers the ring between radius 86 and 90.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
