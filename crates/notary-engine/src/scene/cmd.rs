use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::bitmap::ImageCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - add a matching painter under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Rect(RectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
    Text(TextCmd),
    Image(ImageCmd),
}

impl DrawCmd {
    /// Short name used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Line(_) => "line",
            DrawCmd::Rect(_) => "rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Text(_) => "text",
            DrawCmd::Image(_) => "image",
        }
    }
}
