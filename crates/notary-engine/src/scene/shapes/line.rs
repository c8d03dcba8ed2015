use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment stroked with butt caps.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color }));
    }
}
