use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Closed polygon filled with the non-zero winding rule.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub fill: Color,
}

impl DrawList {
    /// Records a filled polygon. The path is closed implicitly.
    #[inline]
    pub fn push_filled_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, fill: Color) {
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, fill }));
    }
}
