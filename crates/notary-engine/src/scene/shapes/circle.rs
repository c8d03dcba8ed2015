use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Unfilled circle outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub border: Border,
}

impl DrawList {
    /// Records a ring whose outer edge sits at `radius`.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, border: Border) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, border }));
    }
}
