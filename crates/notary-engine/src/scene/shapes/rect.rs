use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rectangle draw payload. Either part may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, fill: Some(color), border: None }));
    }

    /// Records an unfilled rectangle outline.
    #[inline]
    pub fn push_outlined_rect(&mut self, z: ZIndex, rect: Rect, border: Border) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, fill: None, border: Some(border) }));
    }
}
