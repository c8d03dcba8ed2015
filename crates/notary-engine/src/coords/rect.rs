use super::Vec2;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from two opposite corners, in any order.
    #[inline]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        Rect::new(x0, y0, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Shrinks every edge inward by `amount`. Collapses to zero size rather
    /// than going negative.
    #[inline]
    pub fn inset(self, amount: f32) -> Rect {
        let w = (self.size.x - 2.0 * amount).max(0.0);
        let h = (self.size.y - 2.0 * amount).max(0.0);
        Rect::new(self.origin.x + amount, self.origin.y + amount, w, h)
    }
}
