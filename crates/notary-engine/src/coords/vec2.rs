use core::ops::{Add, Sub};

/// 2D point or offset in canvas pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Point at `radius` from `self` in direction `degrees`.
    ///
    /// 0° points along +X; because +Y is down, -90° points straight up.
    #[inline]
    pub fn polar_offset(self, degrees: f32, radius: f32) -> Vec2 {
        let rad = degrees.to_radians();
        Vec2::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn polar_offset_minus_ninety_points_up() {
        let p = Vec2::new(10.0, 10.0).polar_offset(-90.0, 5.0);
        assert!(close(p, Vec2::new(10.0, 5.0)), "{p:?}");
    }

    #[test]
    fn polar_offset_zero_points_right() {
        let p = Vec2::zero().polar_offset(0.0, 3.0);
        assert!(close(p, Vec2::new(3.0, 0.0)), "{p:?}");
    }

    #[test]
    fn distance_matches_radius() {
        let c = Vec2::new(630.0, 920.0);
        for deg in [-90.0, -54.0, 0.0, 126.0, 270.0] {
            assert!((c.distance(c.polar_offset(deg, 25.0)) - 25.0).abs() < 1e-3);
        }
    }
}
