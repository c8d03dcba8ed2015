//! Seal geometry: an outlined circle with a five-pointed star inside.

use notary_engine::coords::Vec2;

use crate::layout;

/// Number of star points; the polygon has twice as many vertices.
pub const STAR_POINTS: usize = 5;

/// Derived seal geometry. Nothing here is stored: it is recomputed from the
/// layout constants on every render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StampGeometry {
    pub center: Vec2,
    pub ring_radius: f32,
    pub ring_width: f32,
    pub outer_radius: f32,
    pub inner_radius: f32,
}

impl StampGeometry {
    /// The seal as laid out on the certificate.
    pub const fn certificate() -> Self {
        Self {
            center: layout::STAMP_CENTER,
            ring_radius: layout::STAMP_RADIUS,
            ring_width: layout::STAMP_BORDER,
            outer_radius: layout::STAR_OUTER_RADIUS,
            inner_radius: layout::STAR_INNER_RADIUS,
        }
    }

    /// Star vertices in drawing order.
    ///
    /// Outer tips sit at -90° + 72°·i (the first one straight up); each is
    /// followed by an inner notch 36° further round.
    pub fn star_vertices(&self) -> [Vec2; STAR_POINTS * 2] {
        let step = 360.0 / STAR_POINTS as f32;
        let mut points = [Vec2::zero(); STAR_POINTS * 2];
        for i in 0..STAR_POINTS {
            let tip = -90.0 + step * i as f32;
            points[2 * i] = self.center.polar_offset(tip, self.outer_radius);
            points[2 * i + 1] = self.center.polar_offset(tip + step / 2.0, self.inner_radius);
        }
        points
    }
}
