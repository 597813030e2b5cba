//! Wall segments and point-to-segment distance.

use ped_core::Point;

/// A line obstacle (a wall piece) between two endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance_to(self.p2)
    }

    /// The point on the segment closest to `p`.
    ///
    /// Projects `p` onto the carrier line and clamps the projection parameter
    /// to `[0, 1]`.  Degenerate segments (both endpoints equal) return `p1`.
    pub fn nearest_point(&self, p: Point) -> Point {
        let dir = self.p2 - self.p1;
        let len_sq = dir.length_sq();
        if len_sq == 0.0 {
            return self.p1;
        }
        let t = ((p - self.p1).dot(dir) / len_sq).clamp(0.0, 1.0);
        self.p1 + dir * t
    }

    /// Shortest distance from `p` to any point on the segment.
    #[inline]
    pub fn distance_to(&self, p: Point) -> f64 {
        p.distance_to(self.nearest_point(p))
    }
}

impl std::fmt::Display for LineSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} — {}]", self.p1, self.p2)
    }
}
