//! 2-D Cartesian vector type and the small amount of linear algebra the
//! force models need.
//!
//! `Point` is `f64` throughout: the operational models integrate forces over
//! thousands of steps and single precision would drift visibly in the
//! determinism tests.  Units are metres.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2-D point / vector in metres.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Lengths below this are treated as zero when normalizing.
const NORMALIZATION_EPS: f64 = 1e-9;

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
    /// Unit vector along +x, the fallback orientation for degenerate inputs.
    pub const UNIT_X: Point = Point { x: 1.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other - self).length()
    }

    #[inline]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the direction of `self`, or `None` if `self` is too
    /// short to carry a direction.  Callers decide the fallback — the
    /// tactical corner-cut skips its adjustment, the models fall back to the
    /// agent's current orientation.
    #[inline]
    pub fn normalized(self) -> Option<Point> {
        let len = self.length();
        if len < NORMALIZATION_EPS {
            None
        } else {
            Some(Point::new(self.x / len, self.y / len))
        }
    }

    /// `self` rotated counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotated(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Signed angle from `self` to `other` in `(-π, π]`.  Both inputs should
    /// be non-zero; zero vectors yield an angle of 0.
    #[inline]
    pub fn angle_to(self, other: Point) -> f64 {
        let cross = self.x * other.y - self.y * other.x;
        cross.atan2(self.dot(other))
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
