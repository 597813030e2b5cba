//! The agent body shape.

use ped_core::Point;

use crate::{AgentError, AgentResult};

/// An ellipse with semi-axis `a` along the agent's orientation and semi-axis
/// `b` lateral to it.  The orientation itself lives on the agent; the shape
/// only carries the two extents.
///
/// Invariant: both semi-axes are strictly positive (enforced at
/// construction).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ellipse {
    semi_axis_a: f64,
    semi_axis_b: f64,
}

impl Ellipse {
    /// # Errors
    ///
    /// `InvalidEllipse` unless both semi-axes are strictly positive.
    pub fn new(semi_axis_a: f64, semi_axis_b: f64) -> AgentResult<Self> {
        if semi_axis_a <= 0.0 || semi_axis_b <= 0.0 {
            return Err(AgentError::InvalidEllipse { semi_axis_a, semi_axis_b });
        }
        Ok(Self { semi_axis_a, semi_axis_b })
    }

    /// Semi-axis along the direction of motion.
    #[inline]
    pub fn semi_axis_a(&self) -> f64 {
        self.semi_axis_a
    }

    /// Lateral semi-axis.
    #[inline]
    pub fn semi_axis_b(&self) -> f64 {
        self.semi_axis_b
    }

    /// Radius of the ellipse in world direction `dir` (a unit vector), given
    /// the body orientation `orientation` (a unit vector):
    ///
    ///   r(θ) = a·b / √((b·cos θ)² + (a·sin θ)²)
    ///
    /// where θ is the angle between `orientation` and `dir`.  Used by the
    /// force models to turn a center-to-center distance into a border-to-
    /// border effective distance.
    pub fn radius_toward(&self, orientation: Point, dir: Point) -> f64 {
        let cos = orientation.dot(dir);
        let cos_sq = (cos * cos).min(1.0);
        let sin_sq = 1.0 - cos_sq;
        let a = self.semi_axis_a;
        let b = self.semi_axis_b;
        a * b / (b * b * cos_sq + a * a * sin_sq).sqrt()
    }
}
