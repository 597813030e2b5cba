//! Named polygonal regions: strategic goal targets and exit regions.

use std::collections::BTreeMap;

use ped_core::{AreaId, Point};

use crate::{GeometryError, GeometryResult};

/// What role an area plays for the decision systems.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaKind {
    /// A journey target.  Reaching it advances the agent's journey.
    Goal,
    /// A terminal region.  Agents inside it are removed by the exit system.
    Exit,
}

/// All areas of a scenario, keyed by id.
///
/// `BTreeMap` rather than a hash map so iteration order (exit checks, debug
/// dumps) is deterministic.
pub type AreaMap = BTreeMap<AreaId, Area>;

/// A named polygonal region of the environment.
///
/// Owned by the scenario, read-only for the pipeline.  The polygon is a
/// simple (non-self-intersecting) closed ring given as its vertex list; the
/// closing edge from last back to first vertex is implicit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub id: AreaId,
    pub kind: AreaKind,
    polygon: Vec<Point>,
}

impl Area {
    /// Build an area from a polygon ring.
    ///
    /// # Errors
    ///
    /// `DegeneratePolygon` if fewer than 3 vertices are given.
    pub fn new(id: AreaId, kind: AreaKind, polygon: Vec<Point>) -> GeometryResult<Self> {
        if polygon.len() < 3 {
            return Err(GeometryError::DegeneratePolygon { id, vertices: polygon.len() });
        }
        Ok(Self { id, kind, polygon })
    }

    /// Axis-aligned rectangle helper — the common case in scenario setup.
    pub fn rectangle(id: AreaId, kind: AreaKind, min: Point, max: Point) -> GeometryResult<Self> {
        Self::new(
            id,
            kind,
            vec![
                min,
                Point::new(max.x, min.y),
                max,
                Point::new(min.x, max.y),
            ],
        )
    }

    #[inline]
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// Even-odd ray-cast containment test.
    ///
    /// Points exactly on a vertical-crossing edge count as inside often
    /// enough for the exit semantics we need (an agent standing on the
    /// boundary of an exit is leaving either way); callers needing strict
    /// boundary classification should not use polygons this coarse.
    pub fn contains(&self, p: Point) -> bool {
        let mut inside = false;
        let n = self.polygon.len();
        let mut j = n - 1;
        for i in 0..n {
            let a = self.polygon[i];
            let b = self.polygon[j];
            if (a.y > p.y) != (b.y > p.y) {
                let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Vertex centroid — the anchor point journeys navigate toward.
    ///
    /// Good enough for the convex goal/exit rectangles scenarios use; this is
    /// not the area centroid of an arbitrary polygon.
    pub fn centroid(&self) -> Point {
        let mut sum = Point::ZERO;
        for &v in &self.polygon {
            sum += v;
        }
        sum * (1.0 / self.polygon.len() as f64)
    }
}
