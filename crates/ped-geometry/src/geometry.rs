//! The wall set and its spatial acceleration structure.
//!
//! An R-tree (via `rstar`) over wall segments answers "which walls are within
//! `r` metres of this agent" without scanning every segment.  For the small
//! geometries in tests a linear scan would do; for building-scale wall counts
//! the tree keeps the obstacle-repulsion term out of the profile.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ped_core::Point;

use crate::LineSegment;

// ── R-tree segment entry ──────────────────────────────────────────────────────

/// Entry stored in the R-tree: a wall segment plus its index into
/// `Geometry::segments`, which is what queries return.
#[derive(Clone)]
struct SegmentEntry {
    segment: LineSegment,
    index: usize,
}

impl RTreeObject for SegmentEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.segment.p1.x, self.segment.p1.y],
            [self.segment.p2.x, self.segment.p2.y],
        )
    }
}

impl PointDistance for SegmentEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let d = self.segment.distance_to(Point::new(point[0], point[1]));
        d * d
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// The static line obstacles of a scenario.
///
/// Built once via [`GeometryBuilder`], then shared read-only across the whole
/// run (and across worker threads in the parallel force phase).
pub struct Geometry {
    segments: Vec<LineSegment>,
    tree: RTree<SegmentEntry>,
}

impl Geometry {
    /// A geometry with no obstacles (open plane).
    pub fn empty() -> Self {
        GeometryBuilder::new().build()
    }

    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// All wall segments with any point within `radius` of `p`.
    ///
    /// Returned in ascending insertion order so force accumulation over the
    /// result is deterministic.
    pub fn segments_near(&self, p: Point, radius: f64) -> Vec<&LineSegment> {
        let mut hits: Vec<&SegmentEntry> = self
            .tree
            .locate_within_distance([p.x, p.y], radius * radius)
            .collect();
        hits.sort_by_key(|e| e.index);
        hits.into_iter().map(|e| &self.segments[e.index]).collect()
    }

    /// Distance from `p` to the nearest wall, or `None` if there are no walls.
    pub fn distance_to_nearest_wall(&self, p: Point) -> Option<f64> {
        self.tree
            .nearest_neighbor(&[p.x, p.y])
            .map(|e| e.segment.distance_to(p))
    }
}

// ── GeometryBuilder ───────────────────────────────────────────────────────────

/// Collects wall segments and bulk-loads the R-tree once at `build()`.
#[derive(Default)]
pub struct GeometryBuilder {
    segments: Vec<LineSegment>,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one wall segment.
    pub fn add_wall(&mut self, p1: Point, p2: Point) -> &mut Self {
        self.segments.push(LineSegment::new(p1, p2));
        self
    }

    /// Add a chain of walls through consecutive points.
    pub fn add_wall_chain(&mut self, points: &[Point]) -> &mut Self {
        for pair in points.windows(2) {
            self.add_wall(pair[0], pair[1]);
        }
        self
    }

    pub fn build(self) -> Geometry {
        let entries: Vec<SegmentEntry> = self
            .segments
            .iter()
            .enumerate()
            .map(|(index, &segment)| SegmentEntry { segment, index })
            .collect();
        Geometry {
            segments: self.segments,
            tree: RTree::bulk_load(entries),
        }
    }
}
