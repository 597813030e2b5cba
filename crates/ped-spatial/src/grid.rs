//! `NeighborhoodSearch` — uniform-grid radius queries over agent positions.
//!
//! # Why this exists
//!
//! The operational models need "all agents within `r` of me" for every agent
//! every step.  Brute force is O(N²); the grid makes it O(N + hits): each
//! agent lands in exactly one cell, and a radius query scans the query
//! point's cell plus its 8 neighbors.
//!
//! # Correctness condition
//!
//! No false negatives requires `radius <= cell_size` — then anything within
//! `radius` of a point in cell C lies inside the 3×3 block around C.  The
//! simulation builder enforces this against the largest profile interaction
//! radius before the first step; the query also debug-asserts it.
//!
//! The grid is rebuilt from scratch each step from current positions and is
//! read-only for the remainder of the step.  Entries are `(AgentId, Point)`
//! pairs so queries never need access to agent storage, and ids whose agent
//! was removed earlier in the same step are simply skipped by callers.

use rustc_hash::FxHashMap;

use ped_core::{AgentId, Point};

/// Grid-relative cell coordinate.
type Cell = (i32, i32);

/// A uniform grid over agent positions supporting radius queries.
pub struct NeighborhoodSearch {
    cell_size: f64,
    cells: FxHashMap<Cell, Vec<(AgentId, Point)>>,
}

impl NeighborhoodSearch {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: FxHashMap::default(),
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    #[inline]
    fn cell_of(&self, p: Point) -> Cell {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }

    /// Rebuild the grid from current agent positions.  O(N).
    ///
    /// An empty iterator yields an empty grid; queries then return nothing.
    pub fn update(&mut self, positions: impl Iterator<Item = (AgentId, Point)>) {
        self.cells.clear();
        for (id, pos) in positions {
            self.cells.entry(self.cell_of(pos)).or_default().push((id, pos));
        }
    }

    /// All agents whose position lies within `radius` of `p`, in ascending
    /// `AgentId` order.
    ///
    /// Includes an agent located exactly at `p` — callers querying around
    /// their own position must filter out their own id.
    pub fn query(&self, p: Point, radius: f64) -> Vec<AgentId> {
        debug_assert!(
            radius <= self.cell_size,
            "query radius {radius} exceeds cell size {} — false negatives possible",
            self.cell_size
        );
        let (cx, cy) = self.cell_of(p);
        let radius_sq = radius * radius;

        let mut hits = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let Some(cell) = self.cells.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &(id, pos) in cell {
                    if (pos - p).length_sq() <= radius_sq {
                        hits.push(id);
                    }
                }
            }
        }
        // Cell iteration order is hash-map order; sort so force accumulation
        // downstream is independent of hasher state.
        hits.sort_unstable();
        hits
    }

    /// Number of occupied cells (diagnostics).
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
