//! Routing engines — from a position and a destination to an ordered
//! waypoint sequence.
//!
//! # Contract
//!
//! `compute_waypoints(from, to)` returns an ordered sequence of at least two
//! points whose first element equals `from`; the remaining points form a
//! locally valid path toward `to`.  The tactical layer treats anything
//! shorter as a contract violation and aborts the step, so engines must
//! return an error rather than a truncated sequence when they cannot route.
//!
//! # Pluggability
//!
//! The simulation calls routing via the [`RoutingEngine`] trait, so
//! applications can swap in navigation meshes or visibility graphs without
//! touching the pipeline.  Two engines ship here:
//!
//! - [`DirectRoutingEngine`] — straight line, for open geometries.
//! - [`GraphRoutingEngine`] — Dijkstra over a hand-built waypoint graph, for
//!   geometries where the straight line would cross walls.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ped_core::{Point, WaypointId};

use crate::{SpatialError, SpatialResult};

// ── RoutingEngine trait ───────────────────────────────────────────────────────

/// Pluggable path computation.
///
/// Implementations must be `Send + Sync` so they can be shared across worker
/// threads.
pub trait RoutingEngine: Send + Sync {
    /// Compute the waypoint sequence from `from` to `to`.
    ///
    /// See the module docs for the sequence contract.
    fn compute_waypoints(&self, from: Point, to: Point) -> SpatialResult<Vec<Point>>;
}

// ── DirectRoutingEngine ───────────────────────────────────────────────────────

/// Routes every query as the straight segment `[from, to]`.
///
/// Correct whenever the walkable space is convex; the standard engine for
/// corridor and open-plane scenarios.
pub struct DirectRoutingEngine;

impl RoutingEngine for DirectRoutingEngine {
    fn compute_waypoints(&self, from: Point, to: Point) -> SpatialResult<Vec<Point>> {
        Ok(vec![from, to])
    }
}

// ── GraphRoutingEngine ────────────────────────────────────────────────────────

/// Dijkstra over a waypoint graph.
///
/// Queries snap `from` and `to` to their nearest graph nodes (deterministic
/// tie-breaking by node id), run Dijkstra between them, and return
/// `[from, node…, to]`.  Costs are edge lengths in millimetres (`u64`), so
/// comparisons are exact and the chosen path cannot flip between runs from
/// floating-point noise.
pub struct GraphRoutingEngine {
    nodes: Vec<Point>,
    /// Adjacency: `edges[n]` lists `(neighbor, cost_mm)` pairs.
    edges: Vec<Vec<(WaypointId, u64)>>,
}

impl GraphRoutingEngine {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nearest graph node to `p`; ties go to the lower id.
    fn snap(&self, p: Point) -> WaypointId {
        let mut best = WaypointId(0);
        let mut best_dist = f64::INFINITY;
        for (i, &node) in self.nodes.iter().enumerate() {
            let d = (node - p).length_sq();
            if d < best_dist {
                best_dist = d;
                best = WaypointId(i as u32);
            }
        }
        best
    }

    fn dijkstra(&self, from: WaypointId, to: WaypointId) -> Option<Vec<WaypointId>> {
        let n = self.nodes.len();
        let mut dist = vec![u64::MAX; n];
        let mut prev = vec![WaypointId::INVALID; n];
        dist[from.index()] = 0;

        // Min-heap: Reverse makes BinaryHeap (max) behave as min-heap.
        // Secondary key WaypointId gives deterministic tie-breaking.
        let mut heap: BinaryHeap<Reverse<(u64, WaypointId)>> = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            if node == to {
                let mut path = vec![to];
                let mut cur = to;
                while cur != from {
                    cur = prev[cur.index()];
                    path.push(cur);
                }
                path.reverse();
                return Some(path);
            }

            // Skip stale heap entries.
            if cost > dist[node.index()] {
                continue;
            }

            for &(neighbor, edge_cost) in &self.edges[node.index()] {
                let new_cost = cost.saturating_add(edge_cost);
                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev[neighbor.index()] = node;
                    heap.push(Reverse((new_cost, neighbor)));
                }
            }
        }
        None
    }
}

impl RoutingEngine for GraphRoutingEngine {
    fn compute_waypoints(&self, from: Point, to: Point) -> SpatialResult<Vec<Point>> {
        if self.nodes.is_empty() {
            return Ok(vec![from, to]);
        }

        let entry = self.snap(from);
        let exit = self.snap(to);
        let node_path = self
            .dijkstra(entry, exit)
            .ok_or(SpatialError::NoRoute { from, to })?;

        let mut waypoints = vec![from];
        for id in node_path {
            let p = self.nodes[id.index()];
            // Drop graph nodes coinciding with the endpoints so the sequence
            // has no zero-length hops.
            if p.distance_to(from) > 1e-9 && p.distance_to(to) > 1e-9 {
                waypoints.push(p);
            }
        }
        waypoints.push(to);
        Ok(waypoints)
    }
}

// ── GraphRoutingEngineBuilder ─────────────────────────────────────────────────

/// Collects waypoints and edges, then freezes them into a
/// [`GraphRoutingEngine`].
#[derive(Default)]
pub struct GraphRoutingEngineBuilder {
    nodes: Vec<Point>,
    edges: Vec<Vec<(WaypointId, u64)>>,
}

impl GraphRoutingEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_waypoint(&mut self, p: Point) -> WaypointId {
        let id = WaypointId(self.nodes.len() as u32);
        self.nodes.push(p);
        self.edges.push(Vec::new());
        id
    }

    /// Connect two waypoints bidirectionally; cost is their distance.
    pub fn connect(&mut self, a: WaypointId, b: WaypointId) -> &mut Self {
        let cost_mm = (self.nodes[a.index()].distance_to(self.nodes[b.index()]) * 1000.0) as u64;
        self.edges[a.index()].push((b, cost_mm));
        self.edges[b.index()].push((a, cost_mm));
        self
    }

    pub fn build(self) -> GraphRoutingEngine {
        GraphRoutingEngine {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
