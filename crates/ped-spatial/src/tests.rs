//! Unit tests for ped-spatial.

#[cfg(test)]
mod grid {
    use ped_core::{AgentId, Point, SimRng};

    use crate::NeighborhoodSearch;

    #[test]
    fn empty_grid_returns_nothing() {
        let mut grid = NeighborhoodSearch::new(2.0);
        grid.update(std::iter::empty());
        assert!(grid.query(Point::ZERO, 2.0).is_empty());
        assert_eq!(grid.occupied_cells(), 0);
    }

    #[test]
    fn finds_agent_in_adjacent_cell() {
        let mut grid = NeighborhoodSearch::new(2.0);
        // Two agents straddling a cell boundary 0.2 m apart.
        grid.update(
            vec![
                (AgentId(0), Point::new(1.9, 0.0)),
                (AgentId(1), Point::new(2.1, 0.0)),
            ]
            .into_iter(),
        );
        let hits = grid.query(Point::new(1.9, 0.0), 1.0);
        assert_eq!(hits, vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn excludes_agents_beyond_radius() {
        let mut grid = NeighborhoodSearch::new(5.0);
        grid.update(
            vec![
                (AgentId(0), Point::ZERO),
                (AgentId(1), Point::new(3.0, 0.0)),
                (AgentId(2), Point::new(4.9, 0.0)),
            ]
            .into_iter(),
        );
        let hits = grid.query(Point::ZERO, 3.5);
        assert_eq!(hits, vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn includes_self_position() {
        // Self-exclusion is the caller's job.
        let mut grid = NeighborhoodSearch::new(2.0);
        grid.update(vec![(AgentId(7), Point::new(1.0, 1.0))].into_iter());
        assert_eq!(grid.query(Point::new(1.0, 1.0), 1.0), vec![AgentId(7)]);
    }

    #[test]
    fn matches_brute_force_on_random_points() {
        const N: usize = 10_000;
        const RADIUS: f64 = 2.0;
        const CELL: f64 = 2.0;

        let mut rng = SimRng::new(1234);
        let points: Vec<(AgentId, Point)> = (0..N as u64)
            .map(|i| {
                (
                    AgentId(i),
                    Point::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)),
                )
            })
            .collect();

        let mut grid = NeighborhoodSearch::new(CELL);
        grid.update(points.iter().copied());

        for &query in &[
            Point::ZERO,
            Point::new(10.0, -10.0),
            Point::new(-49.9, 49.9),
            Point::new(3.7, 2.1),
        ] {
            let mut brute: Vec<AgentId> = points
                .iter()
                .filter(|(_, p)| (*p - query).length_sq() <= RADIUS * RADIUS)
                .map(|(id, _)| *id)
                .collect();
            brute.sort_unstable();

            assert_eq!(grid.query(query, RADIUS), brute, "query at {query}");
        }
    }

    #[test]
    fn rebuild_replaces_previous_state() {
        let mut grid = NeighborhoodSearch::new(2.0);
        grid.update(vec![(AgentId(0), Point::ZERO)].into_iter());
        grid.update(vec![(AgentId(1), Point::new(10.0, 10.0))].into_iter());
        assert!(grid.query(Point::ZERO, 2.0).is_empty());
        assert_eq!(grid.query(Point::new(10.0, 10.0), 2.0), vec![AgentId(1)]);
    }
}

#[cfg(test)]
mod router {
    use ped_core::Point;

    use crate::{
        DirectRoutingEngine, GraphRoutingEngineBuilder, RoutingEngine, SpatialError,
    };

    #[test]
    fn direct_engine_returns_both_endpoints() {
        let from = Point::new(1.0, 1.0);
        let to = Point::new(5.0, 2.0);
        let path = DirectRoutingEngine.compute_waypoints(from, to).unwrap();
        assert_eq!(path, vec![from, to]);
    }

    /// Square detour graph:
    ///
    /// ```text
    ///   n1 ── n2
    ///   │      │
    ///   n0     n3
    /// ```
    fn detour_graph() -> crate::GraphRoutingEngine {
        let mut b = GraphRoutingEngineBuilder::new();
        let n0 = b.add_waypoint(Point::new(0.0, 0.0));
        let n1 = b.add_waypoint(Point::new(0.0, 4.0));
        let n2 = b.add_waypoint(Point::new(4.0, 4.0));
        let n3 = b.add_waypoint(Point::new(4.0, 0.0));
        b.connect(n0, n1);
        b.connect(n1, n2);
        b.connect(n2, n3);
        b.build()
    }

    #[test]
    fn graph_engine_first_point_is_origin() {
        let engine = detour_graph();
        let from = Point::new(0.1, -0.1);
        let path = engine.compute_waypoints(from, Point::new(4.0, -0.1)).unwrap();
        assert!(path.len() >= 2);
        assert_eq!(path[0], from);
    }

    #[test]
    fn graph_engine_routes_around_detour() {
        let engine = detour_graph();
        // n0 → n3 is only reachable over the top of the square.
        let path = engine
            .compute_waypoints(Point::new(0.0, -0.5), Point::new(4.0, -0.5))
            .unwrap();
        // from, n0, n1, n2, n3, to
        assert_eq!(path.len(), 6);
        assert_eq!(path[2], Point::new(0.0, 4.0));
        assert_eq!(path[3], Point::new(4.0, 4.0));
    }

    #[test]
    fn disconnected_graph_is_no_route() {
        let mut b = GraphRoutingEngineBuilder::new();
        b.add_waypoint(Point::new(0.0, 0.0));
        b.add_waypoint(Point::new(100.0, 0.0));
        // No edges between them.
        let engine = b.build();
        let result = engine.compute_waypoints(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(matches!(result, Err(SpatialError::NoRoute { .. })));
    }

    #[test]
    fn empty_graph_falls_back_to_direct() {
        let engine = GraphRoutingEngineBuilder::new().build();
        let path = engine
            .compute_waypoints(Point::ZERO, Point::new(1.0, 0.0))
            .unwrap();
        assert_eq!(path.len(), 2);
    }
}
