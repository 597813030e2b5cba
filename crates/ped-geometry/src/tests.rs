//! Unit tests for ped-geometry.

#[cfg(test)]
mod segment {
    use ped_core::Point;

    use crate::LineSegment;

    #[test]
    fn nearest_point_interior_projection() {
        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let nearest = seg.nearest_point(Point::new(4.0, 3.0));
        assert_eq!(nearest, Point::new(4.0, 0.0));
        assert!((seg.distance_to(Point::new(4.0, 3.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn nearest_point_clamps_to_endpoints() {
        let seg = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(seg.nearest_point(Point::new(-5.0, 2.0)), Point::new(0.0, 0.0));
        assert_eq!(seg.nearest_point(Point::new(15.0, 2.0)), Point::new(10.0, 0.0));
    }

    #[test]
    fn degenerate_segment() {
        let p = Point::new(1.0, 1.0);
        let seg = LineSegment::new(p, p);
        assert_eq!(seg.nearest_point(Point::new(5.0, 5.0)), p);
        assert_eq!(seg.length(), 0.0);
    }
}

#[cfg(test)]
mod area {
    use ped_core::{AreaId, Point};

    use crate::{Area, AreaKind, GeometryError};

    fn unit_square() -> Area {
        Area::rectangle(
            AreaId(0),
            AreaKind::Goal,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        )
        .unwrap()
    }

    #[test]
    fn contains_interior_point() {
        assert!(unit_square().contains(Point::new(0.5, 0.5)));
    }

    #[test]
    fn excludes_outside_point() {
        let sq = unit_square();
        assert!(!sq.contains(Point::new(2.0, 0.5)));
        assert!(!sq.contains(Point::new(0.5, -1.0)));
    }

    #[test]
    fn concave_polygon() {
        // L-shape: the notch at the top-right is outside.
        let l = Area::new(
            AreaId(1),
            AreaKind::Goal,
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 2.0),
                Point::new(0.0, 2.0),
            ],
        )
        .unwrap();
        assert!(l.contains(Point::new(0.5, 1.5)));
        assert!(!l.contains(Point::new(1.5, 1.5)));
    }

    #[test]
    fn centroid_of_square() {
        let c = unit_square().centroid();
        assert!((c.x - 0.5).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polygon_rejected() {
        let err = Area::new(AreaId(9), AreaKind::Exit, vec![Point::ZERO, Point::UNIT_X]);
        assert!(matches!(
            err,
            Err(GeometryError::DegeneratePolygon { vertices: 2, .. })
        ));
    }
}

#[cfg(test)]
mod geometry {
    use ped_core::Point;

    use crate::GeometryBuilder;

    #[test]
    fn empty_geometry_has_no_walls() {
        let geo = crate::Geometry::empty();
        assert_eq!(geo.segment_count(), 0);
        assert!(geo.segments_near(Point::ZERO, 100.0).is_empty());
        assert!(geo.distance_to_nearest_wall(Point::ZERO).is_none());
    }

    #[test]
    fn segments_near_matches_brute_force() {
        // Grid of short horizontal walls.
        let mut builder = GeometryBuilder::new();
        for i in 0..10 {
            for j in 0..10 {
                let p = Point::new(i as f64 * 3.0, j as f64 * 3.0);
                builder.add_wall(p, p + Point::new(1.0, 0.0));
            }
        }
        let geo = builder.build();

        let query = Point::new(7.3, 8.1);
        let radius = 4.5;

        let brute: Vec<_> = geo
            .segments()
            .iter()
            .filter(|s| s.distance_to(query) <= radius)
            .copied()
            .collect();
        let indexed = geo.segments_near(query, radius);

        assert_eq!(indexed.len(), brute.len());
        for (a, b) in indexed.iter().zip(brute.iter()) {
            assert_eq!(**a, *b);
        }
    }

    #[test]
    fn nearest_wall_distance() {
        let mut builder = GeometryBuilder::new();
        builder.add_wall(Point::new(0.0, 2.0), Point::new(10.0, 2.0));
        builder.add_wall(Point::new(0.0, -5.0), Point::new(10.0, -5.0));
        let geo = builder.build();

        let d = geo.distance_to_nearest_wall(Point::new(5.0, 0.0)).unwrap();
        assert!((d - 2.0).abs() < 1e-12);
    }

    #[test]
    fn wall_chain_segment_count() {
        let mut builder = GeometryBuilder::new();
        builder.add_wall_chain(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(builder.build().segment_count(), 2);
    }
}
