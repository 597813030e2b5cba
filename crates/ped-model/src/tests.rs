//! Unit tests for ped-model.

#[cfg(test)]
mod helpers {
    use ped_agent::{Agent, AgentArena, AgentSpec, Behaviour, Ellipse, SimpleJourney};
    use ped_core::{AgentId, Point, ProfileId};
    use ped_geometry::AreaMap;

    use crate::{AgentUpdate, ModelContext, ParameterProfile};

    /// Arena with one agent at `pos` walking toward `waypoint`.
    pub fn arena_with_agent(pos: Point, waypoint: Point) -> (AgentArena, AgentId) {
        let mut arena = AgentArena::new(42);
        let id = arena
            .insert(
                AgentSpec {
                    pos,
                    v0: 1.2,
                    ellipse: Ellipse::new(0.2, 0.15).unwrap(),
                    behaviour: walk_to(waypoint),
                    profile: ProfileId(0),
                },
                &AreaMap::new(),
            )
            .unwrap();
        (arena, id)
    }

    pub fn walk_to(target: Point) -> Behaviour {
        let mut journey = SimpleJourney::new();
        journey.add_waypoint(target, 0.5);
        journey.into()
    }

    pub fn ctx<'a>(
        neighbors: &'a [&'a Agent],
        geometry: &'a ped_geometry::Geometry,
        profile: &'a ParameterProfile,
    ) -> ModelContext<'a> {
        ModelContext {
            dt: 0.05,
            elapsed_secs: 0.0,
            neighbors,
            geometry,
            profile,
        }
    }

    pub fn apply(agent: &mut Agent, update: AgentUpdate) {
        agent.pos = update.pos;
        agent.orientation = update.orientation;
        agent.speed = update.speed;
        agent.orientation_delay = update.orientation_delay;
    }
}

#[cfg(test)]
mod profile {
    use ped_core::ProfileId;

    use crate::{ModelError, ParameterProfile, ProfileRegistry};

    #[test]
    fn registry_roundtrip() {
        let mut registry = ProfileRegistry::new();
        let id = registry.add(ParameterProfile::default());
        assert_eq!(id, ProfileId(0));
        assert!(registry.get(id).is_ok());
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let registry = ProfileRegistry::new();
        assert!(matches!(
            registry.get(ProfileId(3)),
            Err(ModelError::UnknownProfile(ProfileId(3)))
        ));
    }

    #[test]
    fn max_interaction_radius_spans_profiles() {
        let mut registry = ProfileRegistry::new();
        registry.add(ParameterProfile { interaction_radius: 1.5, ..Default::default() });
        registry.add(ParameterProfile { interaction_radius: 3.0, ..Default::default() });
        assert_eq!(registry.max_interaction_radius(), 3.0);
    }

    #[test]
    fn invalid_profile_rejected() {
        let mut registry = ProfileRegistry::new();
        let id = registry.add(ParameterProfile { tau: 0.0, ..Default::default() });
        assert!(matches!(
            registry.validate_all(),
            Err(ModelError::InvalidProfile(bad)) if bad == id
        ));
    }
}

#[cfg(test)]
mod gcfm {
    use ped_core::Point;
    use ped_geometry::{Geometry, GeometryBuilder};

    use super::helpers::{apply, arena_with_agent, ctx};
    use crate::{GcfmModel, ModelError, OperationalModel, ParameterProfile};

    #[test]
    fn zero_desired_speed_fails_loudly() {
        let (mut arena, id) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        arena.get_mut(id).unwrap().v0 = 0.0; // corrupt past validation
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let agent = arena.get(id).unwrap();

        let result = GcfmModel::new().compute_update(agent, &ctx(&[], &geometry, &profile));
        assert!(matches!(result, Err(ModelError::ZeroDesiredSpeed(bad)) if bad == id));
    }

    #[test]
    fn free_agent_accelerates_toward_waypoint() {
        let (arena, id) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let agent = arena.get(id).unwrap();

        let update = GcfmModel::new()
            .compute_update(agent, &ctx(&[], &geometry, &profile))
            .unwrap();
        assert!(update.pos.x > 0.0);
        assert!(update.speed > 0.0);
    }

    #[test]
    fn speed_never_exceeds_cap() {
        let (mut arena, id) = arena_with_agent(Point::ZERO, Point::new(100.0, 0.0));
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let model = GcfmModel::new();

        for _ in 0..200 {
            let agent = arena.get(id).unwrap();
            let update = model
                .compute_update(agent, &ctx(&[], &geometry, &profile))
                .unwrap();
            let cap = agent.v0 * profile.max_speed_factor;
            assert!(update.speed <= cap + 1e-9, "speed {} > cap {cap}", update.speed);
            apply(arena.get_mut(id).unwrap(), update);
        }
    }

    #[test]
    fn neighbor_ahead_slows_progress() {
        let (arena_free, id_free) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let (arena_pair, id_a) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let (arena_b, id_b) = arena_with_agent(Point::new(0.4, 0.0), Point::new(10.0, 0.0));

        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let model = GcfmModel::new();

        let free = model
            .compute_update(arena_free.get(id_free).unwrap(), &ctx(&[], &geometry, &profile))
            .unwrap();

        let blocker = arena_b.get(id_b).unwrap();
        let neighbors = [blocker];
        let blocked = model
            .compute_update(arena_pair.get(id_a).unwrap(), &ctx(&neighbors, &geometry, &profile))
            .unwrap();

        assert!(blocked.pos.x < free.pos.x, "repulsion should slow the agent");
    }

    #[test]
    fn wall_pushes_agent_away() {
        let (arena, id) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let mut builder = GeometryBuilder::new();
        builder.add_wall(Point::new(-5.0, 0.3), Point::new(5.0, 0.3)); // wall just above
        let geometry = builder.build();
        let profile = ParameterProfile::default();
        let agent = arena.get(id).unwrap();

        let update = GcfmModel::new()
            .compute_update(agent, &ctx(&[], &geometry, &profile))
            .unwrap();
        assert!(update.pos.y < 0.0, "wall above should push the agent down");
    }

    #[test]
    fn orientation_stays_unit_and_turn_is_bounded() {
        // Waypoint directly behind: the desired direction flips by π.
        let (mut arena, id) = arena_with_agent(Point::ZERO, Point::new(-10.0, 0.0));
        {
            let agent = arena.get_mut(id).unwrap();
            agent.orientation = Point::UNIT_X;
            agent.speed = 1.0;
        }
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let agent = arena.get(id).unwrap();

        let update = GcfmModel::new()
            .compute_update(agent, &ctx(&[], &geometry, &profile))
            .unwrap();
        assert!((update.orientation.length() - 1.0).abs() < 1e-9);
        let swung = Point::UNIT_X.angle_to(update.orientation).abs();
        // Full reversal is π; one step with a fresh turning ramp must swing
        // far less than that.
        assert!(swung < std::f64::consts::FRAC_PI_2, "swung {swung} rad in one step");
    }
}

#[cfg(test)]
mod velocity {
    use ped_core::Point;
    use ped_geometry::Geometry;

    use super::helpers::{arena_with_agent, ctx};
    use crate::{OperationalModel, ParameterProfile, VelocityModel};

    #[test]
    fn open_space_walks_at_desired_speed() {
        let (arena, id) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();
        let agent = arena.get(id).unwrap();

        let update = VelocityModel::new()
            .compute_update(agent, &ctx(&[], &geometry, &profile))
            .unwrap();
        assert!((update.speed - agent.v0).abs() < 1e-9);
    }

    #[test]
    fn touching_neighbor_ahead_stops_the_agent() {
        let (arena_a, id_a) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        // Border-to-border clearance ≈ 0.35 − 0.2 − 0.2 < 0.
        let (arena_b, id_b) = arena_with_agent(Point::new(0.35, 0.0), Point::new(10.0, 0.0));
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();

        let blocker = arena_b.get(id_b).unwrap();
        let neighbors = [blocker];
        let update = VelocityModel::new()
            .compute_update(arena_a.get(id_a).unwrap(), &ctx(&neighbors, &geometry, &profile))
            .unwrap();
        assert_eq!(update.speed, 0.0);
    }

    #[test]
    fn neighbor_behind_does_not_limit_speed() {
        let (arena_a, id_a) = arena_with_agent(Point::ZERO, Point::new(10.0, 0.0));
        let (arena_b, id_b) = arena_with_agent(Point::new(-0.35, 0.0), Point::new(10.0, 0.0));
        let geometry = Geometry::empty();
        let profile = ParameterProfile::default();

        let follower = arena_b.get(id_b).unwrap();
        let neighbors = [follower];
        let update = VelocityModel::new()
            .compute_update(arena_a.get(id_a).unwrap(), &ctx(&neighbors, &geometry, &profile))
            .unwrap();
        assert!(update.speed > 0.0);
    }
}
