//! The `Agent` — one simulated pedestrian.

use ped_core::{AgentId, AgentRng, Point, ProfileId};
use ped_geometry::AreaMap;

use crate::{AgentError, AgentResult, Behaviour, Ellipse};

/// Everything needed to create an agent; the arena turns a spec into an
/// [`Agent`] with an assigned id and seeded RNG.
pub struct AgentSpec {
    pub pos: Point,
    /// Desired walking speed in m/s.  Must be strictly positive — a zero
    /// desired speed would make the driving term meaningless and is rejected
    /// at creation.
    pub v0: f64,
    pub ellipse: Ellipse,
    pub behaviour: Behaviour,
    pub profile: ProfileId,
}

/// Mutable per-entity state, owned exclusively by the arena.
///
/// Invariants (established at creation, preserved by the operational
/// commit):
/// - `orientation` is a unit vector,
/// - `v0 > 0`,
/// - the ellipse's semi-axes are positive (enforced by [`Ellipse::new`]).
#[derive(Debug)]
pub struct Agent {
    /// Stable identity, never reused.
    pub id: AgentId,

    // ── Kinematic state ───────────────────────────────────────────────────
    pub pos: Point,
    /// Unit vector the body currently faces.
    pub orientation: Point,
    /// Scalar speed along `orientation` in m/s.
    pub speed: f64,
    /// Desired speed in m/s.
    pub v0: f64,
    pub ellipse: Ellipse,

    // ── Decision state ────────────────────────────────────────────────────
    /// Evaluated by the strategic level.
    pub behaviour: Behaviour,
    /// Long-horizon goal point, written by the strategic level.
    pub destination: Point,
    /// Immediate steering target, written by the tactical level.
    pub waypoint: Point,
    /// Which parameter profile the operational model applies.
    pub profile: ProfileId,

    // ── Operational bookkeeping ───────────────────────────────────────────
    /// Steps since the steering direction last jumped; gates how fast the
    /// orientation may swing (smooth turning).
    pub orientation_delay: u32,

    /// Private RNG; consumed by journey branch decisions.
    pub rng: AgentRng,
}

impl Agent {
    /// Build an agent from a spec.
    ///
    /// The initial orientation points at the behaviour's first target (or
    /// +x if the agent starts on top of it); destination and waypoint start
    /// there too, so the agent is well-formed even before the first
    /// strategic/tactical phases run.
    pub(crate) fn new(
        id: AgentId,
        spec: AgentSpec,
        areas: &AreaMap,
        global_seed: u64,
    ) -> AgentResult<Self> {
        if spec.v0 <= 0.0 {
            return Err(AgentError::InvalidDesiredSpeed { id, v0: spec.v0 });
        }

        let target = spec.behaviour.first_target(areas)?;
        let orientation = (target - spec.pos).normalized().unwrap_or(Point::UNIT_X);

        Ok(Self {
            id,
            pos: spec.pos,
            orientation,
            speed: 0.0,
            v0: spec.v0,
            ellipse: spec.ellipse,
            behaviour: spec.behaviour,
            destination: target,
            waypoint: target,
            profile: spec.profile,
            orientation_delay: 0,
            rng: AgentRng::new(global_seed, id),
        })
    }

    /// Current velocity vector (`orientation * speed`).
    #[inline]
    pub fn velocity(&self) -> Point {
        self.orientation * self.speed
    }
}
