//! The `OperationalModel` trait and the pieces shared by its variants.

use ped_agent::Agent;
use ped_core::Point;
use ped_geometry::Geometry;

use crate::{ModelError, ModelResult, ParameterProfile};

// ── ModelContext ──────────────────────────────────────────────────────────────

/// Read-only view of the world for one agent's force evaluation.
///
/// All borrows refer to step-start state: `neighbors` was resolved from the
/// grid built at the top of the step, and no agent's position mutates while
/// any context is live.  This is what allows the operational phase to fan
/// out across threads.
pub struct ModelContext<'a> {
    /// Integration step width in seconds.
    pub dt: f64,
    /// Simulated seconds since step 0.
    pub elapsed_secs: f64,
    /// Neighbors within the profile's interaction radius, self excluded,
    /// in ascending id order.
    pub neighbors: &'a [&'a Agent],
    pub geometry: &'a Geometry,
    pub profile: &'a ParameterProfile,
}

// ── AgentUpdate ───────────────────────────────────────────────────────────────

/// The next kinematic state for one agent, produced by a model and committed
/// by the simulation after the whole phase has been evaluated.
#[derive(Copy, Clone, Debug)]
pub struct AgentUpdate {
    pub pos: Point,
    /// Unit vector.
    pub orientation: Point,
    pub speed: f64,
    /// New value of the agent's turning-ramp counter.
    pub orientation_delay: u32,
}

// ── OperationalModel ──────────────────────────────────────────────────────────

/// A force-model variant.
///
/// Implementations must be `Send + Sync`: the simulation may evaluate many
/// agents concurrently against one shared model value.  Models hold only
/// coefficients, never per-agent state — that lives on the agents.
pub trait OperationalModel: Send + Sync + 'static {
    /// Short name for logs and output metadata.
    fn name(&self) -> &'static str;

    /// Compute the next kinematic state for `agent`.
    ///
    /// # Errors
    ///
    /// `ZeroDesiredSpeed` if the agent slipped through creation-time
    /// validation with `v0 <= 0`; the step is aborted rather than dividing
    /// by a zero desired speed.
    fn compute_update(&self, agent: &Agent, ctx: &ModelContext<'_>) -> ModelResult<AgentUpdate>;
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// The direction the agent wants to move: toward its waypoint, or along its
/// current orientation if it is standing on the waypoint.
#[inline]
pub(crate) fn desired_direction(agent: &Agent) -> Point {
    (agent.waypoint - agent.pos)
        .normalized()
        .unwrap_or(agent.orientation)
}

/// Reject the degenerate `v0 <= 0` configuration before any force math.
#[inline]
pub(crate) fn check_desired_speed(agent: &Agent) -> ModelResult<()> {
    if agent.v0 <= 0.0 {
        return Err(ModelError::ZeroDesiredSpeed(agent.id));
    }
    Ok(())
}

/// Rotate `agent.orientation` toward `target_dir` with a bounded swing.
///
/// The permitted swing per step is `max_turn_rate * dt`, scaled by a ramp
/// that refills over `turn_ramp_steps` steps.  A large direction jump (more
/// than a quarter turn) resets the ramp, so an agent that suddenly reverses
/// its goal turns through the reversal over several steps instead of
/// flipping in one — the "delayed turning" that keeps head-on encounters
/// from oscillating.
///
/// Returns the new orientation (always unit length) and ramp counter.
pub(crate) fn smooth_orientation(
    agent: &Agent,
    target_dir: Point,
    profile: &ParameterProfile,
    dt: f64,
) -> (Point, u32) {
    let angle = agent.orientation.angle_to(target_dir);

    let mut delay = agent.orientation_delay;
    if angle.abs() > std::f64::consts::FRAC_PI_2 {
        delay = 0;
    }

    let ramp = if profile.turn_ramp_steps == 0 {
        1.0
    } else {
        (delay.min(profile.turn_ramp_steps) as f64 + 1.0) / (profile.turn_ramp_steps as f64 + 1.0)
    };
    let max_swing = profile.max_turn_rate * dt * ramp;
    let swing = angle.clamp(-max_swing, max_swing);

    let rotated = agent.orientation.rotated(swing);
    // Renormalize to stop rounding drift from accumulating over many steps.
    let orientation = rotated.normalized().unwrap_or(target_dir);
    (orientation, delay.saturating_add(1))
}
