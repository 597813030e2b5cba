//! Headway-limited velocity model.
//!
//! Instead of accumulating accelerations, this variant picks a direction by
//! superposing the desired direction with exponential neighbor/wall
//! repulsion directions, then walks along it at a speed limited by the
//! clearance to the nearest body ahead:
//!
//!   speed = clamp(min_clearance / time_gap, 0, v0)
//!
//! No inertia means no oscillation to damp, which makes it the stabler
//! choice at large `dt`; the trade-off is less realistic shoulder-to-
//! shoulder dynamics than the force-based variant.

use ped_agent::Agent;
use ped_core::Point;

use crate::model::{check_desired_speed, desired_direction, smooth_orientation};
use crate::{AgentUpdate, ModelContext, ModelResult, OperationalModel};

/// The headway-limited velocity operational model.
#[derive(Default)]
pub struct VelocityModel;

impl VelocityModel {
    pub fn new() -> Self {
        Self
    }
}

impl OperationalModel for VelocityModel {
    fn name(&self) -> &'static str {
        "velocity"
    }

    fn compute_update(&self, agent: &Agent, ctx: &ModelContext<'_>) -> ModelResult<AgentUpdate> {
        check_desired_speed(agent)?;

        let profile = ctx.profile;
        let e0 = desired_direction(agent);

        // Direction: desired direction plus repulsion directions.
        let mut direction = e0;
        // Minimum border-to-border clearance to any neighbor ahead.
        let mut clearance = f64::INFINITY;

        for other in ctx.neighbors {
            let to_other = other.pos - agent.pos;
            let ep = to_other.normalized().unwrap_or(-e0);

            let r_self = agent.ellipse.radius_toward(agent.orientation, ep);
            let r_other = other.ellipse.radius_toward(other.orientation, -ep);
            let eff_dist = to_other.length() - r_self - r_other;

            direction += -ep * (profile.ped_strength * (-eff_dist / profile.ped_range).exp());

            // Only bodies in front constrain the headway.
            if e0.dot(ep) > 0.0 {
                clearance = clearance.min(eff_dist);
            }
        }

        for segment in ctx.geometry.segments_near(agent.pos, profile.interaction_radius) {
            let nearest = segment.nearest_point(agent.pos);
            let away = agent.pos - nearest;
            let dir = away.normalized().unwrap_or(-e0);
            let eff_dist = away.length() - agent.ellipse.radius_toward(agent.orientation, -dir);
            direction += dir * (profile.wall_strength * (-eff_dist / profile.wall_range).exp());

            if e0.dot(-dir) > 0.0 {
                clearance = clearance.min(eff_dist);
            }
        }

        let direction = direction.normalized().unwrap_or(e0);

        let speed = if clearance.is_finite() {
            (clearance / profile.time_gap).clamp(0.0, agent.v0)
        } else {
            agent.v0
        };

        let pos = agent.pos + direction * (speed * ctx.dt);
        let (orientation, orientation_delay) = smooth_orientation(agent, direction, profile, ctx.dt);

        Ok(AgentUpdate { pos, orientation, speed, orientation_delay })
    }
}
