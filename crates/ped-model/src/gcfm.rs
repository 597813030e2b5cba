//! Generalized-centrifugal-force model.
//!
//! The classic force superposition:
//!
//!   F = (e0·v0 − v) / τ  +  Σ F_rep(neighbor)  +  Σ F_rep(wall)
//!
//! integrated explicitly: `v ← v + F·dt`, `x ← x + v·dt`.  Repulsions decay
//! exponentially with the *effective* distance — center distance minus both
//! ellipse radii along the connecting line — so two overlapping bodies see a
//! force that keeps growing as they interpenetrate.  Neighbor repulsion is
//! additionally weighted by how far ahead the neighbor is: an agent is pushed
//! hard by someone it is walking into and only weakly by someone behind it.

use ped_agent::Agent;
use ped_core::Point;

use crate::model::{check_desired_speed, desired_direction, smooth_orientation};
use crate::{AgentUpdate, ModelContext, ModelResult, OperationalModel};

/// Weight applied to repulsion from neighbors exactly behind the agent.
/// Front neighbors get the full strength; the blend is linear in the
/// cosine of the bearing angle.
const BACK_WEIGHT: f64 = 0.2;

/// The generalized-centrifugal-force operational model.
#[derive(Default)]
pub struct GcfmModel;

impl GcfmModel {
    pub fn new() -> Self {
        Self
    }

    /// Repulsive acceleration exerted on `agent` by `other`.
    fn ped_repulsion(agent: &Agent, other: &Agent, e0: Point, ctx: &ModelContext<'_>) -> Point {
        let to_other = other.pos - agent.pos;
        // Coincident centers carry no direction; push straight back against
        // the desired direction so the pair still separates.
        let ep = to_other.normalized().unwrap_or(-e0);

        let r_self = agent.ellipse.radius_toward(agent.orientation, ep);
        let r_other = other.ellipse.radius_toward(other.orientation, -ep);
        let eff_dist = to_other.length() - r_self - r_other;

        let profile = ctx.profile;
        let magnitude = profile.ped_strength * (-eff_dist / profile.ped_range).exp();

        // Bearing weight: 1 ahead, BACK_WEIGHT behind.
        let ahead = e0.dot(ep);
        let weight = BACK_WEIGHT + (1.0 - BACK_WEIGHT) * 0.5 * (1.0 + ahead);

        -ep * (magnitude * weight)
    }

    /// Repulsive acceleration from all walls within the interaction radius.
    fn wall_repulsion(agent: &Agent, e0: Point, ctx: &ModelContext<'_>) -> Point {
        let profile = ctx.profile;
        let mut force = Point::ZERO;
        for segment in ctx.geometry.segments_near(agent.pos, profile.interaction_radius) {
            let nearest = segment.nearest_point(agent.pos);
            let away = agent.pos - nearest;
            let dir = away.normalized().unwrap_or(-e0);
            let eff_dist = away.length() - agent.ellipse.radius_toward(agent.orientation, -dir);
            force += dir * (profile.wall_strength * (-eff_dist / profile.wall_range).exp());
        }
        force
    }
}

impl OperationalModel for GcfmModel {
    fn name(&self) -> &'static str {
        "gcfm"
    }

    fn compute_update(&self, agent: &Agent, ctx: &ModelContext<'_>) -> ModelResult<AgentUpdate> {
        check_desired_speed(agent)?;

        let e0 = desired_direction(agent);
        let velocity = agent.velocity();

        // Driving term.
        let mut force = (e0 * agent.v0 - velocity) * (1.0 / ctx.profile.tau);

        // Neighbor repulsion; neighbors arrive pre-filtered to the
        // interaction radius and without the agent itself.
        for other in ctx.neighbors {
            force += Self::ped_repulsion(agent, other, e0, ctx);
        }

        // Wall repulsion.
        force += Self::wall_repulsion(agent, e0, ctx);

        // Explicit integration with a hard speed cap.
        let mut new_velocity = velocity + force * ctx.dt;
        let max_speed = agent.v0 * ctx.profile.max_speed_factor;
        let speed = new_velocity.length();
        if speed > max_speed {
            new_velocity = new_velocity * (max_speed / speed);
        }

        let pos = agent.pos + new_velocity * ctx.dt;
        let new_speed = new_velocity.length();
        let target_dir = new_velocity.normalized().unwrap_or(agent.orientation);
        let (orientation, orientation_delay) = smooth_orientation(agent, target_dir, ctx.profile, ctx.dt);

        Ok(AgentUpdate { pos, orientation, speed: new_speed, orientation_delay })
    }
}
