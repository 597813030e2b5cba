//! Tactical phase — turn the destination into an immediate steering target.

use ped_agent::AgentArena;
use ped_core::Point;
use ped_spatial::RoutingEngine;

use crate::{SimError, SimResult};

/// Route each agent toward its destination and pick the next waypoint.
///
/// The routing engine returns the full waypoint sequence `[pos, …, dest]`;
/// the agent steers at the second entry.  When a third entry exists the
/// second one is a corner vertex, and the target is pulled
/// `corner_cut_distance` metres into the corner's bisector so the agent
/// rounds it with clearance instead of grazing the vertex.
pub(crate) fn run<R: RoutingEngine>(
    routing: &R,
    agents: &mut AgentArena,
    corner_cut_distance: f64,
) -> SimResult<()> {
    for agent in agents.iter_mut() {
        let waypoints = routing.compute_waypoints(agent.pos, agent.destination)?;
        if waypoints.len() < 2 {
            return Err(SimError::WaypointContract {
                agent: agent.id,
                points: waypoints.len(),
            });
        }
        agent.waypoint = next_target(&waypoints, corner_cut_distance);
    }
    Ok(())
}

/// The point the agent should steer at, given a routed waypoint sequence.
pub(crate) fn next_target(waypoints: &[Point], corner_cut_distance: f64) -> Point {
    let target = waypoints[1];
    if waypoints.len() < 3 {
        return target;
    }

    // Bisector of the incoming and outgoing legs, pointing into the corner.
    let leg_in = match (waypoints[0] - target).normalized() {
        Some(v) => v,
        None => return target,
    };
    let leg_out = match (waypoints[2] - target).normalized() {
        Some(v) => v,
        None => return target,
    };
    match (leg_in + leg_out).normalized() {
        // 180° corners have no bisector; steer at the vertex itself.
        None => target,
        Some(bisector) => target + bisector * -corner_cut_distance,
    }
}
