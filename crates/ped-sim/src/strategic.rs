//! Strategic phase — refresh every agent's long-horizon destination.

use ped_agent::AgentArena;
use ped_geometry::AreaMap;

use crate::SimResult;

/// Ask each agent's behaviour where it should currently be heading and write
/// the answer into `agent.destination`.
///
/// Journey progress (waypoint advancement, stage branching) happens inside
/// the behaviour as a side effect of the query, consuming only the agent's
/// own RNG, so agent order does not affect the outcome.
pub(crate) fn run(areas: &AreaMap, agents: &mut AgentArena) -> SimResult<()> {
    for agent in agents.iter_mut() {
        agent.destination = agent.behaviour.destination(agent.pos, areas, &mut agent.rng)?;
    }
    Ok(())
}
