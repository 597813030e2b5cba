//! Exit phase — remove agents that reached an exit area.

use ped_agent::AgentArena;
use ped_core::AgentId;
use ped_geometry::{AreaKind, AreaMap};

/// Remove every agent standing inside an [`AreaKind::Exit`] area.
///
/// Returns the removed ids in ascending order.  Runs after the neighborhood
/// grid was rebuilt, so the grid still lists the removed agents for the rest
/// of the step; the operational phase resolves neighbor ids through the arena
/// and skips ids that are gone.
pub(crate) fn run(areas: &AreaMap, agents: &mut AgentArena) -> Vec<AgentId> {
    let mut exited: Vec<AgentId> = agents
        .iter()
        .filter(|agent| {
            areas
                .values()
                .any(|area| area.kind == AreaKind::Exit && area.contains(agent.pos))
        })
        .map(|agent| agent.id)
        .collect();
    exited.sort_unstable();

    for &id in &exited {
        agents.remove(id);
    }
    exited
}
