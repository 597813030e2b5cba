//! Operational phase — evaluate the force model and commit the results.
//!
//! Two sub-phases, mirroring the produce/consume split of the step loop:
//!
//! 1. **Evaluate** (read-only, optionally parallel): call the model once per
//!    agent against the state as it stood at phase start.
//! 2. **Commit** (sequential, arena order): write every update back.
//!
//! Because evaluation never writes, the parallel and sequential paths see
//! exactly the same world and produce bit-identical updates.

use ped_agent::{Agent, AgentArena};
use ped_core::{AgentId, SimClock};
use ped_geometry::Geometry;
use ped_model::{AgentUpdate, ModelContext, OperationalModel, ProfileRegistry};
use ped_spatial::NeighborhoodSearch;

use crate::SimResult;

/// Shared read-only inputs for one evaluation pass.
pub(crate) struct Phase<'a, M: OperationalModel> {
    pub model: &'a M,
    pub grid: &'a NeighborhoodSearch,
    pub geometry: &'a Geometry,
    pub profiles: &'a ProfileRegistry,
    pub clock: &'a SimClock,
}

impl<M: OperationalModel> Phase<'_, M> {
    /// Evaluate the model for every live agent.
    ///
    /// Grid hits are resolved through the arena; ids removed by the exit
    /// phase earlier this step simply drop out of the neighbor list.
    pub(crate) fn evaluate(&self, agents: &AgentArena) -> SimResult<Vec<(AgentId, AgentUpdate)>> {
        #[cfg(not(feature = "parallel"))]
        {
            agents
                .as_slice()
                .iter()
                .map(|agent| self.evaluate_one(agents, agent))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .as_slice()
                .par_iter()
                .map(|agent| self.evaluate_one(agents, agent))
                .collect()
        }
    }

    fn evaluate_one(
        &self,
        agents: &AgentArena,
        agent: &Agent,
    ) -> SimResult<(AgentId, AgentUpdate)> {
        let profile = self.profiles.get(agent.profile)?;

        let hits = self.grid.query(agent.pos, profile.interaction_radius);
        let neighbors: Vec<&Agent> = hits
            .iter()
            .filter(|&&id| id != agent.id)
            .filter_map(|&id| agents.get(id).ok())
            .collect();

        let ctx = ModelContext {
            dt: self.clock.dt_secs,
            elapsed_secs: self.clock.elapsed_secs(),
            neighbors: &neighbors,
            geometry: self.geometry,
            profile,
        };
        let update = self.model.compute_update(agent, &ctx)?;
        Ok((agent.id, update))
    }
}

/// Write the evaluated updates back, in the order they were produced
/// (arena order, which is deterministic for a given insertion/removal
/// history).
pub(crate) fn commit(agents: &mut AgentArena, updates: Vec<(AgentId, AgentUpdate)>) -> SimResult<()> {
    for (id, update) in updates {
        let agent = agents.get_mut(id)?;
        agent.pos = update.pos;
        agent.orientation = update.orientation;
        agent.speed = update.speed;
        agent.orientation_delay = update.orientation_delay;
    }
    Ok(())
}
