//! The `Simulation` struct and its step loop.

use ped_agent::{Agent, AgentArena, AgentSpec};
use ped_core::{AgentId, SimClock, SimConfig};
use ped_geometry::{AreaMap, Geometry};
use ped_model::{OperationalModel, ProfileRegistry};
use ped_spatial::{NeighborhoodSearch, RoutingEngine};

use crate::{exit, operational, strategic, tactical, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Simulation<M, R>` owns all simulation state and drives the five-phase
/// step loop ([`iterate`][Self::iterate]):
///
/// 1. **Grid rebuild** — re-bin every agent position into the neighborhood
///    grid.
/// 2. **Exit phase** — agents standing in an exit area are removed.
/// 3. **Strategic phase** — each behaviour refreshes its agent's
///    destination, advancing journey progress on arrival.
/// 4. **Tactical phase** — the routing engine turns destination into the
///    next waypoint, with corner cutting.
/// 5. **Operational phase** — the force model is evaluated read-only for
///    every agent (parallel with the `parallel` feature), then all updates
///    are committed sequentially.
///
/// The clock advances once at the end of every step.  Create via
/// [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation<M: OperationalModel, R: RoutingEngine> {
    /// Global configuration (step width, total steps, seed, …).
    pub config: SimConfig,

    /// Simulation clock — current step and elapsed seconds.
    pub clock: SimClock,

    /// Goal and exit areas, keyed by id.
    pub areas: AreaMap,

    /// Static wall geometry.
    pub geometry: Geometry,

    /// Parameter profiles the operational model draws from.
    pub profiles: ProfileRegistry,

    /// All live agents.
    pub agents: AgentArena,

    /// The routing engine consulted by the tactical phase.
    pub routing: R,

    /// The operational model evaluated each step.
    pub model: M,

    /// Uniform-grid neighborhood index, rebuilt at the start of every step.
    pub(crate) grid: NeighborhoodSearch,

    /// Dedicated thread pool when `config.num_threads` is set; `None` runs
    /// the force phase on Rayon's global pool.
    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<M: OperationalModel, R: RoutingEngine> Simulation<M, R> {
    // ── Agent management ──────────────────────────────────────────────────

    /// Validate `spec` and insert a new agent, returning its id.
    ///
    /// The agent participates from the next [`iterate`][Self::iterate] on.
    pub fn add_agent(&mut self, spec: AgentSpec) -> SimResult<AgentId> {
        self.profiles.get(spec.profile)?;
        Ok(self.agents.insert(spec, &self.areas)?)
    }

    /// Insert several agents; returns their ids in insertion order.
    ///
    /// Stops at the first invalid spec, keeping the agents inserted so far.
    pub fn add_agents(
        &mut self,
        specs: impl IntoIterator<Item = AgentSpec>,
    ) -> SimResult<Vec<AgentId>> {
        specs.into_iter().map(|spec| self.add_agent(spec)).collect()
    }

    /// Remove the given agents.  Unknown ids are ignored, so callers can
    /// retry a removal without tracking what already left through an exit.
    pub fn remove_agents(&mut self, ids: &[AgentId]) {
        for &id in ids {
            self.agents.remove(id);
        }
    }

    /// Look up a live agent by id.
    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        Ok(self.agents.get(id)?)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one step.
    ///
    /// Returns the ids of agents that left through an exit this step, in
    /// ascending order.  Callers that need to stop early (convergence,
    /// wall-clock budget) drive this directly instead of
    /// [`run`][Self::run].
    pub fn iterate(&mut self) -> SimResult<Vec<AgentId>> {
        self.grid.update(self.agents.positions());

        let exited = exit::run(&self.areas, &mut self.agents);
        strategic::run(&self.areas, &mut self.agents)?;
        tactical::run(&self.routing, &mut self.agents, self.config.corner_cut_distance)?;

        let phase = operational::Phase {
            model: &self.model,
            grid: &self.grid,
            geometry: &self.geometry,
            profiles: &self.profiles,
            clock: &self.clock,
        };

        #[cfg(not(feature = "parallel"))]
        let updates = phase.evaluate(&self.agents)?;

        #[cfg(feature = "parallel")]
        let updates = match &self.pool {
            Some(pool) => pool.install(|| phase.evaluate(&self.agents))?,
            None => phase.evaluate(&self.agents)?,
        };

        operational::commit(&mut self.agents, updates)?;

        self.clock.advance();
        Ok(exited)
    }

    /// Run from the current step to `config.total_steps`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.step < self.config.total_steps {
            let step = self.clock.step;
            observer.on_step_start(step);

            let exited = self.iterate()?;
            if !exited.is_empty() {
                observer.on_agents_exited(step, &exited);
            }
            observer.on_step_end(step, self.agents.len());

            if self.config.snapshot_interval_steps > 0
                && self.clock.step.is_multiple_of(self.config.snapshot_interval_steps)
            {
                observer.on_snapshot(&self.clock, &self.agents);
            }
        }
        observer.on_sim_end(&self.clock);
        Ok(())
    }
}
