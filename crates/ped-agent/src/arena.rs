//! `AgentArena` — dense agent storage with stable-id indirection.
//!
//! Agents live in a dense `Vec` (cache-friendly iteration for the per-step
//! phases); a separate id → slot map gives O(1) lookup by stable id.
//! Removal swap-pops the dense slot and patches the map, so removing from
//! the middle is O(1) and never invalidates any other agent's id —
//! only slot indices move, and nothing outside this module ever holds one.

use rustc_hash::FxHashMap;

use ped_core::{AgentId, Point};
use ped_geometry::AreaMap;

use crate::{Agent, AgentError, AgentResult, AgentSpec};

/// The owning collection of all live agents.
pub struct AgentArena {
    agents: Vec<Agent>,
    slots: FxHashMap<AgentId, usize>,
    /// Next id to hand out.  Monotone; ids are never reused even after
    /// removal.
    next_id: u64,
    global_seed: u64,
}

impl AgentArena {
    pub fn new(global_seed: u64) -> Self {
        Self {
            agents: Vec::new(),
            slots: FxHashMap::default(),
            next_id: 0,
            global_seed,
        }
    }

    /// Validate `spec`, assign the next id, and insert.
    ///
    /// # Errors
    ///
    /// Whatever [`Agent::new`] rejects: non-positive `v0`, an empty journey,
    /// or a journey referencing an unknown area.
    pub fn insert(&mut self, spec: AgentSpec, areas: &AreaMap) -> AgentResult<AgentId> {
        let id = AgentId(self.next_id);
        let agent = Agent::new(id, spec, areas, self.global_seed)?;
        self.next_id += 1;
        self.slots.insert(id, self.agents.len());
        self.agents.push(agent);
        Ok(id)
    }

    /// Remove by id, returning the agent if it was present.
    ///
    /// Swap-pop: the last agent moves into the vacated slot and the map is
    /// patched.  Unknown ids return `None` (removal is idempotent).
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let slot = self.slots.remove(&id)?;
        let agent = self.agents.swap_remove(slot);
        if let Some(moved) = self.agents.get(slot) {
            self.slots.insert(moved.id, slot);
        }
        Some(agent)
    }

    pub fn get(&self, id: AgentId) -> AgentResult<&Agent> {
        self.slots
            .get(&id)
            .map(|&slot| &self.agents[slot])
            .ok_or(AgentError::UnknownAgent(id))
    }

    pub fn get_mut(&mut self, id: AgentId) -> AgentResult<&mut Agent> {
        match self.slots.get(&id) {
            Some(&slot) => Ok(&mut self.agents[slot]),
            None => Err(AgentError::UnknownAgent(id)),
        }
    }

    #[inline]
    pub fn contains(&self, id: AgentId) -> bool {
        self.slots.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterate agents in dense (slot) order.
    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        self.agents.iter_mut()
    }

    /// Dense agent slice, for the parallel force phase.
    pub fn as_slice(&self) -> &[Agent] {
        &self.agents
    }

    /// `(id, position)` pairs in dense order — the grid rebuild input.
    pub fn positions(&self) -> impl Iterator<Item = (AgentId, Point)> + '_ {
        self.agents.iter().map(|a| (a.id, a.pos))
    }
}
