//! Journey behaviours — the strategic layer's goal producers.
//!
//! A `Behaviour` is owned by exactly one agent and queried once per step with
//! that agent's current position.  It answers "where should this agent be
//! heading right now" and advances its own internal progress when the agent
//! arrives somewhere.  Decisions depend only on the owning agent's state (and
//! its private RNG), never on other agents, which keeps the strategic phase
//! order-independent.
//!
//! The variant set is closed on purpose: the framework pattern-matches over
//! it instead of paying a virtual call per agent per step, and new journey
//! kinds are a deliberate framework change rather than an application hook.

use ped_core::{AgentRng, AreaId, Point};
use ped_geometry::AreaMap;

use crate::{AgentError, AgentResult};

// ── SimpleJourney ─────────────────────────────────────────────────────────────

/// A fixed list of waypoints, each with an arrival distance.
///
/// The journey holds at the current waypoint until the agent comes within the
/// waypoint's arrival distance, then moves to the next.  The last waypoint is
/// held forever — agents finishing a journey inside an exit area are removed
/// by the exit system, everyone else keeps steering at the final point.
#[derive(Clone, Debug, Default)]
pub struct SimpleJourney {
    waypoints: Vec<(Point, f64)>,
    current: usize,
}

impl SimpleJourney {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_waypoint(&mut self, p: Point, arrival_distance: f64) -> &mut Self {
        self.waypoints.push((p, arrival_distance));
        self
    }

    fn destination(&mut self, pos: Point) -> AgentResult<Point> {
        if self.waypoints.is_empty() {
            return Err(AgentError::EmptyJourney);
        }
        let (target, arrival_distance) = self.waypoints[self.current];
        if pos.distance_to(target) <= arrival_distance && self.current + 1 < self.waypoints.len() {
            self.current += 1;
        }
        Ok(self.waypoints[self.current].0)
    }
}

// ── BranchingJourney ──────────────────────────────────────────────────────────

/// One stage of a branching journey: head for `area`; on arrival, pick the
/// next stage from `branches` with probability proportional to weight.
#[derive(Clone, Debug)]
pub struct BranchingStage {
    pub area: AreaId,
    /// `(next_stage_index, weight)` pairs.  Empty means terminal stage.
    pub branches: Vec<(usize, f64)>,
}

/// A staged area-to-area journey with weighted branch selection.
///
/// Branch choices are drawn from the owning agent's deterministic RNG, so a
/// run is reproducible and the choice cannot depend on agent iteration order.
#[derive(Clone, Debug)]
pub struct BranchingJourney {
    stages: Vec<BranchingStage>,
    current: usize,
}

impl BranchingJourney {
    /// # Errors
    ///
    /// `EmptyJourney` if no stages are given; `InvalidBranch` if any branch
    /// points outside the stage list.
    pub fn new(stages: Vec<BranchingStage>) -> AgentResult<Self> {
        if stages.is_empty() {
            return Err(AgentError::EmptyJourney);
        }
        for (i, stage) in stages.iter().enumerate() {
            for &(next, _) in &stage.branches {
                if next >= stages.len() {
                    return Err(AgentError::InvalidBranch { stage: i, target: next });
                }
            }
        }
        Ok(Self { stages, current: 0 })
    }

    pub fn current_stage(&self) -> usize {
        self.current
    }

    pub(crate) fn destination(
        &mut self,
        pos: Point,
        areas: &AreaMap,
        rng: &mut AgentRng,
    ) -> AgentResult<Point> {
        let stage = &self.stages[self.current];
        let area = areas
            .get(&stage.area)
            .ok_or(AgentError::UnknownArea(stage.area))?;

        if area.contains(pos) && !stage.branches.is_empty() {
            let weights: Vec<f64> = stage.branches.iter().map(|&(_, w)| w).collect();
            let pick = rng.choose_weighted_index(&weights);
            self.current = stage.branches[pick].0;
        }

        let target = &self.stages[self.current].area;
        let area = areas.get(target).ok_or(AgentError::UnknownArea(*target))?;
        Ok(area.centroid())
    }
}

// ── Behaviour ─────────────────────────────────────────────────────────────────

/// The closed set of journey behaviours an agent can own.
#[derive(Clone, Debug)]
pub enum Behaviour {
    Simple(SimpleJourney),
    Branching(BranchingJourney),
}

impl Behaviour {
    /// The point this agent should currently head for, advancing journey
    /// progress as a side effect when the agent has arrived at its current
    /// target.
    pub fn destination(
        &mut self,
        pos: Point,
        areas: &AreaMap,
        rng: &mut AgentRng,
    ) -> AgentResult<Point> {
        match self {
            Behaviour::Simple(journey) => journey.destination(pos),
            Behaviour::Branching(journey) => journey.destination(pos, areas, rng),
        }
    }

    /// The initial target before the first strategic phase has run — used to
    /// orient a freshly created agent.
    pub fn first_target(&self, areas: &AreaMap) -> AgentResult<Point> {
        match self {
            Behaviour::Simple(journey) => journey
                .waypoints
                .first()
                .map(|&(p, _)| p)
                .ok_or(AgentError::EmptyJourney),
            Behaviour::Branching(journey) => {
                let id = journey.stages[0].area;
                areas
                    .get(&id)
                    .map(|a| a.centroid())
                    .ok_or(AgentError::UnknownArea(id))
            }
        }
    }
}

impl From<SimpleJourney> for Behaviour {
    fn from(journey: SimpleJourney) -> Self {
        Behaviour::Simple(journey)
    }
}

impl From<BranchingJourney> for Behaviour {
    fn from(journey: BranchingJourney) -> Self {
        Behaviour::Branching(journey)
    }
}
