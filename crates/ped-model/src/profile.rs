//! Parameter profiles — named coefficient sets applied per agent.
//!
//! Agents carry a `ProfileId`; the registry resolves it to the coefficients
//! the operational model should use for that agent.  Distinct populations
//! (commuters vs. children, staff vs. visitors) get distinct profiles within
//! one simulation.

use ped_core::ProfileId;

use crate::{ModelError, ModelResult};

/// Force-model coefficients for one agent population.
#[derive(Clone, Debug)]
pub struct ParameterProfile {
    /// Driving-force relaxation time in seconds.
    pub tau: f64,

    /// Neighborhood query radius in metres.  Also the cut-off beyond which
    /// other agents exert no force.  The simulation builder checks this
    /// against the grid cell size.
    pub interaction_radius: f64,

    /// Agent–agent repulsion strength (m/s² at zero border distance).
    pub ped_strength: f64,
    /// Agent–agent repulsion decay length in metres.
    pub ped_range: f64,

    /// Agent–wall repulsion strength.
    pub wall_strength: f64,
    /// Agent–wall repulsion decay length in metres.
    pub wall_range: f64,

    /// Hard speed cap as a multiple of the agent's `v0`.
    pub max_speed_factor: f64,

    /// Maximum orientation swing in radians per second, reached only after
    /// the turning ramp (below) has filled up.
    pub max_turn_rate: f64,
    /// Steps over which the permitted turn rate ramps from zero back to
    /// `max_turn_rate` after the steering direction jumps.
    pub turn_ramp_steps: u32,

    /// Headway time gap in seconds (velocity model only): speed is limited
    /// to clearing the gap to the agent ahead in this time.
    pub time_gap: f64,
}

impl Default for ParameterProfile {
    fn default() -> Self {
        Self {
            tau: 0.5,
            interaction_radius: 2.0,
            ped_strength: 5.0,
            ped_range: 0.3,
            wall_strength: 8.0,
            wall_range: 0.2,
            max_speed_factor: 1.3,
            max_turn_rate: std::f64::consts::PI,
            turn_ramp_steps: 10,
            time_gap: 1.0,
        }
    }
}

impl ParameterProfile {
    /// Reject coefficient sets the models cannot integrate with.
    pub fn validate(&self, id: ProfileId) -> ModelResult<()> {
        let positive = [
            self.tau,
            self.interaction_radius,
            self.ped_range,
            self.wall_range,
            self.max_speed_factor,
            self.max_turn_rate,
            self.time_gap,
        ];
        if positive.iter().any(|&v| v <= 0.0 || !v.is_finite())
            || self.ped_strength < 0.0
            || self.wall_strength < 0.0
        {
            return Err(ModelError::InvalidProfile(id));
        }
        Ok(())
    }
}

// ── ProfileRegistry ───────────────────────────────────────────────────────────

/// All parameter profiles of a simulation, indexed by `ProfileId`.
#[derive(Default)]
pub struct ProfileRegistry {
    profiles: Vec<ParameterProfile>,
}

impl ProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile and return its id.
    pub fn add(&mut self, profile: ParameterProfile) -> ProfileId {
        let id = ProfileId(self.profiles.len() as u16);
        self.profiles.push(profile);
        id
    }

    pub fn get(&self, id: ProfileId) -> ModelResult<&ParameterProfile> {
        self.profiles
            .get(id.index())
            .ok_or(ModelError::UnknownProfile(id))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The largest interaction radius across all profiles — what the grid
    /// cell size must accommodate.
    pub fn max_interaction_radius(&self) -> f64 {
        self.profiles
            .iter()
            .map(|p| p.interaction_radius)
            .fold(0.0, f64::max)
    }

    /// Validate every registered profile.
    pub fn validate_all(&self) -> ModelResult<()> {
        for (i, profile) in self.profiles.iter().enumerate() {
            profile.validate(ProfileId(i as u16))?;
        }
        Ok(())
    }
}
