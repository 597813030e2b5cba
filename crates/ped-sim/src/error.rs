use ped_agent::AgentError;
use ped_core::AgentId;
use ped_model::ModelError;
use ped_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// A routing engine broke the waypoint-sequence contract (fewer than two
    /// points).  This is a programming error in the engine, not a runtime
    /// condition, so the step fails instead of guessing a steering target.
    #[error("routing engine returned {points} waypoint(s) for {agent}; at least 2 required")]
    WaypointContract { agent: AgentId, points: usize },

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
