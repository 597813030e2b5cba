use ped_core::{AgentId, AreaId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent {0} not found")]
    UnknownAgent(AgentId),

    #[error("agent {id} has invalid desired speed v0 = {v0} (must be > 0)")]
    InvalidDesiredSpeed { id: AgentId, v0: f64 },

    #[error("invalid ellipse semi-axes ({semi_axis_a}, {semi_axis_b}) — both must be > 0")]
    InvalidEllipse { semi_axis_a: f64, semi_axis_b: f64 },

    #[error("journey has no waypoints or stages")]
    EmptyJourney,

    #[error("journey stage {stage} branches to non-existent stage {target}")]
    InvalidBranch { stage: usize, target: usize },

    #[error("journey references unknown area {0}")]
    UnknownArea(AreaId),
}

pub type AgentResult<T> = Result<T, AgentError>;
