use ped_core::{AgentId, ProfileId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown parameter profile {0}")]
    UnknownProfile(ProfileId),

    #[error("parameter profile {0} has non-positive or non-finite coefficients")]
    InvalidProfile(ProfileId),

    #[error("agent {0} has zero desired speed — operational model cannot run")]
    ZeroDesiredSpeed(AgentId),
}

pub type ModelResult<T> = Result<T, ModelError>;
