//! `ped-model` — the operational layer: force models and their parameters.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`profile`]  | `ParameterProfile`, `ProfileRegistry`                     |
//! | [`model`]    | `OperationalModel` trait, `ModelContext`, `AgentUpdate`   |
//! | [`gcfm`]     | `GcfmModel` — generalized-centrifugal-force variant       |
//! | [`velocity`] | `VelocityModel` — headway-limited velocity variant        |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                            |
//!
//! # The model contract
//!
//! A model is called once per agent per step with a read-only view of the
//! world as it stood at step start (the agent itself, its neighbors, the
//! geometry, its parameter profile) and returns the agent's next kinematic
//! state as an [`AgentUpdate`].  Models never write — the simulation commits
//! all updates after every agent has been evaluated, which is what makes the
//! evaluation safe to parallelize and independent of agent order.

pub mod error;
pub mod gcfm;
pub mod model;
pub mod profile;
pub mod velocity;

#[cfg(test)]
mod tests;

pub use error::{ModelError, ModelResult};
pub use gcfm::GcfmModel;
pub use model::{AgentUpdate, ModelContext, OperationalModel};
pub use profile::{ParameterProfile, ProfileRegistry};
pub use velocity::VelocityModel;
