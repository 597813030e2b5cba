//! `ped-agent` — per-agent state and its owning storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ellipse`] | `Ellipse` — the oriented body shape used by force models   |
//! | [`journey`] | `Behaviour` — journey variants producing the current goal  |
//! | [`agent`]   | `Agent`, `AgentSpec` — mutable per-entity state            |
//! | [`arena`]   | `AgentArena` — dense storage with stable-id indirection    |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                             |
//!
//! # Ownership model
//!
//! The arena exclusively owns every `Agent`; each `Agent` exclusively owns
//! its `Behaviour` and its RNG.  Everything else in the framework refers to
//! agents by `AgentId` and resolves through the arena, so removal can never
//! leave a dangling reference — a stale id simply stops resolving.

pub mod agent;
pub mod arena;
pub mod ellipse;
pub mod error;
pub mod journey;


pub use agent::{Agent, AgentSpec};
pub use arena::AgentArena;
pub use ellipse::Ellipse;
pub use error::{AgentError, AgentResult};
pub use journey::{Behaviour, BranchingJourney, BranchingStage, SimpleJourney};
