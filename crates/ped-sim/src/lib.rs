//! `ped-sim` — step loop orchestrator for the rust_ped framework.
//!
//! # The five-phase step
//!
//! ```text
//! iterate():
//!   ① Grid        — rebuild the neighborhood grid from agent positions.
//!   ② Exit        — remove agents standing inside an exit area.
//!   ③ Strategic   — behaviours refresh each agent's destination.
//!   ④ Tactical    — the routing engine picks the next waypoint
//!                   (corner cutting included).
//!   ⑤ Operational — the force model is evaluated read-only for every
//!                   agent, then all updates are committed in arena order.
//!   clock.advance()
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs the operational evaluation on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ped_core::SimConfig;
//! use ped_model::GcfmModel;
//! use ped_sim::{NoopObserver, SimulationBuilder};
//! use ped_spatial::DirectRoutingEngine;
//!
//! let mut sim = SimulationBuilder::new(config, GcfmModel::new(), DirectRoutingEngine)
//!     .areas(areas)
//!     .geometry(geometry)
//!     .build()?;
//! sim.add_agents(specs)?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

mod exit;
mod operational;
mod strategic;
mod tactical;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulation;
