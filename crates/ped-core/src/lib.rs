//! `ped-core` — foundational types for the `rust_ped` pedestrian dynamics
//! framework.
//!
//! This crate is a dependency of every other `ped-*` crate.  It intentionally
//! has no `ped-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `AgentId`, `AreaId`, `ProfileId`, `WaypointId`    |
//! | [`point`] | `Point` — 2-D Cartesian vector math (metres)      |
//! | [`time`]  | `SimClock`, `SimConfig`                           |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (scenario setup) |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, AreaId, ProfileId, WaypointId};
pub use point::Point;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig};
