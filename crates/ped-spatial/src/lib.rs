//! `ped-spatial` — agent neighborhood indexing and routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`grid`]   | `NeighborhoodSearch` — uniform grid, rebuilt every step       |
//! | [`router`] | `RoutingEngine` trait, `DirectRoutingEngine`, `GraphRoutingEngine` |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                            |

pub mod error;
pub mod grid;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use grid::NeighborhoodSearch;
pub use router::{DirectRoutingEngine, GraphRoutingEngine, GraphRoutingEngineBuilder, RoutingEngine};
