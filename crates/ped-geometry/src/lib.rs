//! `ped-geometry` — the static environment agents move through.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`segment`]  | `LineSegment` — wall pieces, point-to-segment distance   |
//! | [`area`]     | `Area` polygons (goal/exit regions), `AreaMap`           |
//! | [`geometry`] | `Geometry` — wall set + R-tree radius queries, builder   |
//! | [`error`]    | `GeometryError`, `GeometryResult<T>`                     |
//!
//! Everything here is read-only from the simulation pipeline's perspective:
//! geometry and areas are built once before the run and only queried per
//! step.

pub mod area;
pub mod error;
pub mod geometry;
pub mod segment;

#[cfg(test)]
mod tests;

pub use area::{Area, AreaKind, AreaMap};
pub use error::{GeometryError, GeometryResult};
pub use geometry::{Geometry, GeometryBuilder};
pub use segment::LineSegment;
