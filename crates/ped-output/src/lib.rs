//! `ped-output` — simulation output writers for the rust_ped framework.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                | Contents                                         |
//! |---------------------|--------------------------------------------------|
//! | `trajectories.csv`  | One row per agent per snapshot frame             |
//! | `step_summaries.csv`| One row per step: agent count, exits, sim time   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `ped_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ped_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryObserver::new(writer, config.dt_secs);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::{StepSummaryRow, TrajectoryRow};
pub use writer::OutputWriter;
