//! Simulation time model.
//!
//! # Design
//!
//! Time is represented as a monotonically increasing step counter plus a
//! fixed step width `dt`:
//!
//!   elapsed_secs = step * dt_secs
//!
//! Keeping the integer step as the canonical unit means two runs with the
//! same step count have compared the same number of force evaluations — the
//! determinism tests rely on that, not on accumulated floating-point time.

use std::fmt;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current simulation step and maps it to elapsed seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Seconds of simulated time one step integrates over.
    pub dt_secs: f64,
    /// The current step — advanced once at the end of every `iterate()`.
    pub step: u64,
}

impl SimClock {
    /// Create a clock at step 0 with the given step width.
    pub fn new(dt_secs: f64) -> Self {
        Self { dt_secs, step: 0 }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.step += 1;
    }

    /// Elapsed simulated seconds since step 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.step as f64 * self.dt_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} ({:.2} s)", self.step, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Validated as a whole by the simulation builder; the cross-parameter
/// constraints (cell size vs. interaction radius, positive `dt`) live there,
/// next to the other build-time checks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Integration step width in seconds.  Must be positive.
    pub dt_secs: f64,

    /// Total steps a `run()` call simulates.
    pub total_steps: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Neighborhood-grid cell size in metres.  Must be at least as large as
    /// the biggest parameter-profile interaction radius, otherwise radius
    /// queries could miss agents in non-adjacent cells.
    pub cell_size: f64,

    /// How far the tactical layer pulls the immediate waypoint away from a
    /// corner vertex (metres), so agents round corners instead of grazing
    /// them.
    pub corner_cut_distance: f64,

    /// Emit an observer snapshot every N steps.  0 disables snapshots.
    pub snapshot_interval_steps: u64,

    /// Worker thread count for the parallel force phase.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.dt_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt_secs: 0.05,
            total_steps: 0,
            seed: 0,
            cell_size: 2.2,
            corner_cut_distance: 1.2,
            snapshot_interval_steps: 0,
            num_threads: None,
        }
    }
}
