//! `TrajectoryObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ped_agent::AgentArena;
use ped_core::{AgentId, SimClock};
use ped_sim::SimObserver;

use crate::row::{StepSummaryRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes trajectory frames and step summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer: W,
    dt_secs: f64,
    /// Exits reported for the step currently in flight.
    exited_this_step: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    /// Create an observer backed by `writer`; `dt_secs` converts step
    /// numbers to elapsed seconds in the summary rows.
    pub fn new(writer: W, dt_secs: f64) -> Self {
        Self {
            writer,
            dt_secs,
            exited_this_step: 0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for TrajectoryObserver<W> {
    fn on_step_start(&mut self, _step: u64) {
        self.exited_this_step = 0;
    }

    fn on_agents_exited(&mut self, _step: u64, exited: &[AgentId]) {
        self.exited_this_step += exited.len() as u64;
    }

    fn on_step_end(&mut self, step: u64, agent_count: usize) {
        let row = StepSummaryRow {
            step,
            elapsed_secs: (step + 1) as f64 * self.dt_secs,
            agent_count: agent_count as u64,
            exited: self.exited_this_step,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, clock: &SimClock, agents: &AgentArena) {
        let rows: Vec<TrajectoryRow> = agents
            .iter()
            .map(|agent| TrajectoryRow {
                agent_id: agent.id.0,
                step: clock.step,
                x: agent.pos.x,
                y: agent.pos.y,
                orientation_x: agent.orientation.x,
                orientation_y: agent.orientation.y,
                speed: agent.speed,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_trajectories(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _clock: &SimClock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
