//! Simulation observer trait for progress reporting and data collection.

use ped_agent::AgentArena;
use ped_core::{AgentId, SimClock};

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: u64, agent_count: usize) {
///         if step % self.interval == 0 {
///             println!("step {step}: {agent_count} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _step: u64) {}

    /// Called when agents left through an exit area this step.
    ///
    /// `exited` is sorted ascending and never empty.  Not called on steps
    /// where nobody exits.
    fn on_agents_exited(&mut self, _step: u64, _exited: &[AgentId]) {}

    /// Called at the end of each step with the live agent count.
    fn on_step_end(&mut self, _step: u64, _agent_count: usize) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_steps`
    /// steps, after the step has been committed).
    ///
    /// Provides read-only access to the full agent state so output writers
    /// can record a trajectory frame without the simulation knowing about
    /// any specific format.
    fn on_snapshot(&mut self, _clock: &SimClock, _agents: &AgentArena) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _clock: &SimClock) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
