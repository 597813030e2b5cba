//! Plain data row types written by output backends.

/// One agent's kinematic state in a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub agent_id: u64,
    pub step: u64,
    pub x: f64,
    pub y: f64,
    /// Facing direction (unit vector).
    pub orientation_x: f64,
    pub orientation_y: f64,
    /// Scalar speed in m/s.
    pub speed: f64,
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step: u64,
    pub elapsed_secs: f64,
    /// Live agents after the step.
    pub agent_count: u64,
    /// Agents that left through an exit during the step.
    pub exited: u64,
}
