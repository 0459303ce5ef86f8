use crate::trace::Trace;

use super::Step;

/// Indicates why the descent stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Successive points were within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a descent.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// Final solver status.
    pub status: Status,

    /// The final point.
    pub x: Vec<f64>,

    /// Objective value at `x`.
    pub value: f64,

    /// Snapshot captured at `x`.
    pub snapshot: S,

    /// Number of completed iterations.
    pub iters: usize,

    /// One record per iteration.
    pub trace: Trace<Step>,
}
