use crate::{optimization::Sample, trace::Trace};

use super::Step;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank below the configured tolerance.
    Converged,

    /// Reached the iteration limit before the bracket was narrow enough.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Objective value at `x`.
    pub value: f64,

    /// Snapshot captured when evaluating `x`.
    pub snapshot: S,

    /// Number of bracket shrinks performed.
    pub iters: usize,

    /// Every probe evaluation, in order. The final midpoint is not included.
    pub samples: Vec<Sample<f64, S>>,

    /// Per-step bracket records.
    pub trace: Trace<Step>,
}

impl<S> Solution<S> {
    /// Returns the final evaluation as a sample.
    #[must_use]
    pub fn best(&self) -> Sample<f64, &S> {
        Sample::new(self.x, self.value, &self.snapshot)
    }
}
