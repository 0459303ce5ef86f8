use crate::{
    optimization::{Sample, golden_section},
    trace::Trace,
};

/// Indicates how the line search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A bracket was found and refined.
    Converged,

    /// The step doubling limit was reached; the last bracket was refined anyway.
    ExpansionLimit,

    /// Neither direction decreased the value down to the smallest probe step.
    /// The start point is returned unchanged.
    NoImprovement,
}

/// The result of a line search.
///
/// `P` is the position type: `f64` for scalar searches and `Vec<f64>` for
/// searches along a direction.
#[derive(Debug, Clone)]
pub struct LineSolution<P, S> {
    /// How the search ended.
    pub status: Status,

    /// The reported minimizer.
    pub point: P,

    /// Objective value at `point`.
    pub value: f64,

    /// Snapshot captured when evaluating `point`.
    pub snapshot: S,

    /// Every probe evaluated during bracketing and refinement, in order.
    /// The final evaluation at `point` is not included.
    pub samples: Vec<Sample<P, S>>,

    /// Golden section steps of the refinement, if one ran.
    pub refinement: Option<Trace<golden_section::Step>>,
}

impl<P, S> LineSolution<P, S> {
    /// Returns `true` if the search moved away from the start point.
    #[must_use]
    pub fn improved(&self) -> bool {
        self.status != Status::NoImprovement
    }

    /// Number of objective evaluations, the final one included.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.samples.len() + 1
    }
}
