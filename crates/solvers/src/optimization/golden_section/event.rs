use crate::optimization::Sample;

use super::Step;

/// Event emitted once per golden section step.
///
/// `step` holds the bracket and both probe values before the shrink.
/// `latest` is the evaluation made during this step, snapshot included.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// The step about to be applied.
    pub step: &'a Step,

    /// The most recent probe evaluation.
    pub latest: &'a Sample<f64, S>,
}

impl<S> Event<'_, S> {
    /// Returns the smaller of the two probe values.
    #[must_use]
    pub fn best_value(&self) -> f64 {
        self.step.y1.min(self.step.y2)
    }
}

/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and report the midpoint of the current bracket.
    StopEarly,
}
