use super::Step;

/// Event emitted once per descent iteration.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// The iteration just completed.
    pub step: &'a Step,

    /// Objective value at `step.end`.
    pub value: f64,

    /// Snapshot captured at `step.end`.
    pub snapshot: &'a S,
}

/// Actions an observer can take during a descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the descent and report the current point.
    StopEarly,
}
