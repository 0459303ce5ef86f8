/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The state at one time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<S> {
    /// Time coordinate.
    pub t: f64,

    /// Integrated state.
    pub state: S,
}

/// The result of an Euler integration.
#[derive(Debug, Clone)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// History of snapshots from each step (including initial state).
    pub history: Vec<Snapshot<S>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<S> Solution<S> {
    /// Returns the last snapshot.
    ///
    /// The history always holds at least the initial state.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot<S>> {
        self.history.last()
    }
}
