use super::Snapshot;

/// Event emitted by the Euler solver for each snapshot.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug)]
pub struct Event<'a, S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time and state at this step.
    pub snapshot: &'a Snapshot<S>,
}

/// Control actions supported by the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the history so far.
    StopEarly,
}
