use extremal_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once the observed objective drops to a target.
///
/// Useful when any value below the target is good enough and further
/// refinement is wasted work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    target: f64,
    reached: bool,
}

impl Threshold {
    /// Creates an observer that stops at or below `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            reached: false,
        }
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Returns `true` once the target has been reached.
    #[must_use]
    pub fn reached(&self) -> bool {
        self.reached
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Threshold {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.objective() <= self.target {
            self.reached = true;
            return Some(A::stop_early());
        }
        None
    }
}
