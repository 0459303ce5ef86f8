//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasRecord`] — events that carry the solver's trace record for the step
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use extremal_core::Observer;
//! use extremal_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.objective().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use extremal_solvers::{
    optimization::{descent, golden_section},
    trace::Record,
    transient::euler,
};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries the trace record of the step it reports.
pub trait HasRecord {
    /// The solver's record type.
    type Record: Record;

    /// Returns the record for this event.
    fn record(&self) -> &Self::Record;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- golden_section ---

impl<S> HasObjective for golden_section::Event<'_, S> {
    /// The best of the two probe values.
    fn objective(&self) -> f64 {
        self.best_value()
    }
}

impl<S> HasRecord for golden_section::Event<'_, S> {
    type Record = golden_section::Step;

    fn record(&self) -> &golden_section::Step {
        self.step
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- descent ---

impl<S> HasObjective for descent::Event<'_, S> {
    fn objective(&self) -> f64 {
        self.value
    }
}

impl<S> HasRecord for descent::Event<'_, S> {
    type Record = descent::Step;

    fn record(&self) -> &descent::Step {
        self.step
    }
}

impl CanStopEarly for descent::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- euler ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
