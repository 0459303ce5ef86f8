//! Multivariate minimizers built from repeated line searches.
//!
//! Both variants start from a point, run [line searches](super::line_search)
//! until successive iterates are within `ε` of each other, and record one
//! [`Step`] per iteration:
//!
//! - [`coordinate`] searches along each basis axis in turn.
//! - [`conjugate`] searches along a conjugate direction built from the
//!   forward-difference gradient (Fletcher–Reeves).
//!
//! [`Descent`] is the closed set of both variants with their configs, for
//! callers that choose the method at runtime.
//!
//! # Observer Events
//!
//! Each iteration emits one [`Event`] after its line searches finish.
//! Observers can return [`Action::StopEarly`] to end the descent at the
//! current point.

pub mod conjugate;
pub mod coordinate;

mod event;
mod solution;
mod step;


pub use event::{Action, Event};
pub use solution::{Solution, Status};
pub use step::Step;

use extremal_core::{Evaluation, Objective, Observer};
use thiserror::Error;

use crate::trace::Trace;

use super::{distance, line_search};

/// Errors that can occur when validating a descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("axis_scale must be finite and non-zero")]
    AxisScale,

    #[error("rate must be finite and positive")]
    Rate,

    #[error("gradient_step must be finite and non-zero")]
    GradientStep,
}

/// A multivariate minimizer and its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Descent {
    /// Cyclic coordinate descent.
    Coordinate(coordinate::Config),

    /// Conjugate-direction descent.
    Conjugate(conjugate::Config),
}

impl Default for Descent {
    fn default() -> Self {
        Self::Coordinate(coordinate::Config::default())
    }
}

impl Descent {
    /// Minimizes the objective from `start` with the selected variant.
    pub fn minimize<O, Obs>(
        &self,
        objective: &O,
        start: &[f64],
        observer: Obs,
    ) -> Solution<O::Snapshot>
    where
        O: Objective<[f64]> + ?Sized,
        Obs: for<'a> Observer<Event<'a, O::Snapshot>, Action>,
    {
        match self {
            Self::Coordinate(config) => coordinate::minimize(objective, start, config, observer),
            Self::Conjugate(config) => conjugate::minimize(objective, start, config, observer),
        }
    }

    /// Minimizes the objective without observer support.
    pub fn minimize_unobserved<O>(&self, objective: &O, start: &[f64]) -> Solution<O::Snapshot>
    where
        O: Objective<[f64]> + ?Sized,
    {
        self.minimize(objective, start, ())
    }

    /// Returns the convergence tolerance of the selected variant.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        match self {
            Self::Coordinate(config) => config.epsilon(),
            Self::Conjugate(config) => config.epsilon(),
        }
    }
}

/// Iteration state shared by both variants.
struct Progress<S> {
    x: Vec<f64>,
    value: f64,
    snapshot: S,
    trace: Trace<Step>,
}

impl<S> Progress<S> {
    fn start<O>(objective: &O, start: &[f64]) -> Self
    where
        O: Objective<[f64], Snapshot = S> + ?Sized,
    {
        let Evaluation { value, snapshot } = objective.evaluate(start);
        Self {
            x: start.to_vec(),
            value,
            snapshot,
            trace: Trace::new(),
        }
    }

    /// Moves to the result of a line search.
    fn accept(&mut self, line: line_search::LineSolution<Vec<f64>, S>) {
        self.x = line.point;
        self.value = line.value;
        self.snapshot = line.snapshot;
    }

    /// Records a finished iteration and decides whether to stop.
    ///
    /// Returns the final status if the iteration ends the descent.
    fn finish_iteration<Obs>(
        &mut self,
        step: Step,
        epsilon: f64,
        observer: &mut Obs,
    ) -> Option<Status>
    where
        Obs: for<'a> Observer<Event<'a, S>, Action>,
    {
        let converged = distance(&step.start, &step.end) <= epsilon;
        let action = observer.observe(&Event {
            step: &step,
            value: self.value,
            snapshot: &self.snapshot,
        });
        self.trace.push(step);

        if action == Some(Action::StopEarly) {
            return Some(Status::StoppedByObserver);
        }
        converged.then_some(Status::Converged)
    }

    fn into_solution(self, status: Status, iters: usize) -> Solution<S> {
        Solution {
            status,
            x: self.x,
            value: self.value,
            snapshot: self.snapshot,
            iters,
            trace: self.trace,
        }
    }
}
