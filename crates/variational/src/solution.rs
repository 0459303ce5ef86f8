use extremal_core::{LinearInterpolator, Point};

use crate::Integrand;

/// A strategy for solving a two-point variational problem.
///
/// Implementations are stateless between calls: each solve builds fresh
/// traces, so solving twice with the same inputs gives the same result.
pub trait VariationalSolver {
    /// Solver-specific diagnostics returned with every solution.
    type Trace;

    /// Finds `x(t)` connecting `start` and `end` for the given integrand.
    fn solve<I>(&self, integrand: &I, start: Point, end: Point) -> Solution<Self::Trace>
    where
        I: Integrand + ?Sized;
}

/// The trial trajectories of one solve.
///
/// Every trajectory the solver evaluated is kept in evaluation order, and the
/// accepted one comes last.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Trajectories evaluated and discarded, in order.
    pub rejected: Vec<LinearInterpolator>,

    /// The trajectory the solver settled on.
    pub accepted: LinearInterpolator,

    /// Solver-specific diagnostics.
    pub trace: T,
}

impl<T> Solution<T> {
    /// Returns the accepted trajectory.
    #[must_use]
    pub fn accepted(&self) -> &LinearInterpolator {
        &self.accepted
    }

    /// Iterates over all trials: the rejected ones, then the accepted one.
    pub fn trials(&self) -> impl Iterator<Item = &LinearInterpolator> {
        self.rejected.iter().chain(std::iter::once(&self.accepted))
    }

    /// Returns the number of trials, the accepted one included.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.rejected.len() + 1
    }

    /// Consumes the solution and returns all trials, accepted last.
    #[must_use]
    pub fn into_trials(self) -> Vec<LinearInterpolator> {
        let mut trials = self.rejected;
        trials.push(self.accepted);
        trials
    }

    /// Replaces the trace, keeping the trials.
    pub fn map_trace<U>(self, f: impl FnOnce(T) -> U) -> Solution<U> {
        Solution {
            rejected: self.rejected,
            accepted: self.accepted,
            trace: f(self.trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(slope: f64) -> LinearInterpolator {
        LinearInterpolator::new([Point::new(0.0, 0.0), Point::new(1.0, slope)])
    }

    #[test]
    fn accepted_trial_is_last() {
        let solution = Solution {
            rejected: vec![line(2.0), line(0.5)],
            accepted: line(1.0),
            trace: (),
        };

        assert_eq!(solution.trial_count(), 3);
        assert_eq!(solution.trials().last(), Some(&line(1.0)));
        assert_eq!(solution.accepted(), &line(1.0));

        let trials = solution.into_trials();
        assert_eq!(trials.len(), 3);
        assert_eq!(trials[0], line(2.0));
        assert_eq!(trials[2], line(1.0));
    }

    #[test]
    fn map_trace_keeps_trials() {
        let solution = Solution {
            rejected: vec![],
            accepted: line(1.0),
            trace: 7,
        };

        let mapped = solution.map_trace(|n| n.to_string());

        assert_eq!(mapped.trace, "7");
        assert_eq!(mapped.trial_count(), 1);
    }
}
