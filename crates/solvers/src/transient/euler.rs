//! Forward Euler solver for first-order systems.
//!
//! Steps any [`StepIntegrable`] state forward in time using explicit Euler:
//!
//! ```text
//! state_{n+1} = state_n + rhs(t_n, state_n) * dt
//! t_n         = t_0 + n * dt
//! ```
//!
//! Accuracy is first order in `dt`.
//!
//! # Example
//!
//! ```
//! use extremal_solvers::transient::euler;
//!
//! // x' = 2 from x(0) = 0
//! let solution = euler::solve_unobserved(&|_t: f64, _x: &f64| 2.0, 0.0, 0.0_f64, 0.1, 10);
//!
//! let last = solution.history.last().unwrap();
//! assert!((last.state - 2.0).abs() < 1e-12);
//! ```

mod event;
mod solution;

pub use event::{Action, Event};
pub use solution::{Snapshot, Solution, Status};

use extremal_core::{DerivativeOf, Observer, StepIntegrable};

/// Integrates `state' = rhs(t, state)` using forward Euler.
///
/// # Algorithm
///
/// 1. Record the initial snapshot at `t0` and emit it as step 0.
/// 2. For each step:
///    - Compute the derivative from the current time and state.
///    - Step the state forward: `state + derivative * dt`.
///    - Record the snapshot and emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
pub fn solve<S, F, Obs>(
    rhs: &F,
    t0: f64,
    initial: S,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Solution<S>
where
    S: StepIntegrable<f64> + Clone,
    F: Fn(f64, &S) -> DerivativeOf<S, f64> + ?Sized,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let mut history = Vec::with_capacity(steps + 1);
    history.push(Snapshot {
        t: t0,
        state: initial,
    });

    if emit(&mut observer, 0, &history) {
        return Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        };
    }

    for step in 1..=steps {
        let Some(current) = history.last() else {
            break;
        };
        let derivative = rhs(current.t, &current.state);
        let next = Snapshot {
            t: time_at(t0, dt, step),
            state: current.state.step(derivative, dt),
        };
        history.push(next);

        if emit(&mut observer, step, &history) {
            return Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            };
        }
    }

    Solution {
        status: Status::Complete,
        history,
        steps,
    }
}

/// Integrates `state' = rhs(t, state)` using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S, F>(rhs: &F, t0: f64, initial: S, dt: f64, steps: usize) -> Solution<S>
where
    S: StepIntegrable<f64> + Clone,
    F: Fn(f64, &S) -> DerivativeOf<S, f64> + ?Sized,
{
    solve(rhs, t0, initial, dt, steps, ())
}

/// Emits the latest snapshot and returns `true` if the observer asked to stop.
fn emit<S, Obs>(observer: &mut Obs, step: usize, history: &[Snapshot<S>]) -> bool
where
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    history.last().is_some_and(|snapshot| {
        observer.observe(&Event { step, snapshot }) == Some(Action::StopEarly)
    })
}

#[allow(clippy::cast_precision_loss)]
fn time_at(t0: f64, dt: f64, step: usize) -> f64 {
    t0 + step as f64 * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Position and velocity of a particle.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Motion {
        x: f64,
        v: f64,
    }

    #[derive(Debug, Clone, Copy)]
    struct MotionRate {
        dx: f64,
        dv: f64,
    }

    impl StepIntegrable<f64> for Motion {
        type Derivative = MotionRate;

        fn step(&self, derivative: MotionRate, dt: f64) -> Self {
            Motion {
                x: self.x + derivative.dx * dt,
                v: self.v + derivative.dv * dt,
            }
        }
    }

    #[test]
    fn constant_velocity_motion() {
        let rhs = |_t: f64, _x: &f64| 2.0;

        let solution = solve_unobserved(&rhs, 0.0, 0.0, 0.1, 10);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.history.len(), 11); // initial + 10 steps

        let last = solution.last().unwrap();
        assert_relative_eq!(last.state, 2.0, epsilon = 1e-12);
        assert_relative_eq!(last.t, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn constant_acceleration_is_first_order() {
        // x'' = 2 from rest: exact x(1) = 1; Euler lags by dt.
        let rhs = |_t: f64, s: &Motion| MotionRate { dx: s.v, dv: 2.0 };
        let initial = Motion { x: 0.0, v: 0.0 };

        let solution = solve_unobserved(&rhs, 0.0, initial, 0.01, 100);
        let last = solution.last().unwrap();

        assert_relative_eq!(last.state.v, 2.0, epsilon = 1e-9);
        assert_relative_eq!(last.state.x, 0.99, epsilon = 1e-9);
    }

    #[test]
    fn rhs_sees_current_time() {
        // x' = t from x(1) = 0
        let rhs = |t: f64, _x: &f64| t;

        let solution = solve_unobserved(&rhs, 1.0, 0.0, 0.5, 2);

        // 0 + 1.0·0.5 + 1.5·0.5
        assert_relative_eq!(solution.last().unwrap().state, 1.25);
        assert_relative_eq!(solution.history[1].t, 1.5);
    }

    #[test]
    fn observer_can_stop_early() {
        let rhs = |_t: f64, _x: &f64| 1.0;

        let observer = |event: &Event<'_, f64>| {
            if event.step >= 5 {
                Some(Action::StopEarly)
            } else {
                None
            }
        };

        let solution = solve(&rhs, 0.0, 0.0, 0.1, 100, observer);

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, 5);
        assert_eq!(solution.history.len(), 6); // initial + 5 steps
    }

    #[test]
    fn zero_steps_returns_initial() {
        let rhs = |_t: f64, _x: &f64| 1.0;

        let solution = solve_unobserved(&rhs, 0.0, 5.0, 0.1, 0);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 0);
        assert_eq!(solution.history.len(), 1);
        assert_relative_eq!(solution.history[0].state, 5.0);
    }

    #[test]
    fn step_numbers_start_at_zero() {
        let rhs = |_t: f64, _x: &f64| 1.0;

        let mut step_values = Vec::new();
        solve(&rhs, 0.0, 0.0, 0.25, 4, |event: &Event<'_, f64>| -> Option<Action> {
            step_values.push(event.step);
            None
        });

        assert_eq!(step_values, vec![0, 1, 2, 3, 4]);
    }
}
