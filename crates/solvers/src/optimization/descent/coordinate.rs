//! Cyclic coordinate descent.
//!
//! Each iteration runs one line search along every basis axis in turn, moving
//! the point after each axis. The search direction for axis `k` is
//! `axis_scale · e_k`.

use extremal_core::{Objective, Observer};
use log::{debug, trace};

use crate::optimization::{DEFAULT_EPSILON, is_valid_epsilon, line_search};

use super::{Action, ConfigError, Event, Progress, Solution, Status, Step};

/// Configuration for coordinate descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    axis_scale: f64,
    line: line_search::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iters: 1024,
            axis_scale: 1.0,
            line: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive,
    /// `max_iters` is zero, or `axis_scale` is non-finite or zero.
    pub fn new(
        epsilon: f64,
        max_iters: usize,
        axis_scale: f64,
        line: line_search::Config,
    ) -> Result<Self, ConfigError> {
        if !is_valid_epsilon(epsilon) {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !axis_scale.is_finite() || axis_scale == 0.0 {
            return Err(ConfigError::AxisScale);
        }
        Ok(Self {
            epsilon,
            max_iters,
            axis_scale,
            line,
        })
    }

    /// Returns the distance between successive points that counts as converged.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of sweeps over all axes.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the length of the per-axis search direction.
    #[must_use]
    pub fn axis_scale(&self) -> f64 {
        self.axis_scale
    }

    /// Returns the line search settings.
    #[must_use]
    pub fn line(&self) -> &line_search::Config {
        &self.line
    }
}

/// Minimizes the objective from `start` by cyclic coordinate descent.
pub fn minimize<O, Obs>(
    objective: &O,
    start: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Solution<O::Snapshot>
where
    O: Objective<[f64]> + ?Sized,
    Obs: for<'a> Observer<Event<'a, O::Snapshot>, Action>,
{
    let dim = start.len();
    let mut progress = Progress::start(objective, start);

    for iter in 0..config.max_iters() {
        let begin = progress.x.clone();

        for axis in 0..dim {
            let mut direction = vec![0.0; dim];
            direction[axis] = config.axis_scale();
            let line =
                line_search::along_unchecked(objective, &progress.x, &direction, config.line());
            progress.accept(line);
        }
        trace!("coordinate descent {iter}: value {}", progress.value);

        let step = Step {
            iter,
            start: begin,
            end: progress.x.clone(),
            gradient: None,
            beta: None,
        };
        if let Some(status) = progress.finish_iteration(step, config.epsilon(), &mut observer) {
            debug!("coordinate descent stopped after {} iterations: {status:?}", iter + 1);
            return progress.into_solution(status, iter + 1);
        }
    }

    debug!("coordinate descent hit the iteration limit {}", config.max_iters());
    progress.into_solution(Status::MaxIters, config.max_iters())
}

/// Minimizes the objective by coordinate descent without observer support.
pub fn minimize_unobserved<O>(
    objective: &O,
    start: &[f64],
    config: &Config,
) -> Solution<O::Snapshot>
where
    O: Objective<[f64]> + ?Sized,
{
    minimize(objective, start, config, ())
}
