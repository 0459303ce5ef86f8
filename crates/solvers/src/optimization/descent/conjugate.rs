//! Conjugate-direction descent (Fletcher–Reeves).
//!
//! Each iteration computes the forward-difference gradient `g` at the current
//! point and searches along
//!
//! ```text
//! s₀ = −rate·g₀
//! sₖ = −rate·gₖ + βₖ·sₖ₋₁,   βₖ = ‖gₖ‖² / ‖gₖ₋₁‖²
//! ```
//!
//! The first iteration is plain steepest descent.

use extremal_core::{Objective, Observer};
use log::{debug, trace};

use crate::{
    finite_difference,
    optimization::{DEFAULT_EPSILON, is_valid_epsilon, line_search},
};

use super::{Action, ConfigError, Event, Progress, Solution, Status, Step};

/// Configuration for conjugate-direction descent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
    rate: f64,
    gradient_step: f64,
    line: line_search::Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iters: 4095,
            rate: 1.0,
            gradient_step: DEFAULT_EPSILON,
            line: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` or `rate` is non-finite or not positive,
    /// `max_iters` is zero, or `gradient_step` is non-finite or zero.
    pub fn new(
        epsilon: f64,
        max_iters: usize,
        rate: f64,
        gradient_step: f64,
        line: line_search::Config,
    ) -> Result<Self, ConfigError> {
        if !is_valid_epsilon(epsilon) {
            return Err(ConfigError::Epsilon);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::Rate);
        }
        if !gradient_step.is_finite() || gradient_step == 0.0 {
            return Err(ConfigError::GradientStep);
        }
        Ok(Self {
            epsilon,
            max_iters,
            rate,
            gradient_step,
            line,
        })
    }

    /// Returns the distance between successive points that counts as converged.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the gradient multiplier used to build search directions.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the finite-difference step for the gradient.
    #[must_use]
    pub fn gradient_step(&self) -> f64 {
        self.gradient_step
    }

    /// Returns the line search settings.
    #[must_use]
    pub fn line(&self) -> &line_search::Config {
        &self.line
    }
}

/// Minimizes the objective from `start` by conjugate-direction descent.
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
    let mut progress = Progress::start(objective, start);

    // Gradient and direction of the previous iteration.
    let mut previous: Option<(Vec<f64>, Vec<f64>)> = None;

    for iter in 0..config.max_iters() {
        let begin = progress.x.clone();
        let gradient = finite_difference::gradient(objective, &begin, config.gradient_step());

        let (direction, beta) = match &previous {
            None => (scaled(&gradient, -config.rate()), None),
            Some((last_gradient, last_direction)) => {
                let beta = squared_norm(&gradient) / squared_norm(last_gradient);
                let direction: Vec<f64> = gradient
                    .iter()
                    .zip(last_direction)
                    .map(|(g, s)| -config.rate() * g + beta * s)
                    .collect();
                (direction, Some(beta))
            }
        };

        let line = line_search::along_unchecked(objective, &begin, &direction, config.line());
        progress.accept(line);
        trace!("conjugate descent {iter}: value {}, beta {beta:?}", progress.value);

        let step = Step {
            iter,
            start: begin,
            end: progress.x.clone(),
            gradient: Some(gradient.clone()),
            beta,
        };
        if let Some(status) = progress.finish_iteration(step, config.epsilon(), &mut observer) {
            debug!("conjugate descent stopped after {} iterations: {status:?}", iter + 1);
            return progress.into_solution(status, iter + 1);
        }

        previous = Some((gradient, direction));
    }

    debug!("conjugate descent hit the iteration limit {}", config.max_iters());
    progress.into_solution(Status::MaxIters, config.max_iters())
}

/// Minimizes the objective by conjugate-direction descent without observer
/// support.
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

fn scaled(v: &[f64], factor: f64) -> Vec<f64> {
    v.iter().map(|x| factor * x).collect()
}

fn squared_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum()
}
