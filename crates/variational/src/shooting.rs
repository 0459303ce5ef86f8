//! The shooting method.
//!
//! Reads the integrand as the right-hand side of `x'' = f(t, x, x')` and
//! searches for the initial slope `z₀ = x'(t₀)` whose forward Euler trajectory
//! lands on the end point. The slope search is a
//! [bracketing line search](extremal_solvers::optimization::line_search) on
//! `|x₁ − x(t₁)|`; every trajectory it integrates is kept as a trial.
//!
//! Accuracy is first order in the step size `(t₁ − t₀) / steps`.

mod config;
mod trajectory;


pub use config::{Config, ConfigError};

use extremal_core::Point;
use extremal_solvers::{
    optimization::{golden_section, line_search},
    trace::Trace,
};
use log::debug;

use crate::{Integrand, Solution, VariationalSolver};

use trajectory::Miss;

/// Diagnostics of a shooting solve.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingTrace {
    /// The accepted initial slope.
    pub slope: f64,

    /// Signed miss distance `x₁ − x(t₁)` of the accepted trajectory.
    pub residual: f64,

    /// How the slope search ended.
    pub status: line_search::Status,

    /// `(slope, residual)` for every rejected trial, in evaluation order.
    pub samples: Vec<(f64, f64)>,

    /// Golden section refinement of the slope, if one ran.
    pub refinement: Option<Trace<golden_section::Step>>,
}

/// Solves variational problems by shooting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Shooting {
    config: Config,
}

impl Shooting {
    /// Creates a shooting solver.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the Euler step for a domain `[start.t, end.t]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step_size(&self, start: Point, end: Point) -> f64 {
        (end.t - start.t) / self.config.steps() as f64
    }
}

impl VariationalSolver for Shooting {
    type Trace = ShootingTrace;

    fn solve<I>(&self, integrand: &I, start: Point, end: Point) -> Solution<ShootingTrace>
    where
        I: Integrand + ?Sized,
    {
        let miss = Miss {
            integrand,
            start,
            end,
            steps: self.config.steps(),
        };

        let line = line_search::minimize_scalar(
            &miss,
            self.config.initial_slope(),
            self.config.scale(),
            self.config.search(),
        );

        let samples = line
            .samples
            .iter()
            .map(|sample| (sample.position, sample.snapshot.residual))
            .collect();
        let residual = line.snapshot.residual;
        debug!(
            "shooting: slope {} misses by {residual} after {} trials ({:?})",
            line.point,
            line.evaluations(),
            line.status,
        );

        Solution {
            rejected: line
                .samples
                .into_iter()
                .map(|sample| sample.snapshot.trajectory)
                .collect(),
            accepted: line.snapshot.trajectory,
            trace: ShootingTrace {
                slope: line.point,
                residual,
                status: line.status,
                samples,
                refinement: line.refinement,
            },
        }
    }
}
