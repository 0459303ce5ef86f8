//! The direct method.
//!
//! Reads the integrand as the integrand of the functional `∫ f(t, x, x') dt`,
//! discretizes `x(t)` on equally spaced nodes, and minimizes the trapezoid
//! sum over the interior node values with a [`Descent`] minimizer. The
//! boundary values stay fixed.
//!
//! Only the final trajectory is reported; the descent iterations are kept in
//! the trace.

mod config;
mod functional;


pub use config::{Config, ConfigError, Initial};

use extremal_core::{LinearInterpolator, Point};
use extremal_solvers::{
    optimization::descent::{self, Descent},
    trace::Trace,
};
use log::debug;

use crate::{Integrand, Solution, VariationalSolver};

use functional::Functional;

/// Diagnostics of a direct solve.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectTrace {
    /// Free node values the minimizer started from.
    pub initial: Vec<f64>,

    /// Value of the discretized functional at the accepted trajectory.
    pub functional: f64,

    /// How the minimizer stopped.
    pub status: descent::Status,

    /// Number of minimizer iterations.
    pub iters: usize,

    /// The minimizer's per-iteration records.
    pub trace: Trace<descent::Step>,
}

/// Solves variational problems by minimizing the discretized functional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Direct {
    config: Config,
}

impl Direct {
    /// Creates a direct solver.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the node spacing for a domain `[start.t, end.t]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step_size(&self, start: Point, end: Point) -> f64 {
        (end.t - start.t) / (self.config.nodes() + 1) as f64
    }

    /// Returns the minimizer used for the node values.
    #[must_use]
    pub fn minimizer(&self) -> &Descent {
        self.config.minimizer()
    }
}

impl VariationalSolver for Direct {
    type Trace = DirectTrace;

    fn solve<I>(&self, integrand: &I, start: Point, end: Point) -> Solution<DirectTrace>
    where
        I: Integrand + ?Sized,
    {
        let functional = Functional {
            integrand,
            start,
            end,
            nodes: self.config.nodes(),
        };
        let initial = self.config.initial().values(start, end, self.config.nodes());

        let result = self.minimizer().minimize_unobserved(&functional, &initial);
        debug!(
            "direct: functional {} after {} iterations ({:?})",
            result.value, result.iters, result.status,
        );

        Solution {
            rejected: Vec::new(),
            accepted: LinearInterpolator::new(functional.nodes(&result.x)),
            trace: DirectTrace {
                initial,
                functional: result.value,
                status: result.status,
                iters: result.iters,
                trace: result.trace,
            },
        }
    }
}
