use extremal_core::{Evaluation, LinearInterpolator, Objective, Point, StepIntegrable};
use extremal_solvers::transient::euler;

use crate::Integrand;

/// Value and rate of the second-order system `x'' = f(t, x, x')`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Phase {
    x: f64,
    z: f64,
}

#[derive(Debug, Clone, Copy)]
struct PhaseRate {
    dx: f64,
    dz: f64,
}

impl StepIntegrable<f64> for Phase {
    type Derivative = PhaseRate;

    fn step(&self, derivative: PhaseRate, dt: f64) -> Self {
        Phase {
            x: self.x + derivative.dx * dt,
            z: self.z + derivative.dz * dt,
        }
    }
}

/// One integrated trial: the trajectory and how far it lands from the target.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Trial {
    pub(super) trajectory: LinearInterpolator,
    pub(super) residual: f64,
}

/// Miss distance at the end point as a function of the initial slope.
///
/// The value is `|residual|`, with `residual = end.x − x(end.t)`. Each
/// evaluation integrates one trajectory with forward Euler and keeps it in the
/// snapshot.
pub(super) struct Miss<'a, I: ?Sized> {
    pub(super) integrand: &'a I,
    pub(super) start: Point,
    pub(super) end: Point,
    pub(super) steps: usize,
}

impl<I> Miss<'_, I>
where
    I: Integrand + ?Sized,
{
    #[allow(clippy::cast_precision_loss)]
    fn dt(&self) -> f64 {
        (self.end.t - self.start.t) / self.steps as f64
    }

    /// Integrates the trajectory leaving `start` with slope `z0`.
    pub(super) fn shoot(&self, z0: f64) -> Trial {
        let rhs = |t: f64, phase: &Phase| PhaseRate {
            dx: phase.z,
            dz: self.integrand.eval(t, phase.x, phase.z),
        };
        let initial = Phase {
            x: self.start.x,
            z: z0,
        };

        let solution = euler::solve_unobserved(&rhs, self.start.t, initial, self.dt(), self.steps);

        let landed = solution.last().map_or(f64::NAN, |snapshot| snapshot.state.x);
        let trajectory = solution
            .history
            .iter()
            .map(|snapshot| Point::new(snapshot.t, snapshot.state.x))
            .collect();

        Trial {
            trajectory,
            residual: self.end.x - landed,
        }
    }
}

impl<I> Objective<f64> for Miss<'_, I>
where
    I: Integrand + ?Sized,
{
    type Snapshot = Trial;

    fn evaluate(&self, z0: &f64) -> Evaluation<Trial> {
        let trial = self.shoot(*z0);
        Evaluation::new(trial.residual.abs(), trial)
    }
}
