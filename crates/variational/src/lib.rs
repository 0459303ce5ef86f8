//! Two-point variational problems for the Extremal workspace.
//!
//! Given an [`Integrand`] `f(t, x, z)` and two boundary points, a
//! [`VariationalSolver`] finds a trajectory `x(t)` joining them:
//!
//! - [`Shooting`] reads `f` as the right-hand side of `x'' = f(t, x, x')` and
//!   searches for the initial slope whose Euler trajectory hits the end point
//! - [`Direct`] reads `f` as the integrand of `∫ f(t, x, x') dt` and minimizes
//!   a discretized version of it over the interior node values
//! - [`Method`] selects one of the two at runtime
//!
//! Every solve returns a [`Solution`] holding the trial trajectories as
//! [`LinearInterpolator`]s, accepted last, together with a solver-specific
//! trace. The [`report`] module tabulates a trajectory for display.
//!
//! ```
//! use extremal_core::{Interpolator, Point};
//! use extremal_variational::{Shooting, VariationalSolver};
//!
//! // A free particle moves in a straight line.
//! let free = |_t: f64, _x: f64, _z: f64| 0.0;
//! let solution = Shooting::default().solve(&free, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
//!
//! let midpoint = solution.accepted.evaluate(0.5).unwrap();
//! assert!((midpoint - 0.5).abs() < 0.01);
//! ```
//!
//! [`LinearInterpolator`]: extremal_core::LinearInterpolator

pub mod direct;
pub mod report;
pub mod shooting;

mod integrand;
mod method;
mod solution;

pub use direct::{Direct, DirectTrace};
pub use integrand::Integrand;
pub use method::{Method, MethodTrace};
pub use shooting::{Shooting, ShootingTrace};
pub use solution::{Solution, VariationalSolver};
