//! Solvers for minimization problems.
//!
//! Every solver in this module minimizes an [`Objective`]: a function of the
//! solver variables that returns a value and, optionally, a snapshot of
//! whatever it computed along the way. Snapshots are returned untouched in
//! [`Sample`]s so callers can inspect every evaluated candidate.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free search over a bracket known to
//!   contain a single minimum
//! - [`line_search`] — expands a bracket along a direction by step doubling,
//!   then refines it with golden section search
//! - [`descent`] — multivariate minimizers built from repeated line searches:
//!   cyclic coordinate descent and conjugate-direction descent
//!
//! [`Objective`]: extremal_core::Objective

mod sample;

pub use sample::Sample;

pub mod descent;
pub mod golden_section;
pub mod line_search;

/// Convergence tolerance shared by the default solver configurations.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Returns the Euclidean norm of `v`.
pub(crate) fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Returns the Euclidean distance between `a` and `b`.
pub(crate) fn distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Validates a convergence tolerance: finite and strictly positive.
pub(crate) fn is_valid_epsilon(epsilon: f64) -> bool {
    epsilon.is_finite() && epsilon > 0.0
}
