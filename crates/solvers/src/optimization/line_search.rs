//! Exponential bracketing line search.
//!
//! # Algorithm
//!
//! The search parametrizes a line as `start + λ·d` and looks for a minimum
//! along `λ`:
//!
//! 1. Evaluate the start point and set the probe step `h = 1`.
//! 2. Probe `λ = h`. If the value strictly decreases, expand forward.
//!    Otherwise probe `λ = −h` and expand backward if that decreases.
//!    Otherwise halve `h` and try again, until `h·‖d‖ ≤ ε`, at which point the
//!    start point is returned with [`Status::NoImprovement`].
//! 3. Expansion doubles the step while the value keeps decreasing. The last
//!    three positions bracket a minimum.
//! 4. The bracket is refined by [golden section search](super::golden_section)
//!    with tolerance `ε / ‖d‖` in `λ`, so the refined point is within `ε` of
//!    the bracketed minimum along the line.
//!
//! The search assumes the objective is unimodal along the line near the start
//! point. It finds a local minimum, not a global one.

mod bracketing;
mod config;
mod solution;


pub use config::{Config, ConfigError};
pub use solution::{LineSolution, Status};

use extremal_core::Objective;
use thiserror::Error;

use crate::optimization::norm;

/// Errors that can occur when searching along a direction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("start point has {point} components but the direction has {direction}")]
    DimensionMismatch { point: usize, direction: usize },
}

/// Minimizes a scalar objective along the line `start + λ·scale`.
///
/// `scale` sets the first probe distance and its sign the first probe
/// direction. A zero or non-finite scale returns the start point with
/// [`Status::NoImprovement`].
pub fn minimize_scalar<O>(
    objective: &O,
    start: f64,
    scale: f64,
    config: &Config,
) -> LineSolution<f64, O::Snapshot>
where
    O: Objective<f64> + ?Sized,
{
    let at = |lambda: f64| start + lambda * scale;
    bracketing::search(|lambda| objective.evaluate(&at(lambda)), scale.abs(), config)
        .into_solution(at)
}

/// Minimizes a multivariate objective along the line `start + λ·direction`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `start` and `direction` differ in
/// length. No evaluation is made in that case.
pub fn minimize_along<O>(
    objective: &O,
    start: &[f64],
    direction: &[f64],
    config: &Config,
) -> Result<LineSolution<Vec<f64>, O::Snapshot>, Error>
where
    O: Objective<[f64]> + ?Sized,
{
    if start.len() != direction.len() {
        return Err(Error::DimensionMismatch {
            point: start.len(),
            direction: direction.len(),
        });
    }
    Ok(along_unchecked(objective, start, direction, config))
}

/// Searches along `direction`, which must have the same length as `start`.
pub(crate) fn along_unchecked<O>(
    objective: &O,
    start: &[f64],
    direction: &[f64],
    config: &Config,
) -> LineSolution<Vec<f64>, O::Snapshot>
where
    O: Objective<[f64]> + ?Sized,
{
    debug_assert_eq!(start.len(), direction.len());

    let at = |lambda: f64| -> Vec<f64> {
        start
            .iter()
            .zip(direction)
            .map(|(s, d)| s + lambda * d)
            .collect()
    };
    bracketing::search(
        |lambda| objective.evaluate(&at(lambda)),
        norm(direction),
        config,
    )
    .into_solution(at)
}
