//! Continuous functions reconstructed from ordered samples.
//!
//! Variational solvers return their trajectories as interpolators. Renderers
//! query the domain ([`Interpolator::lower`], [`Interpolator::upper`]), the
//! codomain bounds ([`Interpolator::lower_val`], [`Interpolator::upper_val`]),
//! and sample values with [`Interpolator::evaluate`].

mod linear;

pub use linear::LinearInterpolator;

use thiserror::Error;

/// Errors an interpolator can signal when asked for a value.
///
/// [`LinearInterpolator`] always has a fallback and never returns these, but
/// callers handle them so that interpolators which can genuinely fail (splines
/// with too few knots, bounded lookup tables) fit the same interface.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    #[error("interpolator has too few samples: {0}")]
    TooFewSamples(usize),

    #[error("t = {t} lies outside the domain [{lower}, {upper}]")]
    OutOfDomain { t: f64, lower: f64, upper: f64 },
}

/// A continuous function of the domain coordinate `t`.
pub trait Interpolator {
    /// Returns the smallest sampled domain coordinate.
    fn lower(&self) -> f64;

    /// Returns the largest sampled domain coordinate.
    fn upper(&self) -> f64;

    /// Returns a lower bound of the function's values, for display scaling.
    ///
    /// NaN indicates that the function has no meaningful value somewhere.
    fn lower_val(&self) -> f64;

    /// Returns an upper bound of the function's values, for display scaling.
    ///
    /// NaN indicates that the function has no meaningful value somewhere.
    fn upper_val(&self) -> f64;

    /// Evaluates the function at `t`.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpolationError`] if the interpolator cannot produce a
    /// value at `t`.
    fn evaluate(&self, t: f64) -> Result<f64, InterpolationError>;
}
