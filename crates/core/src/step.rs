/// A trait for states that can be advanced using their derivative.
///
/// Implementing this trait lets the explicit integrators in the workspace step
/// the state via `derivative * delta`, where the derivative is taken with
/// respect to `Delta`. For the variational solvers `Delta` is the domain
/// coordinate `t`.
pub trait StepIntegrable<Delta> {
    /// The derivative of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

impl StepIntegrable<f64> for f64 {
    type Derivative = f64;

    fn step(&self, derivative: f64, delta: f64) -> Self {
        self + derivative * delta
    }
}
