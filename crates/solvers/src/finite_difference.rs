//! Forward finite differences.
//!
//! Higher orders follow the recursive definition
//!
//! ```text
//! D⁰f(x) = f(x)
//! Dᵏf(x) = (Dᵏ⁻¹f(x + h·e) − Dᵏ⁻¹f(x)) / h
//! ```
//!
//! with every sub-evaluation `f(x + j·h·e)` computed once, so an order `k`
//! difference costs `k + 1` objective evaluations.

use extremal_core::Objective;
use thiserror::Error;

/// Errors that can occur when differencing along an axis.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("axis {axis} is out of range for a {dim}-dimensional point")]
    AxisOutOfRange { axis: usize, dim: usize },
}

/// Computes the `order`-th forward difference of the objective along `axis`.
///
/// Order 0 is the objective value itself.
///
/// # Errors
///
/// Returns [`Error::AxisOutOfRange`] if `axis >= x.len()`.
pub fn partial<O>(
    objective: &O,
    x: &[f64],
    axis: usize,
    order: usize,
    step: f64,
) -> Result<f64, Error>
where
    O: Objective<[f64]> + ?Sized,
{
    if axis >= x.len() {
        return Err(Error::AxisOutOfRange {
            axis,
            dim: x.len(),
        });
    }

    let mut shifted = x.to_vec();
    let origin = x[axis];
    let mut eval = |offset: usize| {
        shifted[axis] = origin + offset_distance(offset, step);
        objective.value(&shifted)
    };
    Ok(difference(&mut eval, order, step))
}

/// Computes the `order`-th forward difference of a scalar objective.
pub fn derivative<O>(objective: &O, x: f64, order: usize, step: f64) -> f64
where
    O: Objective<f64> + ?Sized,
{
    let mut eval = |offset: usize| objective.value(&(x + offset_distance(offset, step)));
    difference(&mut eval, order, step)
}

/// Computes the forward-difference gradient: every first partial, in axis
/// order.
///
/// The value at `x` is shared, so this costs `x.len() + 1` evaluations.
pub fn gradient<O>(objective: &O, x: &[f64], step: f64) -> Vec<f64>
where
    O: Objective<[f64]> + ?Sized,
{
    let base = objective.value(x);
    let mut shifted = x.to_vec();

    (0..x.len())
        .map(|axis| {
            shifted[axis] = x[axis] + step;
            let value = objective.value(&shifted);
            shifted[axis] = x[axis];
            (value - base) / step
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn offset_distance(offset: usize, step: f64) -> f64 {
    offset as f64 * step
}

/// Evaluates the difference table with memoized sub-evaluations.
fn difference(eval: &mut impl FnMut(usize) -> f64, order: usize, step: f64) -> f64 {
    let mut values = vec![None; order + 1];
    recurse(eval, &mut values, 0, order, step)
}

fn recurse(
    eval: &mut impl FnMut(usize) -> f64,
    values: &mut [Option<f64>],
    offset: usize,
    order: usize,
    step: f64,
) -> f64 {
    if order == 0 {
        return *values[offset].get_or_insert_with(|| eval(offset));
    }
    let ahead = recurse(eval, values, offset + 1, order - 1, step);
    let here = recurse(eval, values, offset, order - 1, step);
    (ahead - here) / step
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    fn paraboloid(x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }

    #[test]
    fn gradient_of_paraboloid() {
        let grad = gradient(&paraboloid, &[1.0, 1.0], 1e-3);

        assert_eq!(grad.len(), 2);
        assert_relative_eq!(grad[0], 2.0, epsilon = 1e-2);
        assert_relative_eq!(grad[1], 2.0, epsilon = 1e-2);
    }

    #[test]
    fn order_zero_is_the_value() {
        let value = partial(&paraboloid, &[1.0, 2.0], 1, 0, 1e-3).unwrap();
        assert_relative_eq!(value, 5.0);
    }

    #[test]
    fn second_order_partial() {
        // ∂²/∂y² (x·y²) = 2x
        let f = |v: &[f64]| v[0] * v[1] * v[1];

        let value = partial(&f, &[3.0, 0.5], 1, 2, 1e-3).unwrap();

        assert_relative_eq!(value, 6.0, epsilon = 1e-2);
    }

    #[test]
    fn axis_out_of_range() {
        let result = partial(&paraboloid, &[1.0, 1.0], 2, 1, 1e-3);
        assert_eq!(result, Err(Error::AxisOutOfRange { axis: 2, dim: 2 }));
    }

    #[test]
    fn evaluations_are_memoized() {
        let calls = Cell::new(0);
        let f = |x: &f64| {
            calls.set(calls.get() + 1);
            x.powi(4)
        };

        // d³/dx³ x⁴ = 24x
        let value = derivative(&f, 1.0, 3, 1e-3);

        assert_relative_eq!(value, 24.0, epsilon = 0.1);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn scalar_first_derivative() {
        let value = derivative(&|x: &f64| x.sin(), 0.0, 1, 1e-4);
        assert_relative_eq!(value, 1.0, epsilon = 1e-4);
    }
}
