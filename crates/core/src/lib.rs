//! Core traits and types for the Extremal workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! variational strategies build on:
//!
//! - [`Point`] — a `(t, x)` pair with vector arithmetic
//! - [`Objective`] — a function to minimize, returning an [`Evaluation`] that
//!   carries the value and an optional snapshot of auxiliary data
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`StepIntegrable`] — state that can be advanced by a derivative and a step
//!   (implemented for `f64`)
//! - [`Interpolator`], [`LinearInterpolator`] — continuous functions rebuilt
//!   from ordered samples

mod interpolate;
mod objective;
mod observer;
mod point;
mod step;

pub use interpolate::{InterpolationError, Interpolator, LinearInterpolator};
pub use objective::{Evaluation, Objective};
pub use observer::Observer;
pub use point::{Point, Rounded};
pub use step::{DerivativeOf, StepIntegrable};
