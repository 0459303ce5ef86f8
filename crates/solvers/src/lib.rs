//! Numerical solvers for the Extremal workspace.
//!
//! # Modules
//!
//! - [`optimization`] — golden section search, exponential bracketing line
//!   search, and the coordinate / conjugate-direction descent minimizers
//! - [`finite_difference`] — forward-difference partial derivatives and gradients
//! - [`transient`] — explicit time stepping (forward Euler)
//! - [`trace`] — structured step records returned by solvers, with batched
//!   human-readable logs

pub mod finite_difference;
pub mod optimization;
pub mod trace;
pub mod transient;
