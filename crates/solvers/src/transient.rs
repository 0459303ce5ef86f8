//! Explicit time stepping.

pub mod euler;
