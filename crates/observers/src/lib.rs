//! Reusable observers for the Extremal workspace.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `extremal-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasRecord`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — emits each step record through the `log` facade
//! - [`Threshold`] — stops a solver once the objective reaches a target
//!
//! [`Observer`]: extremal_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasRecord`]: traits::HasRecord
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod threshold;

pub use logger::LogObserver;
pub use threshold::Threshold;
