//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a
//! bracket `[a, b]`. It keeps two interior probes at
//! `a + r·(b − a)` and `b − r·(b − a)` with `r = (3 − √5) / 2`, discards the
//! part of the bracket beyond the probe with the larger value, and reuses the
//! surviving probe, so each shrink costs one evaluation and reduces the
//! bracket by the factor `1 − r`.
//!
//! The number of shrinks is fixed up front:
//!
//! ```text
//! shrinks = ⌈ −ln((b − a) / ε) / ln(1 − r) ⌉
//! ```
//!
//! after which the bracket is narrower than `ε`. The reported minimizer is the
//! midpoint of the final bracket.
//!
//! # Results
//!
//! A [`Solution`] holds the midpoint evaluation, every probe evaluation as a
//! [`Sample`] (snapshots included), and a [`Trace`] of [`Step`] records. Each
//! step logs seven fields (`i:`, `a`, `b`, `x1`, `x2`, `y1`, `y2`), which
//! [`Trace::log`] groups into one line per step.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after the step's probes have been
//! evaluated and before the bracket shrinks. Observers can return
//! [`Action::StopEarly`] to end the search at the midpoint of the current
//! bracket.
//!
//! [`Sample`]: crate::optimization::Sample
//! [`Trace`]: crate::trace::Trace
//! [`Trace::log`]: crate::trace::Trace::log

mod bracket;
mod config;
mod event;
mod search;
mod solution;
mod step;


pub use config::{Config, ConfigError};
pub use event::{Action, Event};
pub use solution::{Solution, Status};
pub use step::Step;

pub(crate) use search::search;

use extremal_core::{Objective, Observer};

/// Finds the minimum of the objective on `bracket` using golden section search.
///
/// Reversed bracket bounds are swapped. The observer receives an [`Event`]
/// for each step; see the [module docs](self) for details.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Solution<O::Snapshot>
where
    O: Objective<f64> + ?Sized,
    Obs: for<'a> Observer<Event<'a, O::Snapshot>, Action>,
{
    search(|x| objective.evaluate(&x), bracket, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
pub fn minimize_unobserved<O>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Solution<O::Snapshot>
where
    O: Objective<f64> + ?Sized,
{
    minimize(objective, bracket, config, ())
}
