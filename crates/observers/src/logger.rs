use extremal_core::Observer;
use extremal_solvers::trace::Record;
use log::{Level, log, log_enabled};

use crate::traits::HasRecord;

/// Emits each step record through the [`log`] facade.
///
/// The record's fields are joined into one line and logged at the configured
/// level under the configured target. Nothing is formatted when the level is
/// disabled. The observer never changes the solver's course.
#[derive(Debug, Clone)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
    emitted: usize,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer logging at `level` under this crate's target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: module_path!(),
            emitted: 0,
        }
    }

    /// Returns a copy that logs under `target`.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the log level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns how many records were observed.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<E: HasRecord, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.emitted += 1;
        if log_enabled!(target: self.target, self.level) {
            let line = event.record().fields().join(" ");
            log!(target: self.target, self.level, "{line}");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use extremal_solvers::optimization::{descent, golden_section};

    #[test]
    fn observes_every_golden_section_step() {
        let f = |x: &f64| (x - 0.5).powi(2);
        let mut logger = LogObserver::new(Level::Trace).with_target("golden");

        let solution = golden_section::minimize(
            &f,
            [0.0, 2.0],
            &golden_section::Config::default(),
            |event: &golden_section::Event<'_, ()>| -> Option<golden_section::Action> {
                logger.observe(event)
            },
        );

        assert_eq!(solution.status, golden_section::Status::Converged);
        assert_eq!(logger.emitted(), solution.trace.len());
    }

    #[test]
    fn observes_every_descent_iteration() {
        let f = |v: &[f64]| v[0] * v[0] + (v[1] - 1.0).powi(2);
        let mut logger = LogObserver::default();

        let solution = descent::Descent::default().minimize(
            &f,
            &[2.0, 2.0],
            |event: &descent::Event<'_, ()>| -> Option<descent::Action> {
                logger.observe(event)
            },
        );

        assert_eq!(logger.emitted(), solution.iters);
        assert_eq!(logger.level(), Level::Debug);
    }
}
