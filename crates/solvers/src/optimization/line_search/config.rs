use thiserror::Error;

use crate::optimization::{DEFAULT_EPSILON, golden_section, is_valid_epsilon};

/// Configuration for the bracketing line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_expansions: usize,
    refine: golden_section::Config,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("max_expansions must be at least 1")]
    MaxExpansions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_expansions: 64,
            refine: golden_section::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `epsilon` is the smallest probe distance tried before giving up and the
    /// width of the refined bracket. `max_expansions` caps the number of step
    /// doublings. The tolerance of `refine` is replaced per search by
    /// `epsilon / ‖direction‖`; only its iteration cap is used as given.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive, or if
    /// `max_expansions` is zero.
    pub fn new(
        epsilon: f64,
        max_expansions: usize,
        refine: golden_section::Config,
    ) -> Result<Self, ConfigError> {
        if !is_valid_epsilon(epsilon) {
            return Err(ConfigError::Epsilon);
        }
        if max_expansions == 0 {
            return Err(ConfigError::MaxExpansions);
        }
        Ok(Self {
            epsilon,
            max_expansions,
            refine,
        })
    }

    /// Returns the probe and refinement tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of step doublings.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Returns the golden section settings used to refine the bracket.
    #[must_use]
    pub fn refine(&self) -> &golden_section::Config {
        &self.refine
    }
}
