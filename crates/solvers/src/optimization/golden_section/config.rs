use thiserror::Error;

use crate::optimization::{DEFAULT_EPSILON, is_valid_epsilon};

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a golden section solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iters: 256,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// `epsilon` is the final bracket width. `max_iters` caps the number of
    /// bracket shrinks regardless of the width reached.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive.
    pub fn new(epsilon: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !is_valid_epsilon(epsilon) {
            return Err(ConfigError::Epsilon);
        }
        Ok(Self { epsilon, max_iters })
    }

    /// Returns a copy of this config with a different tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is non-finite or not positive.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self, ConfigError> {
        Self::new(epsilon, self.max_iters)
    }

    /// Returns the target bracket width.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the maximum number of bracket shrinks.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
