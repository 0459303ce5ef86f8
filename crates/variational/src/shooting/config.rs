use extremal_solvers::optimization::line_search;
use thiserror::Error;

/// Configuration for the shooting method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    steps: usize,
    initial_slope: f64,
    scale: f64,
    search: line_search::Config,
}

/// Errors that can occur when validating a shooting config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("steps must be at least 1")]
    Steps,

    #[error("initial_slope must be finite")]
    InitialSlope,

    #[error("scale must be finite and non-zero")]
    Scale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: 100,
            initial_slope: 1.0,
            scale: 1.0,
            search: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `steps` is the number of Euler steps per trial trajectory. The search
    /// over the initial slope starts at `initial_slope` and first probes
    /// `initial_slope ± scale`.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero, `initial_slope` is non-finite, or
    /// `scale` is non-finite or zero.
    pub fn new(
        steps: usize,
        initial_slope: f64,
        scale: f64,
        search: line_search::Config,
    ) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::Steps);
        }
        if !initial_slope.is_finite() {
            return Err(ConfigError::InitialSlope);
        }
        if !scale.is_finite() || scale == 0.0 {
            return Err(ConfigError::Scale);
        }
        Ok(Self {
            steps,
            initial_slope,
            scale,
            search,
        })
    }

    /// Returns the number of Euler steps per trajectory.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the slope the search starts from.
    #[must_use]
    pub fn initial_slope(&self) -> f64 {
        self.initial_slope
    }

    /// Returns the first probe distance of the slope search.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the line search settings for the slope.
    #[must_use]
    pub fn search(&self) -> &line_search::Config {
        &self.search
    }
}
