use extremal_core::Point;
use extremal_solvers::optimization::descent::Descent;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// How the free node values are initialized before minimization.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Initial {
    /// On the straight line between the boundary points.
    #[default]
    Linear,

    /// All nodes at the same value.
    Constant(f64),

    /// Uniformly random in `[low, high]`, drawn from a seeded generator.
    ///
    /// The same seed always yields the same values.
    Random { seed: u64, low: f64, high: f64 },
}

impl Initial {
    /// Returns the starting values of `nodes` free nodes between `start` and
    /// `end`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn values(&self, start: Point, end: Point, nodes: usize) -> Vec<f64> {
        match *self {
            Self::Linear => {
                let segments = (nodes + 1) as f64;
                (1..=nodes)
                    .map(|i| start.x + (end.x - start.x) * i as f64 / segments)
                    .collect()
            }
            Self::Constant(value) => vec![value; nodes],
            Self::Random { seed, low, high } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                (0..nodes).map(|_| rng.gen_range(low..=high)).collect()
            }
        }
    }

    fn is_valid(&self) -> bool {
        match *self {
            Self::Linear => true,
            Self::Constant(value) => value.is_finite(),
            Self::Random { low, high, .. } => low.is_finite() && high.is_finite() && low <= high,
        }
    }
}

/// Configuration for the direct method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    nodes: usize,
    initial: Initial,
    minimizer: Descent,
}

/// Errors that can occur when validating a direct method config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("nodes must be at least 1")]
    Nodes,

    #[error("initial values must be finite, with low <= high for random values")]
    Initial,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nodes: 20,
            initial: Initial::default(),
            minimizer: Descent::default(),
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `nodes` is the number of free interior nodes; the domain is split into
    /// `nodes + 1` equal segments.
    ///
    /// # Errors
    ///
    /// Returns an error if `nodes` is zero or `initial` holds non-finite
    /// values or an empty random range.
    pub fn new(nodes: usize, initial: Initial, minimizer: Descent) -> Result<Self, ConfigError> {
        if nodes == 0 {
            return Err(ConfigError::Nodes);
        }
        if !initial.is_valid() {
            return Err(ConfigError::Initial);
        }
        Ok(Self {
            nodes,
            initial,
            minimizer,
        })
    }

    /// Returns the number of free interior nodes.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the initialization strategy.
    #[must_use]
    pub fn initial(&self) -> &Initial {
        &self.initial
    }

    /// Returns the multivariate minimizer.
    #[must_use]
    pub fn minimizer(&self) -> &Descent {
        &self.minimizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn linear_values_lie_on_the_chord() {
        let values = Initial::Linear.values(Point::new(0.0, 1.0), Point::new(4.0, 4.0), 2);

        assert_eq!(values.len(), 2);
        assert_relative_eq!(values[0], 2.0);
        assert_relative_eq!(values[1], 3.0);
    }

    #[test]
    fn constant_values() {
        let values = Initial::Constant(0.5).values(Point::default(), Point::new(1.0, 1.0), 3);
        assert_eq!(values, vec![0.5; 3]);
    }

    /// Seeded random initialization must be reproducible.
    #[test]
    fn random_values_are_reproducible_per_seed() {
        let initial = Initial::Random {
            seed: 42,
            low: -1.0,
            high: 1.0,
        };
        let (start, end) = (Point::default(), Point::new(1.0, 1.0));

        let first = initial.values(start, end, 8);
        let second = initial.values(start, end, 8);

        assert_eq!(first, second);
        assert!(first.iter().all(|v| (-1.0..=1.0).contains(v)));

        let other = Initial::Random {
            seed: 43,
            low: -1.0,
            high: 1.0,
        }
        .values(start, end, 8);
        assert_ne!(first, other);
    }

    #[test]
    fn rejects_bad_config() {
        let minimizer = Descent::default();

        assert_eq!(
            Config::new(0, Initial::Linear, minimizer),
            Err(ConfigError::Nodes)
        );
        assert_eq!(
            Config::new(5, Initial::Constant(f64::INFINITY), minimizer),
            Err(ConfigError::Initial)
        );
        assert_eq!(
            Config::new(
                5,
                Initial::Random {
                    seed: 0,
                    low: 1.0,
                    high: -1.0
                },
                minimizer
            ),
            Err(ConfigError::Initial)
        );
    }
}
