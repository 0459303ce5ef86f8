//! Tabulating an accepted trajectory for display.
//!
//! ```
//! use extremal_core::{LinearInterpolator, Point};
//! use extremal_variational::report::{self, Table};
//!
//! let line = LinearInterpolator::new([Point::new(0.0, 0.0), Point::new(1.0, 2.0)]);
//! let table = Table::new(report::tabulate(&line, 2).unwrap());
//!
//! assert_eq!(
//!     table.to_string(),
//!     "0: (0.000; 0.000)\n1: (0.500; 1.000)\n2: (1.000; 2.000)\n",
//! );
//! ```

use std::fmt;

use extremal_core::{InterpolationError, Interpolator, Point};

/// Decimal places used when printing a [`Table`].
pub const PRECISION: usize = 3;

/// Samples `intervals + 1` evenly spaced points over `[lower, upper]`.
///
/// Zero intervals yields the single point at `lower`. The last row sits
/// exactly on `upper`.
///
/// # Errors
///
/// Propagates any [`InterpolationError`] from the interpolator.
#[allow(clippy::cast_precision_loss)]
pub fn tabulate<I>(interpolator: &I, intervals: usize) -> Result<Vec<Point>, InterpolationError>
where
    I: Interpolator + ?Sized,
{
    let lower = interpolator.lower();
    if intervals == 0 {
        return Ok(vec![Point::new(lower, interpolator.evaluate(lower)?)]);
    }

    let upper = interpolator.upper();
    let width = (upper - lower) / intervals as f64;
    (0..=intervals)
        .map(|i| {
            let t = if i == intervals {
                upper
            } else {
                lower + i as f64 * width
            };
            interpolator.evaluate(t).map(|x| Point::new(t, x))
        })
        .collect()
}

/// Returns the forward-difference slope `(x(lower + dt) − x(lower)) / dt`.
///
/// # Errors
///
/// Propagates any [`InterpolationError`] from the interpolator.
pub fn initial_slope<I>(interpolator: &I, dt: f64) -> Result<f64, InterpolationError>
where
    I: Interpolator + ?Sized,
{
    let lower = interpolator.lower();
    let here = interpolator.evaluate(lower)?;
    let next = interpolator.evaluate(lower + dt)?;
    Ok((next - here) / dt)
}

/// Numbered rows of points, printed one per line as `i: (t; x)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Point>,
}

impl Table {
    /// Creates a table from its rows.
    #[must_use]
    pub fn new(rows: Vec<Point>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Point] {
        &self.rows
    }
}

impl FromIterator<Point> for Table {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.rows.iter().enumerate() {
            writeln!(f, "{i}: {}", point.rounded(PRECISION))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use extremal_core::LinearInterpolator;

    /// Fails for every `t` past its domain.
    struct Bounded(LinearInterpolator);

    impl Interpolator for Bounded {
        fn lower(&self) -> f64 {
            self.0.lower()
        }

        fn upper(&self) -> f64 {
            self.0.upper()
        }

        fn lower_val(&self) -> f64 {
            self.0.lower_val()
        }

        fn upper_val(&self) -> f64 {
            self.0.upper_val()
        }

        fn evaluate(&self, t: f64) -> Result<f64, InterpolationError> {
            let (lower, upper) = (self.lower(), self.upper());
            if t > upper {
                return Err(InterpolationError::OutOfDomain { t, lower, upper });
            }
            self.0.evaluate(t)
        }
    }

    fn tent() -> LinearInterpolator {
        LinearInterpolator::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
        ])
    }

    #[test]
    fn tabulates_evenly_spaced_points() {
        let rows = tabulate(&tent(), 4).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], Point::new(0.0, 0.0));
        assert_relative_eq!(rows[1].t, 0.5);
        assert_relative_eq!(rows[1].x, 1.0);
        assert_relative_eq!(rows[3].x, 2.0);
        assert_eq!(rows[4], Point::new(2.0, 2.0));
    }

    #[test]
    fn zero_intervals_gives_the_lower_point() {
        assert_eq!(tabulate(&tent(), 0).unwrap(), vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn slope_at_the_lower_end() {
        assert_relative_eq!(initial_slope(&tent(), 0.01).unwrap(), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn interpolation_errors_propagate() {
        let bounded = Bounded(LinearInterpolator::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        ]));

        assert!(matches!(
            initial_slope(&bounded, 2.0),
            Err(InterpolationError::OutOfDomain { .. })
        ));
        assert!(tabulate(&bounded, 4).is_ok());
    }

    #[test]
    fn last_row_stays_inside_a_strict_domain() {
        for (upper, intervals) in [(0.3, 3), (0.7, 7), (1.1, 11), (2.9, 29), (0.9, 9)] {
            let bounded = Bounded(LinearInterpolator::new([
                Point::new(0.0, 0.0),
                Point::new(upper, 1.0),
            ]));

            let rows = tabulate(&bounded, intervals).unwrap();

            assert_eq!(rows.len(), intervals + 1);
            assert_eq!(rows[intervals], Point::new(upper, 1.0));
        }
    }

    #[test]
    fn table_rows_are_numbered_and_rounded() {
        let table: Table = [Point::new(0.0, 1.23456), Point::new(0.25, f64::NAN)]
            .into_iter()
            .collect();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.to_string(), "0: (0.000; 1.235)\n1: (0.25; NaN)\n");
    }
}
