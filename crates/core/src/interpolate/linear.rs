use crate::Point;

use super::{InterpolationError, Interpolator};

/// A piecewise-linear function through a set of samples.
///
/// Samples are sorted by `t` once, at construction, and never change
/// afterwards. Samples with a NaN `t` sort last, whatever their sign bit.
/// Repeated `t` values are kept in input order and form zero-width segments;
/// evaluating on such a segment yields non-finite values.
///
/// Outside the sampled domain the nearest edge segment is extended linearly.
/// The function is continuous but not smooth, which is fine for sampling and
/// plotting trajectories.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearInterpolator {
    samples: Vec<Point>,
}

impl LinearInterpolator {
    /// Creates an interpolator from samples in any order.
    pub fn new(samples: impl IntoIterator<Item = Point>) -> Self {
        let mut samples: Vec<Point> = samples.into_iter().collect();
        samples.sort_by(|a, b| {
            a.t.is_nan()
                .cmp(&b.t.is_nan())
                .then_with(|| a.t.total_cmp(&b.t))
        });
        Self { samples }
    }

    /// Returns the samples, sorted by `t`.
    #[must_use]
    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if there are no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Evaluates the function at `t`.
    ///
    /// Unlike [`Interpolator::evaluate`] this cannot fail: with no samples the
    /// value is `0.0`, and with one sample it is that sample's value.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        let n = self.samples.len();
        match n {
            0 => return 0.0,
            1 => return self.samples[0].x,
            _ => {}
        }
        if t.is_nan() {
            return f64::NAN;
        }

        let segment = if t <= self.samples[0].t {
            0
        } else if t >= self.samples[n - 1].t {
            n - 2
        } else {
            // NaN coordinates sort last, so `p.t <= t` stays partitioned.
            self.samples
                .partition_point(|p| p.t <= t)
                .saturating_sub(1)
                .min(n - 2)
        };

        lerp(self.samples[segment], self.samples[segment + 1], t)
    }

    /// Shared logic for the codomain bounds.
    fn codomain_bound(&self, extremum: f64, sentinel: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        if self.samples.iter().any(|p| p.x.is_nan()) {
            return f64::NAN;
        }
        if extremum.is_infinite() {
            extremum
        } else {
            sentinel
        }
    }
}

impl FromIterator<Point> for LinearInterpolator {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl Interpolator for LinearInterpolator {
    fn lower(&self) -> f64 {
        self.samples.first().map_or(f64::NAN, |p| p.t)
    }

    fn upper(&self) -> f64 {
        self.samples.last().map_or(f64::NAN, |p| p.t)
    }

    /// Linear extrapolation is unbounded, so this reports `f64::MIN` unless
    /// the smallest sample is `-inf`.
    fn lower_val(&self) -> f64 {
        let min = self.samples.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        self.codomain_bound(min, f64::MIN)
    }

    /// Linear extrapolation is unbounded, so this reports `f64::MAX` unless
    /// the largest sample is `+inf`.
    fn upper_val(&self) -> f64 {
        let max = self
            .samples
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        self.codomain_bound(max, f64::MAX)
    }

    fn evaluate(&self, t: f64) -> Result<f64, InterpolationError> {
        Ok(self.value_at(t))
    }
}

/// Evaluates the line through `l` and `r` at `t`.
fn lerp(l: Point, r: Point, t: f64) -> f64 {
    let alpha = (t - l.t) / (r.t - l.t);
    alpha * r.x + (1.0 - alpha) * l.x
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bent() -> LinearInterpolator {
        LinearInterpolator::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 2.0),
        ])
    }

    #[test]
    fn exact_at_samples() {
        let f = bent();
        for p in f.samples() {
            assert_relative_eq!(f.evaluate(p.t).unwrap(), p.x);
        }
    }

    #[test]
    fn linear_between_samples() {
        let f = bent();
        assert_relative_eq!(f.evaluate(0.5).unwrap(), 1.0);
        assert_relative_eq!(f.evaluate(1.5).unwrap(), 2.0);
        assert_relative_eq!(f.evaluate(0.25).unwrap(), 0.5);
    }

    #[test]
    fn extrapolates_edge_segments() {
        let f = bent();
        // First segment has slope 2, last segment is flat.
        assert_relative_eq!(f.evaluate(-1.0).unwrap(), -2.0);
        assert_relative_eq!(f.evaluate(3.0).unwrap(), 2.0);
    }

    #[test]
    fn samples_are_sorted_on_construction() {
        let f = LinearInterpolator::new([
            Point::new(2.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
        ]);

        assert_eq!(f, bent());
        assert_relative_eq!(f.lower(), 0.0);
        assert_relative_eq!(f.upper(), 2.0);
    }

    #[test]
    fn lookup_uses_enclosing_segment() {
        let f: LinearInterpolator = (0..=100)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                Point::new(t, t * t)
            })
            .collect();

        // Between t = 4.2 and t = 4.3 the chord of t² is used.
        let expected = 0.5 * (4.2_f64.powi(2) + 4.3_f64.powi(2));
        assert_relative_eq!(f.evaluate(4.25).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_sample_counts() {
        let empty = LinearInterpolator::default();
        assert!(empty.is_empty());
        assert_relative_eq!(empty.evaluate(1.0).unwrap(), 0.0);
        assert!(empty.lower().is_nan());
        assert!(empty.upper().is_nan());
        assert_relative_eq!(empty.lower_val(), 0.0);

        let single = LinearInterpolator::new([Point::new(1.0, 3.0)]);
        assert_relative_eq!(single.evaluate(-5.0).unwrap(), 3.0);
        assert_relative_eq!(single.evaluate(5.0).unwrap(), 3.0);
        assert_relative_eq!(single.lower_val(), f64::MIN);
        assert_relative_eq!(single.upper_val(), f64::MAX);
    }

    #[test]
    fn duplicate_domain_coordinates_are_kept() {
        let f = LinearInterpolator::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 5.0),
        ]);

        assert_eq!(f.len(), 4);
        assert_relative_eq!(f.evaluate(0.5).unwrap(), 0.5);
        assert_relative_eq!(f.evaluate(1.5).unwrap(), 5.0);
    }

    #[test]
    fn codomain_bounds() {
        let f = bent();
        assert_relative_eq!(f.lower_val(), f64::MIN);
        assert_relative_eq!(f.upper_val(), f64::MAX);

        let with_nan = LinearInterpolator::new([Point::new(0.0, 1.0), Point::new(1.0, f64::NAN)]);
        assert!(with_nan.lower_val().is_nan());
        assert!(with_nan.upper_val().is_nan());
        assert!(with_nan.evaluate(0.5).unwrap().is_nan());

        let with_inf =
            LinearInterpolator::new([Point::new(0.0, 1.0), Point::new(1.0, f64::INFINITY)]);
        assert_relative_eq!(with_inf.lower_val(), f64::MIN);
        assert!(with_inf.upper_val().is_infinite());
    }

    #[test]
    fn constant_samples_still_report_unbounded_codomain() {
        let flat = LinearInterpolator::new([Point::new(0.0, 1.0), Point::new(1.0, 1.0)]);

        assert_relative_eq!(flat.lower_val(), f64::MIN);
        assert_relative_eq!(flat.upper_val(), f64::MAX);
        assert_relative_eq!(flat.evaluate(0.5).unwrap(), 1.0);
    }

    #[test]
    fn nan_sample_coordinates_sort_last() {
        let negative_nan = -f64::NAN;
        assert!(negative_nan.is_sign_negative());

        let f = LinearInterpolator::new([
            Point::new(negative_nan, 5.0),
            Point::new(1.0, 1.0),
            Point::new(f64::NAN, 7.0),
            Point::new(0.0, 0.0),
        ]);

        assert_relative_eq!(f.lower(), 0.0);
        assert_relative_eq!(f.samples()[1].t, 1.0);
        assert!(f.upper().is_nan());
        assert_relative_eq!(f.evaluate(-1.0).unwrap(), -1.0);
        assert_relative_eq!(f.evaluate(0.5).unwrap(), 0.5);
        // Past the finite samples the segment reaching a NaN coordinate is used.
        assert!(f.evaluate(3.0).unwrap().is_nan());
    }

    #[test]
    fn all_nan_coordinates_do_not_panic() {
        let f = LinearInterpolator::new([Point::new(-f64::NAN, 1.0), Point::new(f64::NAN, 2.0)]);

        assert!(f.evaluate(0.0).unwrap().is_nan());
    }

    #[test]
    fn nan_domain_coordinate_has_no_value() {
        assert!(bent().evaluate(f64::NAN).unwrap().is_nan());
    }
}
