use extremal_core::{Evaluation, Objective, Point};

use crate::Integrand;

/// The discretized functional `∫ f(t, x, x') dt` over the free node values.
///
/// The domain is split into `nodes + 1` segments of width `Δ`. Segment `i`
/// joins nodes `i` and `i + 1`, with node 0 and node `nodes + 1` pinned to the
/// boundary points. Its slope `zᵢ = (xᵢ₊₁ − xᵢ) / Δ` is used at both ends of
/// the trapezoid:
///
/// ```text
/// Δ · (f(tᵢ, xᵢ, zᵢ) + f(tᵢ₊₁, xᵢ₊₁, zᵢ)) / 2
/// ```
pub(super) struct Functional<'a, I: ?Sized> {
    pub(super) integrand: &'a I,
    pub(super) start: Point,
    pub(super) end: Point,
    pub(super) nodes: usize,
}

impl<I> Functional<'_, I>
where
    I: Integrand + ?Sized,
{
    /// Returns the segment width `Δ`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn delta(&self) -> f64 {
        (self.end.t - self.start.t) / (self.nodes + 1) as f64
    }

    /// Returns the domain coordinate of node `i`.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn node_t(&self, i: usize) -> f64 {
        self.start.t + i as f64 * self.delta()
    }

    /// Returns every node, boundary points included, for the free values.
    pub(super) fn nodes(&self, free: &[f64]) -> Vec<Point> {
        std::iter::once(self.start)
            .chain(
                free.iter()
                    .enumerate()
                    .map(|(i, &x)| Point::new(self.node_t(i + 1), x)),
            )
            .chain(std::iter::once(self.end))
            .collect()
    }
}

impl<I> Objective<[f64]> for Functional<'_, I>
where
    I: Integrand + ?Sized,
{
    type Snapshot = ();

    fn evaluate(&self, free: &[f64]) -> Evaluation<()> {
        let delta = self.delta();
        let xs = std::iter::once(self.start.x)
            .chain(free.iter().copied())
            .chain(std::iter::once(self.end.x));
        let next = xs.clone().skip(1);

        let value = xs
            .zip(next)
            .enumerate()
            .map(|(i, (x, x_next))| {
                let z = (x_next - x) / delta;
                let f_here = self.integrand.eval(self.node_t(i), x, z);
                let f_next = self.integrand.eval(self.node_t(i + 1), x_next, z);
                delta * (f_here + f_next) / 2.0
            })
            .sum();

        Evaluation::new(value, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn arc_length_of_a_straight_line() {
        let f = |_t: f64, _x: f64, z: f64| (1.0 + z * z).sqrt();
        let functional = Functional {
            integrand: &f,
            start: Point::new(0.0, 0.0),
            end: Point::new(3.0, 4.0),
            nodes: 2,
        };

        let value = functional.value(&[4.0 / 3.0, 8.0 / 3.0]);

        assert_relative_eq!(value, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn kinetic_energy_penalizes_kinks() {
        let f = |_t: f64, _x: f64, z: f64| z * z;
        let functional = Functional {
            integrand: &f,
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 1.0),
            nodes: 1,
        };

        // Straight: two segments of slope 1 and width 0.5.
        assert_relative_eq!(functional.value(&[0.5]), 1.0);
        // Kinked: slopes 2 and 0.
        assert_relative_eq!(functional.value(&[1.0]), 2.0);
    }

    #[test]
    fn trapezoid_samples_both_segment_ends() {
        // f = t: the exact integral over [0, 1] is 1/2.
        let f = |t: f64, _x: f64, _z: f64| t;
        let functional = Functional {
            integrand: &f,
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 0.0),
            nodes: 3,
        };

        assert_relative_eq!(functional.value(&[0.0; 3]), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn nodes_include_boundaries() {
        let f = |_t: f64, _x: f64, _z: f64| 0.0;
        let functional = Functional {
            integrand: &f,
            start: Point::new(1.0, 2.0),
            end: Point::new(2.0, 3.0),
            nodes: 3,
        };

        let nodes = functional.nodes(&[0.1, 0.2, 0.3]);

        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[0], Point::new(1.0, 2.0));
        assert_relative_eq!(nodes[2].t, 1.5);
        assert_relative_eq!(nodes[2].x, 0.2);
        assert_eq!(nodes[4], Point::new(2.0, 3.0));
    }
}
