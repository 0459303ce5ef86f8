use extremal_core::Point;

use crate::{
    Integrand, Solution, VariationalSolver,
    direct::{Direct, DirectTrace},
    shooting::{Shooting, ShootingTrace},
};

/// A variational method chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Shooting on the initial slope.
    Shooting(Shooting),

    /// Minimizing the discretized functional.
    Direct(Direct),
}

/// Diagnostics of a [`Method`] solve.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodTrace {
    Shooting(ShootingTrace),
    Direct(DirectTrace),
}

impl Default for Method {
    fn default() -> Self {
        Self::Shooting(Shooting::default())
    }
}

impl Method {
    /// Returns the number of equal intervals the method splits the domain
    /// into: the Euler steps for shooting, the node segments for direct.
    #[must_use]
    pub fn intervals(&self) -> usize {
        match self {
            Self::Shooting(shooting) => shooting.config().steps(),
            Self::Direct(direct) => direct.config().nodes() + 1,
        }
    }

    /// Returns a short name for display.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shooting(_) => "shooting",
            Self::Direct(_) => "direct",
        }
    }
}

impl From<Shooting> for Method {
    fn from(shooting: Shooting) -> Self {
        Self::Shooting(shooting)
    }
}

impl From<Direct> for Method {
    fn from(direct: Direct) -> Self {
        Self::Direct(direct)
    }
}

impl VariationalSolver for Method {
    type Trace = MethodTrace;

    fn solve<I>(&self, integrand: &I, start: Point, end: Point) -> Solution<MethodTrace>
    where
        I: Integrand + ?Sized,
    {
        match self {
            Self::Shooting(shooting) => shooting
                .solve(integrand, start, end)
                .map_trace(MethodTrace::Shooting),
            Self::Direct(direct) => direct
                .solve(integrand, start, end)
                .map_trace(MethodTrace::Direct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use extremal_core::Interpolator;

    #[test]
    fn dispatches_to_the_selected_method() {
        let f = |_t: f64, _x: f64, _z: f64| 0.0;
        let (start, end) = (Point::new(0.0, 0.0), Point::new(1.0, 1.0));

        for method in [
            Method::from(Shooting::default()),
            Method::from(Direct::default()),
        ] {
            let solution = method.solve(&f, start, end);
            let midpoint = solution.accepted.evaluate(0.5).unwrap();

            assert!((midpoint - 0.5).abs() < 0.01, "{}", method.name());
            match (&method, &solution.trace) {
                (Method::Shooting(_), MethodTrace::Shooting(_))
                | (Method::Direct(_), MethodTrace::Direct(_)) => {}
                _ => panic!("trace does not match {}", method.name()),
            }
        }
    }

    #[test]
    fn intervals_follow_config() {
        assert_eq!(Method::default().intervals(), 100);
        assert_eq!(Method::from(Direct::default()).intervals(), 21);
    }
}
