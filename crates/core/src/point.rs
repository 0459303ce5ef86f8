use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A sample of a function: domain coordinate `t` and value `x`.
///
/// Points are plain values. Arithmetic treats them as 2D vectors and always
/// returns a new point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Domain coordinate.
    pub t: f64,

    /// Function value at `t`.
    pub x: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(t: f64, x: f64) -> Self {
        Self { t, x }
    }

    /// Returns the point scaled by `k`.
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self::new(k * self.t, k * self.x)
    }

    /// Returns the squared Euclidean length.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.t * self.t + self.x * self.x
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the point scaled to unit length.
    ///
    /// A zero-length point produces non-finite components.
    #[must_use]
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Returns a display adapter that rounds both components to `precision`
    /// decimal places.
    #[must_use]
    pub fn rounded(self, precision: usize) -> Rounded {
        Rounded {
            point: self,
            precision,
        }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.t.is_finite() && self.x.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.t + rhs.t, self.x + rhs.x)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.t - rhs.t, self.x - rhs.x)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.t, -self.x)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        self.scale(k)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {})", self.t, self.x)
    }
}

/// Display adapter returned by [`Point::rounded`].
///
/// Components are rounded half away from zero. If either component is not
/// finite the point is printed unrounded.
#[derive(Debug, Clone, Copy)]
pub struct Rounded {
    point: Point,
    precision: usize,
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.point.is_finite() {
            return self.point.fmt(f);
        }

        let round = |v: f64| {
            let factor = 10_f64.powi(i32::try_from(self.precision).unwrap_or(i32::MAX));
            (v * factor).round() / factor
        };
        let precision = self.precision;
        write!(
            f,
            "({:.precision$}; {:.precision$})",
            round(self.point.t),
            round(self.point.x)
        )
    }
}
