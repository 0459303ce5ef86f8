/// The function `f(t, x, z)` defining a variational problem.
///
/// `t` is the domain coordinate, `x` the value of the unknown function and
/// `z` its rate `dx/dt`. The shooting method reads `f` as the right-hand side
/// of `x'' = f(t, x, x')`; the direct method reads it as the integrand of the
/// functional `∫ f(t, x, x') dt`.
///
/// Every `Fn(f64, f64, f64) -> f64` is an integrand.
pub trait Integrand {
    /// Evaluates `f(t, x, z)`.
    fn eval(&self, t: f64, x: f64, z: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64, f64, f64) -> f64 + ?Sized,
{
    fn eval(&self, t: f64, x: f64, z: f64) -> f64 {
        self(t, x, z)
    }
}
