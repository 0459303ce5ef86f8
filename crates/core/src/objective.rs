/// The result of evaluating an [`Objective`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation<S> {
    /// The objective value. Solvers minimize this.
    pub value: f64,

    /// Auxiliary data captured alongside the value.
    pub snapshot: S,
}

impl<S> Evaluation<S> {
    /// Creates a new evaluation.
    pub fn new(value: f64, snapshot: S) -> Self {
        Self { value, snapshot }
    }
}

/// A function to be minimized over `X`.
///
/// Besides the scalar value, an objective may capture a snapshot of whatever
/// it computed along the way (an integrated trajectory, for example). Solvers
/// never inspect snapshots; they hand them back in their results so callers
/// can see every candidate that was evaluated.
///
/// Any closure `Fn(&X) -> f64` is an objective with an empty snapshot.
///
/// Objectives are assumed to be deterministic. NaN and infinite values are
/// passed through like any other value.
pub trait Objective<X: ?Sized> {
    /// Data captured with each evaluation.
    type Snapshot;

    /// Evaluates the objective at `x`.
    fn evaluate(&self, x: &X) -> Evaluation<Self::Snapshot>;

    /// Evaluates the objective at `x`, discarding the snapshot.
    fn value(&self, x: &X) -> f64 {
        self.evaluate(x).value
    }
}

impl<X, F> Objective<X> for F
where
    X: ?Sized,
    F: Fn(&X) -> f64,
{
    type Snapshot = ();

    fn evaluate(&self, x: &X) -> Evaluation<()> {
        Evaluation::new(self(x), ())
    }
}
