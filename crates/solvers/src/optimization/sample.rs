/// An evaluated candidate: where the objective was evaluated and what it
/// returned.
///
/// `P` is the position type (`f64` for scalar searches, `Vec<f64>` along a
/// direction) and `S` is the objective's snapshot type.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<P, S> {
    /// Where the objective was evaluated.
    pub position: P,

    /// The objective value.
    pub value: f64,

    /// The snapshot captured by the objective.
    pub snapshot: S,
}

impl<P, S> Sample<P, S> {
    /// Creates a new sample.
    pub fn new(position: P, value: f64, snapshot: S) -> Self {
        Self {
            position,
            value,
            snapshot,
        }
    }

    /// Maps the position, keeping value and snapshot.
    pub fn map_position<Q>(self, f: impl FnOnce(P) -> Q) -> Sample<Q, S> {
        Sample {
            position: f(self.position),
            value: self.value,
            snapshot: self.snapshot,
        }
    }
}
