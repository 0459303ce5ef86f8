use extremal_core::Point;

use crate::trace::Record;

/// One golden section step: the bracket and its probe values before a shrink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Zero-based step index.
    pub iter: usize,

    /// Left bound.
    pub a: f64,

    /// Right bound.
    pub b: f64,

    /// Left probe.
    pub x1: f64,

    /// Right probe.
    pub x2: f64,

    /// Objective value at `x1`.
    pub y1: f64,

    /// Objective value at `x2`.
    pub y2: f64,
}

impl Record for Step {
    type Point = Point;
    const BATCH: usize = 7;

    fn fields(&self) -> Vec<String> {
        vec![
            format!("{}:", self.iter),
            format!("a = {}", self.a),
            format!("b = {}", self.b),
            format!("x1 = {}", self.x1),
            format!("x2 = {}", self.x2),
            format!("y1 = {}", self.y1),
            format!("y2 = {}", self.y2),
        ]
    }

    fn points(&self) -> Vec<Point> {
        vec![Point::new(self.x1, self.y1), Point::new(self.x2, self.y2)]
    }
}
