/// The golden section ratio: r = (3 − √5) / 2.
///
/// Interior probes sit at fraction `r` from either end of the bracket.
/// This equals `1 − 1/φ`, where φ is the golden ratio.
pub(super) const RATIO: f64 = 0.381_966_011_250_105_15;

/// Golden section search bracket.
///
/// Maintains the outer interval [left, right] and two interior probes
/// positioned by [`RATIO`].
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left probe at `left + r * width`.
    pub(super) inner_left: f64,

    /// Inner right probe at `right - r * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds with interior probes at the golden ratio.
    ///
    /// If the bounds are reversed, they are swapped.
    pub(super) fn new(bracket: [f64; 2]) -> Self {
        let [a, b] = bracket;
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + RATIO * width,
            inner_right: right - RATIO * width,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Drops `[left, inner_left)`: the old `inner_right` becomes the new
    /// `inner_left`, and a new `inner_right` is placed.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.right - RATIO * self.width();
    }

    /// Drops `(inner_right, right]`: the old `inner_left` becomes the new
    /// `inner_right`, and a new `inner_left` is placed.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + RATIO * self.width();
    }
}

/// Returns how many shrinks reduce `width` below `epsilon`.
///
/// Zero if the bracket is already narrow enough or its width is not a number.
/// Saturates for infinite widths.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(super) fn shrink_count(width: f64, epsilon: f64) -> usize {
    let count = (-(width / epsilon).ln() / (1.0 - RATIO).ln()).ceil();
    count.max(0.0) as usize
}
