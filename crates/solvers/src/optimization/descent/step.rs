use crate::trace::{Record, format_vector};

/// Digits after the decimal point in log lines.
const PRECISION: usize = 6;

/// One descent iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Zero-based iteration index.
    pub iter: usize,

    /// Point at the start of the iteration.
    pub start: Vec<f64>,

    /// Point at the end of the iteration.
    pub end: Vec<f64>,

    /// Gradient at `start`, for gradient-based variants.
    pub gradient: Option<Vec<f64>>,

    /// Conjugation coefficient, for iterations after the first.
    pub beta: Option<f64>,
}

impl Record for Step {
    type Point = Vec<f64>;
    const BATCH: usize = 1;

    fn fields(&self) -> Vec<String> {
        let mut line = format!(
            "{}) Start = {}; End = {}",
            self.iter,
            format_vector(&self.start, PRECISION),
            format_vector(&self.end, PRECISION),
        );
        if let Some(gradient) = &self.gradient {
            line.push_str("; Gradient = ");
            line.push_str(&format_vector(gradient, PRECISION));
        }
        if let Some(beta) = self.beta {
            line.push_str(&format!("; Beta = {beta:.prec$}", prec = PRECISION));
        }
        vec![line]
    }

    fn points(&self) -> Vec<Vec<f64>> {
        vec![self.start.clone(), self.end.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_step_omits_gradient() {
        let step = Step {
            iter: 0,
            start: vec![0.0, 1.0],
            end: vec![0.5, 1.0],
            gradient: None,
            beta: None,
        };

        assert_eq!(
            step.fields(),
            vec!["0) Start = [0.000000, 1.000000]; End = [0.500000, 1.000000]"]
        );
    }

    #[test]
    fn conjugate_step_lists_everything() {
        let step = Step {
            iter: 4,
            start: vec![1.0],
            end: vec![2.0],
            gradient: Some(vec![-0.5]),
            beta: Some(0.25),
        };

        assert_eq!(
            step.fields(),
            vec![
                "4) Start = [1.000000]; End = [2.000000]; \
                 Gradient = [-0.500000]; Beta = 0.250000"
            ]
        );
        assert_eq!(step.points(), vec![vec![1.0], vec![2.0]]);
    }
}
