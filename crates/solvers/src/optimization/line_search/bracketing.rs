use extremal_core::Evaluation;
use log::{debug, trace};

use crate::{
    optimization::{Sample, golden_section},
    trace::Trace,
};

use super::{Config, LineSolution, Status};

/// A line search result in step coordinates `λ`, where `λ = 0` is the start
/// point and `λ = 1` is one full direction step away.
pub(super) struct Outcome<S> {
    status: Status,
    lambda: f64,
    value: f64,
    snapshot: S,
    samples: Vec<Sample<f64, S>>,
    refinement: Option<Trace<golden_section::Step>>,
}

impl<S> Outcome<S> {
    /// Maps step coordinates to positions and builds the public solution.
    pub(super) fn into_solution<P>(self, position: impl Fn(f64) -> P) -> LineSolution<P, S> {
        LineSolution {
            status: self.status,
            point: position(self.lambda),
            value: self.value,
            snapshot: self.snapshot,
            samples: self
                .samples
                .into_iter()
                .map(|sample| sample.map_position(&position))
                .collect(),
            refinement: self.refinement,
        }
    }
}

/// Brackets a minimum along `λ` by step doubling, then refines it.
///
/// `norm` is the length of one direction step; the search gives up once the
/// probe distance `h·norm` falls to `epsilon`.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(super) fn search<S, E>(mut eval: E, norm: f64, config: &Config) -> Outcome<S>
where
    E: FnMut(f64) -> Evaluation<S>,
{
    let mut samples = Vec::new();
    let origin = probe(&mut eval, 0.0, &mut samples);
    let mut h = 1.0;

    let (sign, first) = loop {
        // Also stops on a NaN distance.
        if !(h * norm > config.epsilon()) {
            debug!("line search: no improvement within {}", config.epsilon());
            let Evaluation { value, snapshot } = eval(0.0);
            return Outcome {
                status: Status::NoImprovement,
                lambda: 0.0,
                value,
                snapshot,
                samples,
                refinement: None,
            };
        }

        let forward = probe(&mut eval, h, &mut samples);
        if forward < origin {
            break (1.0, forward);
        }
        let backward = probe(&mut eval, -h, &mut samples);
        if backward < origin {
            break (-1.0, backward);
        }
        h *= 0.5;
    };

    let (bracket, status) = expand(
        &mut eval,
        sign,
        h,
        first,
        config.max_expansions(),
        &mut samples,
    );
    trace!("line search: refining [{}, {}]", bracket[0], bracket[1]);

    let refine = config
        .refine()
        .with_epsilon(config.epsilon() / norm)
        .unwrap_or(*config.refine());
    let refined = golden_section::search(&mut eval, bracket, &refine, ());

    samples.extend(refined.samples);
    Outcome {
        status,
        lambda: refined.x,
        value: refined.value,
        snapshot: refined.snapshot,
        samples,
        refinement: Some(refined.trace),
    }
}

/// Doubles the step in direction `sign` while the value keeps decreasing.
///
/// Returns the bracket `[prev, next]` around the last decrease.
fn expand<S, E>(
    eval: &mut E,
    sign: f64,
    h: f64,
    first: f64,
    max_expansions: usize,
    samples: &mut Vec<Sample<f64, S>>,
) -> ([f64; 2], Status)
where
    E: FnMut(f64) -> Evaluation<S>,
{
    let mut prev = 0.0;
    let mut curr = sign * h;
    let mut curr_value = first;
    let mut step = h;

    for _ in 0..max_expansions {
        step *= 2.0;
        let next = curr + sign * step;
        let next_value = probe(eval, next, samples);
        if next_value < curr_value {
            prev = curr;
            curr = next;
            curr_value = next_value;
        } else {
            return ([prev, next], Status::Converged);
        }
    }

    debug!("line search: expansion limit {max_expansions} reached");
    ([prev, curr], Status::ExpansionLimit)
}

fn probe<S, E>(eval: &mut E, lambda: f64, samples: &mut Vec<Sample<f64, S>>) -> f64
where
    E: FnMut(f64) -> Evaluation<S>,
{
    let Evaluation { value, snapshot } = eval(lambda);
    samples.push(Sample::new(lambda, value, snapshot));
    value
}
