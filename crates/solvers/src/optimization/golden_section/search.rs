use extremal_core::{Evaluation, Observer};

use crate::{optimization::Sample, trace::Trace};

use super::{
    Action, Config, Event, Solution, Status, Step,
    bracket::{GoldenBracket, shrink_count},
};

/// Core golden section search implementation.
///
/// `eval` is called once per probe plus once for the final midpoint.
/// Callers that work in a transformed coordinate (such as line search along a
/// direction) wrap their objective in `eval` and map the samples back.
pub(crate) fn search<S, E, Obs>(
    mut eval: E,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Solution<S>
where
    E: FnMut(f64) -> Evaluation<S>,
    Obs: for<'a> Observer<Event<'a, S>, Action>,
{
    let mut bracket = GoldenBracket::new(bracket);

    let needed = shrink_count(bracket.width(), config.epsilon());
    let (shrinks, status) = if needed > config.max_iters() {
        (config.max_iters(), Status::MaxIters)
    } else {
        (needed, Status::Converged)
    };

    let mut samples = Vec::new();
    let mut trace = Trace::new();

    // Probe values carried over from the previous step.
    let mut known_left: Option<f64> = None;
    let mut known_right: Option<f64> = None;

    for iter in 0..shrinks {
        let y1 = match known_left {
            Some(y) => y,
            None => probe(&mut eval, bracket.inner_left, &mut samples),
        };
        let y2 = match known_right {
            Some(y) => y,
            None => probe(&mut eval, bracket.inner_right, &mut samples),
        };

        let step = Step {
            iter,
            a: bracket.left,
            b: bracket.right,
            x1: bracket.inner_left,
            x2: bracket.inner_right,
            y1,
            y2,
        };

        let action = samples.last().and_then(|latest| {
            observer.observe(&Event {
                step: &step,
                latest,
            })
        });
        trace.push(step);

        if action == Some(Action::StopEarly) {
            return finish(
                eval,
                &bracket,
                Status::StoppedByObserver,
                iter,
                samples,
                trace,
            );
        }

        if y1 > y2 {
            bracket.shrink_left();
            known_left = Some(y2);
            known_right = None;
        } else {
            bracket.shrink_right();
            known_right = Some(y1);
            known_left = None;
        }
    }

    finish(eval, &bracket, status, shrinks, samples, trace)
}

/// Evaluates a probe, records it, and returns its value.
fn probe<S, E>(eval: &mut E, x: f64, samples: &mut Vec<Sample<f64, S>>) -> f64
where
    E: FnMut(f64) -> Evaluation<S>,
{
    let Evaluation { value, snapshot } = eval(x);
    samples.push(Sample::new(x, value, snapshot));
    value
}

/// Evaluates the bracket midpoint and assembles the solution.
fn finish<S, E>(
    mut eval: E,
    bracket: &GoldenBracket,
    status: Status,
    iters: usize,
    samples: Vec<Sample<f64, S>>,
    trace: Trace<Step>,
) -> Solution<S>
where
    E: FnMut(f64) -> Evaluation<S>,
{
    let x = bracket.midpoint();
    let Evaluation { value, snapshot } = eval(x);

    Solution {
        status,
        x,
        value,
        snapshot,
        iters,
        samples,
        trace,
    }
}
