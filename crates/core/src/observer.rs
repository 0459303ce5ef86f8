/// Receives solver events and decides how the iteration should proceed.
///
/// Every solver in the workspace reports its progress through an observer, so
/// callers can log steps, collect custom diagnostics, or stop a long search
/// without the solver knowing about any of it.
///
/// `observe` returns `Some(action)` to request a solver-specific action and
/// `None` to let the solver continue unchanged.
///
/// Closures implement `Observer`, and `()` is the no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<Obs: Observer<usize, Action>>(mut observer: Obs, events: usize) -> usize {
        for event in 0..events {
            if observer.observe(&event) == Some(Action::Stop) {
                return event;
            }
        }
        events
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 5), 5);
    }

    #[test]
    fn closure_observer_can_stop() {
        let stop_at_three = |event: &usize| (*event == 3).then_some(Action::Stop);
        assert_eq!(drive(stop_at_three, 10), 3);
    }
}
