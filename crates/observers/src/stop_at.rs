use strand_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops a driver once it reaches a target time.
///
/// The integration direction is taken from the first observed event: if it
/// starts before the target, the driver stops at the first event with
/// `t >= target`; otherwise at the first event with `t <= target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAt {
    target: f64,
    forward: Option<bool>,
}

impl StopAt {
    /// Creates an observer that stops at `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            forward: None,
        }
    }

    /// Returns the target time.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E, A> Observer<E, A> for StopAt
where
    E: HasTime,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let t = event.time();
        let forward = *self.forward.get_or_insert(t <= self.target);

        let reached = if forward {
            t >= self.target
        } else {
            t <= self.target
        };

        reached.then(A::stop_early)
    }
}
