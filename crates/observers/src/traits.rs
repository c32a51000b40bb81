//! Capability traits for cross-driver observers.
//!
//! These traits abstract over driver-specific event and action types, enabling
//! observers to work generically across different drivers.
//!
//! # Event traits
//!
//! - [`HasTime`] - events that occur at a point in time
//! - [`HasStep`] - events that carry a step number
//!
//! # Action traits
//!
//! - [`CanStopEarly`] - actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use strand_core::Observer;
//! use strand_observers::traits::{CanStopEarly, HasStep};
//!
//! struct MaxSteps(usize);
//!
//! impl<E: HasStep, A: CanStopEarly> Observer<E, A> for MaxSteps {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.step() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use strand_solvers::transient::fixed_step;

/// An event that occurs at a point in time.
pub trait HasTime {
    /// Returns the time of this event.
    fn time(&self) -> f64;
}

/// An event that carries a step number.
pub trait HasStep {
    /// Returns the step number, with zero for the initial condition.
    fn step(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the driver early.
    fn stop_early() -> Self;
}

// --- fixed_step ---

impl<Y> HasTime for fixed_step::Event<Y> {
    fn time(&self) -> f64 {
        self.point.t
    }
}

impl<Y> HasStep for fixed_step::Event<Y> {
    fn step(&self) -> usize {
        self.step
    }
}

impl CanStopEarly for fixed_step::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
