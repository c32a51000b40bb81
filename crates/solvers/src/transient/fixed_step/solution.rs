#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A solution value at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<Y> {
    pub t: f64,
    pub y: Y,
}

impl<Y> Point<Y> {
    /// Creates a new point from a time and value.
    pub fn new(t: f64, y: Y) -> Self {
        Self { t, y }
    }
}

/// Indicates how the driver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone)]
pub struct Solution<Y> {
    /// How the driver terminated.
    pub status: Status,

    /// History of points from each step (including the initial condition).
    pub history: Vec<Point<Y>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<Y> Solution<Y> {
    /// Returns the last recorded point.
    #[must_use]
    pub fn last(&self) -> Option<&Point<Y>> {
        self.history.last()
    }
}
