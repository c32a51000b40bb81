use super::Point;

/// Event emitted by the fixed-step driver for each point.
///
/// Step 0 is the initial condition before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone)]
pub struct Event<Y> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Time and value at this step.
    pub point: Point<Y>,
}
