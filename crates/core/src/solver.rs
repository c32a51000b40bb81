mod erased;

pub use erased::{BoxError, DynSolver, ErasedState, ErasedStepError};

use crate::Interpolation;

/// A numerical integrator that advances a state over one interval.
///
/// A solver is stateless itself; anything it needs to carry between steps
/// (previous derivatives, step history, internal buffers) lives in
/// [`Self::State`], which is produced by [`init`](Solver::init), handed back
/// on every [`step`](Solver::step), and replaced by the state that `step`
/// returns. Callers never inspect or modify a solver state, they only pass it
/// back to the solver that produced it.
///
/// Both operations are pure: they borrow their inputs and return new values.
/// An outer driver decides the interval for each call, including backward
/// intervals where `t1 < t0`.
///
/// # Example Implementations
///
/// - `ForwardEuler`, `Rk4`: stateless explicit methods (`State = ()`).
/// - `AdamsBashforth2`: a multistep method that carries its previous
///   derivative in its state.
/// - `SplittingMethod`: a composite built from groups of other solvers.
pub trait Solver<Y> {
    /// Solver-owned data threaded between steps.
    type State;

    /// The error type returned if a step fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the dense-output scheme this solver is designed to pair with.
    fn recommended_interpolation(&self) -> Interpolation;

    /// Creates the solver state for an initial time and value.
    ///
    /// Must be deterministic given its inputs.
    fn init(&self, t0: f64, y0: &Y) -> Self::State;

    /// Advances `y0` from `t0` to `t1`.
    ///
    /// Returns the value at `t1` and the solver state to use for the next step.
    /// Implementations must not assume `t1 > t0`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the step cannot be completed.
    fn step(
        &self,
        t0: f64,
        t1: f64,
        y0: &Y,
        state: &Self::State,
    ) -> Result<(Y, Self::State), Self::Error>;
}
