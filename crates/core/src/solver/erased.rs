use std::{
    any::{Any, type_name},
    fmt,
};

use thiserror::Error;

use crate::{Interpolation, Solver};

/// A boxed, thread-safe error from a type-erased solver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A solver state with its concrete type erased.
///
/// Produced by [`DynSolver::init_erased`] and [`DynSolver::step_erased`]. The
/// state remembers the name of its concrete type so a mismatch can be
/// reported when it is handed to the wrong solver.
pub struct ErasedState {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ErasedState {
    /// Wraps a concrete solver state.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the name of the wrapped state's concrete type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped state is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    /// Returns a reference to the wrapped state if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }
}

impl fmt::Debug for ErasedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErasedState").field(&self.type_name).finish()
    }
}

/// Errors returned by [`DynSolver::step_erased`].
#[derive(Debug, Error)]
pub enum ErasedStepError {
    /// The supplied state was not produced by this kind of solver.
    #[error("expected solver state `{expected}`, found `{found}`")]
    StateType {
        expected: &'static str,
        found: &'static str,
    },

    /// The solver itself failed.
    #[error("{0}")]
    Solver(#[source] BoxError),
}

/// The object-safe view of a [`Solver`].
///
/// Every [`Solver`] whose state is `'static + Send + Sync` implements this
/// trait automatically. It lets solvers with different concrete types and
/// state types live side by side, for example as `Box<dyn DynSolver<Y>>`
/// entries of a splitting method.
pub trait DynSolver<Y> {
    /// Returns the dense-output scheme this solver is designed to pair with.
    fn interpolation(&self) -> Interpolation;

    /// Returns the name of the state type this solver expects.
    fn state_type(&self) -> &'static str;

    /// Creates an erased solver state for an initial time and value.
    fn init_erased(&self, t0: f64, y0: &Y) -> ErasedState;

    /// Advances `y0` from `t0` to `t1` using an erased solver state.
    ///
    /// # Errors
    ///
    /// Returns [`ErasedStepError::StateType`] if `state` does not hold this
    /// solver's state type, or [`ErasedStepError::Solver`] if the step fails.
    fn step_erased(
        &self,
        t0: f64,
        t1: f64,
        y0: &Y,
        state: &ErasedState,
    ) -> Result<(Y, ErasedState), ErasedStepError>;
}

impl<Y, S> DynSolver<Y> for S
where
    S: Solver<Y>,
    S::State: Any + Send + Sync,
{
    fn interpolation(&self) -> Interpolation {
        Solver::recommended_interpolation(self)
    }

    fn state_type(&self) -> &'static str {
        type_name::<S::State>()
    }

    fn init_erased(&self, t0: f64, y0: &Y) -> ErasedState {
        ErasedState::new(self.init(t0, y0))
    }

    fn step_erased(
        &self,
        t0: f64,
        t1: f64,
        y0: &Y,
        state: &ErasedState,
    ) -> Result<(Y, ErasedState), ErasedStepError> {
        let state = state
            .downcast_ref::<S::State>()
            .ok_or_else(|| ErasedStepError::StateType {
                expected: type_name::<S::State>(),
                found: state.type_name(),
            })?;

        let (y1, next) = self
            .step(t0, t1, y0, state)
            .map_err(|err| ErasedStepError::Solver(Box::new(err)))?;

        Ok((y1, ErasedState::new(next)))
    }
}
