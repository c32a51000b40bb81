//! Forward Euler step integrator.
//!
//! ```text
//! y1 = y0 + f(t0, y0) * (t1 - t0)
//! ```

use strand_core::{Interpolation, Solver, Vector, VectorField};

/// First-order explicit Euler method.
///
/// Stateless: [`Solver::State`] is `()`. Best suited for simple systems where
/// speed matters more than accuracy, or as a building block inside a
/// [`SplittingMethod`](super::SplittingMethod).
#[derive(Debug, Clone, Copy)]
pub struct ForwardEuler<F> {
    field: F,
}

impl<F> ForwardEuler<F> {
    /// Creates a forward Euler solver for the given vector field.
    #[must_use]
    pub fn new(field: F) -> Self {
        Self { field }
    }

    /// Returns the vector field being integrated.
    #[must_use]
    pub fn field(&self) -> &F {
        &self.field
    }
}

impl<Y, F> Solver<Y> for ForwardEuler<F>
where
    Y: Vector,
    F: VectorField<Y>,
{
    type State = ();
    type Error = F::Error;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    fn init(&self, _t0: f64, _y0: &Y) {}

    fn step(&self, t0: f64, t1: f64, y0: &Y, _state: &()) -> Result<(Y, ()), Self::Error> {
        let slope = self.field.evaluate(t0, y0)?;
        Ok((y0.clone() + slope * (t1 - t0), ()))
    }
}
