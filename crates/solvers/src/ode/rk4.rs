//! Classic fourth-order Runge-Kutta step integrator.

use strand_core::{Interpolation, Solver, Vector, VectorField};

/// Classic explicit fourth-order Runge-Kutta method.
///
/// Four vector field evaluations per step:
///
/// ```text
/// k1 = f(t0,       y0)
/// k2 = f(t0 + h/2, y0 + k1 * h/2)
/// k3 = f(t0 + h/2, y0 + k2 * h/2)
/// k4 = f(t1,       y0 + k3 * h)
/// y1 = y0 + (k1 + 2 k2 + 2 k3 + k4) * h/6
/// ```
///
/// Stateless: [`Solver::State`] is `()`. Pairs with cubic Hermite dense output.
#[derive(Debug, Clone, Copy)]
pub struct Rk4<F> {
    field: F,
}

impl<F> Rk4<F> {
    /// Creates a fourth-order Runge-Kutta solver for the given vector field.
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

impl<Y, F> Solver<Y> for Rk4<F>
where
    Y: Vector,
    F: VectorField<Y>,
{
    type State = ();
    type Error = F::Error;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::CubicHermite
    }

    fn init(&self, _t0: f64, _y0: &Y) {}

    fn step(&self, t0: f64, t1: f64, y0: &Y, _state: &()) -> Result<(Y, ()), Self::Error> {
        let h = t1 - t0;
        let half = 0.5 * h;
        let t_mid = t0 + half;

        let k1 = self.field.evaluate(t0, y0)?;
        let k2 = self.field.evaluate(t_mid, &(y0.clone() + k1.clone() * half))?;
        let k3 = self.field.evaluate(t_mid, &(y0.clone() + k2.clone() * half))?;
        let k4 = self.field.evaluate(t1, &(y0.clone() + k3.clone() * h))?;

        let slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;
        Ok((y0.clone() + slope * (h / 6.0), ()))
    }
}
