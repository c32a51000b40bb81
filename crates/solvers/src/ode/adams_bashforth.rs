//! Two-step Adams-Bashforth integrator with variable step size.

use strand_core::{Interpolation, Solver, Vector, VectorField};

/// Second-order explicit Adams-Bashforth method.
///
/// Each step reuses the derivative evaluated at the start of the previous
/// step. With `h = t1 - t0`, `h_prev = t0 - t_prev`, and `r = h / (2 h_prev)`:
///
/// ```text
/// y1 = y0 + h * ((1 + r) f(t0, y0) - r f(t_prev, y_prev))
/// ```
///
/// The previous derivative is carried in the solver state as a [`History`].
/// The first step after [`init`](Solver::init), or any step whose previous
/// interval has zero length, falls back to forward Euler.
#[derive(Debug, Clone, Copy)]
pub struct AdamsBashforth2<F> {
    field: F,
}

/// The derivative evaluated at the start of the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct History<Y> {
    t: f64,
    derivative: Y,
}

impl<Y> History<Y> {
    /// Returns the time at which the derivative was evaluated.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Returns the stored derivative.
    #[must_use]
    pub fn derivative(&self) -> &Y {
        &self.derivative
    }
}

impl<F> AdamsBashforth2<F> {
    /// Creates a two-step Adams-Bashforth solver for the given vector field.
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

impl<Y, F> Solver<Y> for AdamsBashforth2<F>
where
    Y: Vector,
    F: VectorField<Y>,
{
    type State = Option<History<Y>>;
    type Error = F::Error;

    fn recommended_interpolation(&self) -> Interpolation {
        Interpolation::Linear
    }

    fn init(&self, _t0: f64, _y0: &Y) -> Self::State {
        None
    }

    fn step(
        &self,
        t0: f64,
        t1: f64,
        y0: &Y,
        state: &Self::State,
    ) -> Result<(Y, Self::State), Self::Error> {
        let h = t1 - t0;
        let derivative = self.field.evaluate(t0, y0)?;

        let slope = match state {
            Some(prev) if prev.t != t0 => {
                let r = h / (2.0 * (t0 - prev.t));
                derivative.clone() * (1.0 + r) + prev.derivative.clone() * (-r)
            }
            _ => derivative.clone(),
        };

        let y1 = y0.clone() + slope * h;
        Ok((y1, Some(History { t: t0, derivative })))
    }
}
