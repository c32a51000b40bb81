use std::convert::Infallible;

/// The right-hand side `dy/dt = f(t, y)` of an ordinary differential equation.
///
/// Step integrators evaluate a vector field at one or more stages per step.
/// The derivative shares the state's type, so integrators can combine them
/// through [`Vector`](crate::Vector).
///
/// Plain closures `Fn(f64, &Y) -> Y` are vector fields that never fail.
pub trait VectorField<Y> {
    /// The error type returned if evaluation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative of `y` at time `t`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn evaluate(&self, t: f64, y: &Y) -> Result<Y, Self::Error>;
}

/// Blanket implementation for infallible closures.
impl<Y, F> VectorField<Y> for F
where
    F: Fn(f64, &Y) -> Y,
{
    type Error = Infallible;

    fn evaluate(&self, t: f64, y: &Y) -> Result<Y, Self::Error> {
        Ok(self(t, y))
    }
}
