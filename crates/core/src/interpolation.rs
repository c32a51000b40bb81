#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The dense-output interpolation scheme a solver is designed to pair with.
///
/// Solvers advertise this through [`Solver::recommended_interpolation`] so a
/// driver can reconstruct the solution between step points. Strand only
/// forwards the tag; building and evaluating the interpolant is left to the
/// caller.
///
/// [`Solver::recommended_interpolation`]: crate::Solver::recommended_interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Interpolation {
    /// Straight line between the step endpoints.
    Linear,

    /// Cubic Hermite polynomial through the endpoint values and derivatives.
    CubicHermite,

    /// Fourth-order polynomial using interior stage information.
    FourthOrderPolynomial,
}
