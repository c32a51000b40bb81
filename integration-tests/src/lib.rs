//! Shared systems for Strand integration tests.
//!
//! Each system is written as separate vector fields so tests can integrate the
//! full right-hand side with one solver, or split it across several.

pub mod oscillator {
    //! A damped oscillator `y' = (R + D) y` in two dimensions.
    //!
    //! `R` is a rotation and `D` an anisotropic damping. The two operators do
    //! not commute, so Lie splitting is only first-order accurate.

    use ndarray::{Array1, array};

    /// Damping rate on the first component.
    pub const DAMPING_X: f64 = 1.0;

    /// Damping rate on the second component.
    pub const DAMPING_V: f64 = 0.2;

    pub fn initial() -> Array1<f64> {
        array![1.0, 0.0]
    }

    pub fn rotation(_t: f64, y: &Array1<f64>) -> Array1<f64> {
        array![-y[1], y[0]]
    }

    pub fn damping(_t: f64, y: &Array1<f64>) -> Array1<f64> {
        array![-DAMPING_X * y[0], -DAMPING_V * y[1]]
    }

    pub fn combined(t: f64, y: &Array1<f64>) -> Array1<f64> {
        rotation(t, y) + damping(t, y)
    }

    /// Euclidean distance between two states.
    pub fn distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
        (a - b).mapv(|d| d * d).sum().sqrt()
    }
}

pub mod forced_decay {
    //! The scalar problem `y' = -y + sin(t)`.

    use std::convert::Infallible;

    use strand_core::{Interpolation, Solver};

    pub fn decay(_t: f64, y: &f64) -> f64 {
        -y
    }

    pub fn forcing(t: f64) -> f64 {
        t.sin()
    }

    pub fn combined(t: f64, y: &f64) -> f64 {
        decay(t, y) + forcing(t)
    }

    /// Exact solution for `y(0) = y0`.
    pub fn exact(t: f64, y0: f64) -> f64 {
        (y0 + 0.5) * (-t).exp() + 0.5 * (t.sin() - t.cos())
    }

    /// Returns only the increment `h * sin(t0)` contributed by the forcing.
    ///
    /// Meant to sit in the same group as a solver for the decay term, whose
    /// full output it is added to.
    #[derive(Debug, Clone, Copy)]
    pub struct ForcingIncrement;

    impl Solver<f64> for ForcingIncrement {
        type State = ();
        type Error = Infallible;

        fn recommended_interpolation(&self) -> Interpolation {
            Interpolation::Linear
        }

        fn init(&self, _t0: f64, _y0: &f64) {}

        fn step(&self, t0: f64, t1: f64, _y0: &f64, _state: &()) -> Result<(f64, ()), Infallible> {
            Ok(((t1 - t0) * forcing(t0), ()))
        }
    }
}
