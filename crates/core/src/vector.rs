use std::ops::{Add, Mul};

/// A state value that can be added to another and scaled by a step size.
///
/// Implementing this trait enables generic step integrators to form linear
/// combinations like `y + f * h`. It is implemented automatically for any type
/// with owned `Add` and `Mul<f64>`, which covers `f64` and
/// `ndarray::Array1<f64>`.
///
/// The splitting method itself only needs `Clone + Add`; scaling is required
/// by the concrete integrators.
pub trait Vector: Clone + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Vector for T where T: Clone + Add<Output = T> + Mul<f64, Output = T> {}
