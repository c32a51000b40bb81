//! Single-step integrators for ordinary differential equations.
//!
//! Every integrator here implements [`Solver`], so any of them can be driven
//! directly or composed inside a [`SplittingMethod`].
//!
//! # Solvers
//!
//! - [`ForwardEuler`] - first-order explicit, stateless
//! - [`Rk4`] - classic fourth-order Runge-Kutta, stateless
//! - [`AdamsBashforth2`] - two-step multistep method carrying its previous
//!   derivative
//! - [`SplittingMethod`] - operator splitting over groups of other solvers
//!
//! [`Solver`]: strand_core::Solver

mod adams_bashforth;
mod euler;
mod rk4;

pub mod splitting;

pub use adams_bashforth::{AdamsBashforth2, History};
pub use euler::ForwardEuler;
pub use rk4::Rk4;
pub use splitting::{Group, SplittingMethod, SplittingState};
