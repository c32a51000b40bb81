//! Core traits and types for Strand.
//!
//! This crate defines the shared abstractions that step integrators,
//! splitting methods, drivers, and observers build on:
//!
//! - [`Solver`] - advances a state over one interval `[t0, t1]`, threading
//!   an opaque solver-owned state between calls
//! - [`DynSolver`] - the object-safe view of a [`Solver`], used to compose
//!   heterogeneous solvers behind a single type
//! - [`VectorField`] - the right-hand side `f(t, y)` of an ODE
//! - [`Vector`] - state values that can be added and scaled
//! - [`Observer`] - receives solver events and optionally returns control actions
//! - [`Interpolation`] - the dense-output scheme a solver is designed to pair with

mod interpolation;
mod observer;
mod solver;
mod vector;
mod vector_field;

pub use interpolation::Interpolation;
pub use observer::Observer;
pub use solver::{BoxError, DynSolver, ErasedState, ErasedStepError, Solver};
pub use vector::Vector;
pub use vector_field::VectorField;
