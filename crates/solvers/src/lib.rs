//! Step integrators, operator splitting, and drivers for Strand.
//!
//! - [`ode`] - single-step integrators implementing [`Solver`], including the
//!   [`SplittingMethod`](ode::SplittingMethod) composite
//! - [`transient`] - drivers that repeatedly step a solver through time
//!
//! [`Solver`]: strand_core::Solver

pub mod ode;
pub mod transient;
