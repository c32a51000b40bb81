//! Drivers that advance a [`Solver`] through time.
//!
//! # Drivers
//!
//! - [`fixed_step`] - repeated steps of constant size, forward or backward
//!
//! [`Solver`]: strand_core::Solver

pub mod fixed_step;
