//! Reusable observers for Strand solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across different drivers in the Strand ecosystem.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-driver observers
//!   ([`HasTime`], [`HasStep`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopAt`] - stops a driver once it reaches a target time, in either
//!   integration direction
//! - [`TraceObserver`] - collects named traces against time for later
//!   inspection or plotting
//!
//! [`Observer`]: strand_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStep`]: traits::HasStep
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_at;
mod trace;

pub use stop_at::StopAt;
pub use trace::{TraceObserver, Traceable};
