#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the fixed-step driver.
///
/// A negative `dt` integrates backward in time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    dt: f64,
    steps: usize,
}

/// Errors that can occur when validating a fixed-step driver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("dt must be finite and non-zero")]
    Dt,

    #[error("spanning an interval requires at least one step")]
    Steps,
}

impl Config {
    /// Creates a new config with a validated step size.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is zero or non-finite.
    pub fn new(dt: f64, steps: usize) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt == 0.0 {
            return Err(ConfigError::Dt);
        }

        Ok(Self { dt, steps })
    }

    /// Creates a config that reaches `t_end` from `t0` in `steps` equal steps.
    ///
    /// # Errors
    ///
    /// Returns an error if `steps` is zero, or if the resulting step size is
    /// zero or non-finite.
    pub fn spanning(t0: f64, t_end: f64, steps: usize) -> Result<Self, ConfigError> {
        if steps == 0 {
            return Err(ConfigError::Steps);
        }

        #[allow(clippy::cast_precision_loss)]
        let n = steps as f64;
        Self::new((t_end - t0) / n, steps)
    }

    /// Returns the step size.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of steps to take.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the time after `step` steps from `t0`.
    ///
    /// Computed directly from the step index so rounding does not accumulate.
    #[must_use]
    pub fn time_at(&self, t0: f64, step: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = step as f64;
        t0 + n * self.dt
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConfig {
    dt: f64,
    steps: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.dt, raw.steps)
    }
}
