//! Calculator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::DEFAULT_PRECISION;
use super::tape::Tape;

/// Largest precision that still round-trips through `f64`
pub const MAX_PRECISION: usize = 15;

/// Largest accepted tape capacity
pub const MAX_TAPE_CAPACITY: usize = 10_000;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Precision beyond what an `f64` can represent
    #[error("precision {0} exceeds maximum of {max}", max = MAX_PRECISION)]
    PrecisionTooLarge(usize),
    /// A tape that cannot hold anything
    #[error("tape capacity must be at least 1")]
    EmptyTape,
    /// A tape longer than any frontend can show
    #[error("tape capacity {0} exceeds maximum of {max}", max = MAX_TAPE_CAPACITY)]
    TapeTooLarge(usize),
}

/// Tunables for one calculator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CalculatorConfig {
    /// Fractional digits kept when displaying results
    pub precision: usize,
    /// Maximum number of tape entries
    pub tape_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            tape_capacity: Tape::DEFAULT_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display precision
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, capacity: usize) -> Self {
        self.tape_capacity = capacity;
        self
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge(self.precision));
        }
        if self.tape_capacity == 0 {
            return Err(ConfigError::EmptyTape);
        }
        if self.tape_capacity > MAX_TAPE_CAPACITY {
            return Err(ConfigError::TapeTooLarge(self.tape_capacity));
        }
        Ok(())
    }
}
