//! Core calculator: operators, display formatting, the input state machine
//! and the calculation tape.
//!
//! Everything in here is frontend-agnostic. The mock DOM, browser and
//! terminal frontends all drive the same [`Calculator`].

mod calculator;
pub mod config;
pub mod format;
mod operations;
pub mod state;
pub mod tape;

pub use calculator::Calculator;
pub use config::{CalculatorConfig, ConfigError};
pub use operations::{apply, Operator};
pub use state::{CalculatorState, Computation, Phase};
pub use tape::{Tape, TapeEntry};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The state has already been reset when either error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division with a zero divisor
    #[error("Cannot divide by zero")]
    DivideByZero,
    /// An operand or result beyond the `f64` range
    #[error("Number is too large")]
    Overflow,
}
