//! Keypad Calculator - four-function calculator widget
//!
//! A button-driven calculator: digits build the current entry, an operator
//! stores it as the first operand, the next operator or `=` computes left
//! to right. Results are shown with at most seven fractional digits and
//! division by zero notifies the user and resets the widget.
//!
//! The same [`core::Calculator`] backs a mock-DOM/browser frontend
//! ([`wasm`]) and a terminal frontend (`tui`, default feature).
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for key in ["1", "2", "+", "3", "="] {
//!     let action = Keypad::key_to_action(key).unwrap();
//!     calc.dispatch(action).unwrap();
//! }
//! assert_eq!(calc.display(), "15");
//!
//! for key in ["5", "/", "0", "="] {
//!     let action = Keypad::key_to_action(key).unwrap();
//!     let _ = calc.dispatch(action);
//! }
//! assert_eq!(calc.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;
pub mod notify;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend; the mock DOM is always available for testing
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorConfig, CalculatorState, Operator, Tape,
        TapeEntry,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Keypad, KeypadAction};
    pub use crate::notify::{Notifier, RecordingNotifier};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmCalculator, WasmDriver};
}
