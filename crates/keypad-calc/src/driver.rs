//! Unified calculator driver
//!
//! Write the behavioural checks once, run them against every frontend.
//! The mock-DOM driver and the terminal driver both implement
//! [`CalculatorDriver`]; the `verify_*` functions below exercise the
//! calculator purely through key presses and the two text displays.

// Verification helpers panic on mismatch, like assertions.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use crate::core::{CalcError, CalcResult, CalculatorState};
use crate::keypad::{Keypad, KeypadAction};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one key or button
    fn press(&mut self, action: KeypadAction) -> CalcResult<()>;

    /// Primary display text
    fn display(&self) -> String;

    /// Secondary expression display text
    fn history_display(&self) -> String;

    /// Notifications shown to the user so far
    fn notifications(&self) -> Vec<String>;

    /// The calculator state behind the frontend
    fn state(&self) -> &CalculatorState;

    /// Returns the frontend to its initial state
    fn reset(&mut self);

    /// Presses a sequence, stopping at the first error
    fn press_all(&mut self, actions: &[KeypadAction]) -> CalcResult<()> {
        for action in actions {
            self.press(*action)?;
        }
        Ok(())
    }
}

/// Converts a compact key script such as `"12+3="` into actions.
///
/// Each character is looked up with [`Keypad::key_to_action`]; characters
/// without a mapping are skipped.
#[must_use]
pub fn keys(script: &str) -> Vec<KeypadAction> {
    script
        .chars()
        .filter_map(|ch| Keypad::key_to_action(ch.encode_utf8(&mut [0; 4])))
        .collect()
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver, CalculatorState, KeypadAction};
    use crate::tui::CalculatorApp;

    /// Terminal driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub const fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub const fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
            self.app.handle_keypad(action)
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn history_display(&self) -> String {
            self.app.calculator().history_display().to_string()
        }

        fn notifications(&self) -> Vec<String> {
            self.app.status().into_iter().map(str::to_string).collect()
        }

        fn state(&self) -> &CalculatorState {
            self.app.calculator().state()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::with_config(*self.app.calculator().config());
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified behavioural checks =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate; a leading zero collapses
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("0123")).unwrap();
    assert_eq!(driver.display(), "123");

    driver.reset();
    driver.press_all(&keys("907")).unwrap();
    assert_eq!(driver.display(), "907");
}

/// A second decimal point without a digit in between changes nothing
pub fn verify_decimal_idempotent<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("4.")).unwrap();
    assert_eq!(driver.display(), "4.");
    driver.press(KeypadAction::Decimal).unwrap();
    assert_eq!(driver.display(), "4.");
    driver.press_all(&keys("5.6")).unwrap();
    assert_eq!(driver.display(), "4.56");
}

/// Two operators in a row substitute without computing
pub fn verify_operator_substitution<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("8+")).unwrap();
    assert_eq!(driver.history_display(), "8 +");
    driver.press_all(&keys("-")).unwrap();
    assert_eq!(driver.history_display(), "8 −");
    assert_eq!(driver.state().first_operand(), Some(8.0));
    assert_eq!(driver.display(), "8");
    driver.press_all(&keys("3=")).unwrap();
    assert_eq!(driver.display(), "5");
}

/// `1 + 2 =` shows 3 and keeps 3 as the first operand
pub fn verify_addition_round_trip<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("1+2=")).unwrap();
    assert_eq!(driver.display(), "3");
    assert_eq!(driver.state().first_operand(), Some(3.0));
    assert!(driver.history_display().is_empty());
}

/// `6 ÷ 3 × 4 =` computes left to right
pub fn verify_chained_computation<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("6/3*")).unwrap();
    assert_eq!(driver.display(), "2");
    assert_eq!(driver.history_display(), "2 ×");
    driver.press_all(&keys("4=")).unwrap();
    assert_eq!(driver.display(), "8");
}

/// Division by zero notifies the user and resets
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    let result = driver.press_all(&keys("5/0="));
    assert_eq!(result, Err(CalcError::DivideByZero));
    assert!(driver
        .notifications()
        .iter()
        .any(|n| n.contains("Cannot divide by zero")));
    assert_eq!(driver.display(), "0");
    assert!(driver.history_display().is_empty());
    assert_eq!(
        driver.state(),
        &CalculatorState::with_precision(driver.state().precision())
    );
}

/// Results keep at most seven fractional digits and no trailing zeros
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("1/3=")).unwrap();
    assert_eq!(driver.display(), "0.3333333");

    driver.reset();
    driver.press_all(&keys("4/2=")).unwrap();
    assert_eq!(driver.display(), "2");
}

/// Backspace removes one character; the last one becomes 0
pub fn verify_delete_last<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("7")).unwrap();
    driver.press(KeypadAction::Backspace).unwrap();
    assert_eq!(driver.display(), "0");

    driver.reset();
    driver.press_all(&keys("12")).unwrap();
    driver.press(KeypadAction::Backspace).unwrap();
    assert_eq!(driver.display(), "1");
}

/// Clear-entry keeps the pending operation
pub fn verify_clear_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press_all(&keys("9*5")).unwrap();
    driver.press(KeypadAction::ClearEntry).unwrap();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.history_display(), "9 ×");
    driver.press_all(&keys("2=")).unwrap();
    assert_eq!(driver.display(), "18");
}

/// Runs every check above in turn
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_idempotent(driver);
    verify_operator_substitution(driver);
    verify_addition_round_trip(driver);
    verify_chained_computation(driver);
    verify_divide_by_zero(driver);
    verify_formatting(driver);
    verify_delete_last(driver);
    verify_clear_entry(driver);
}
