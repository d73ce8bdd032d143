//! TUI application state

use crate::core::{CalcResult, Calculator, CalculatorConfig};
use crate::keypad::KeypadAction;
use crate::notify::Notifier;

use super::input::TuiAction;

/// One-line status area; shows the latest notification until the next key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    message: Option<String>,
}

impl StatusLine {
    /// Current message, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Removes the message
    pub fn clear(&mut self) {
        self.message = None;
    }
}

impl Notifier for StatusLine {
    fn notify(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    calculator: Calculator,
    status: StatusLine,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator app with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            status: StatusLine::default(),
            should_quit: false,
        }
    }

    /// The calculator behind the screen
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Current status message
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.message()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feeds one calculator key; errors are shown on the status line
    pub fn handle_keypad(&mut self, action: KeypadAction) -> CalcResult<()> {
        self.status.clear();
        let result = self.calculator.dispatch(action);
        if let Err(err) = &result {
            self.status.notify(&err.to_string());
        }
        result
    }

    /// Applies a terminal action
    pub fn handle(&mut self, action: TuiAction) {
        match action {
            TuiAction::Keypad(key) => {
                // already surfaced on the status line
                let _ = self.handle_keypad(key);
            }
            TuiAction::Quit => self.quit(),
            TuiAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, Operator};

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::new();
        assert_eq!(app.calculator().display(), "0");
        assert!(app.status().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_app_with_config() {
        let app = CalculatorApp::with_config(CalculatorConfig::new().with_precision(3));
        assert_eq!(app.calculator().config().precision, 3);
    }

    #[test]
    fn test_app_handles_keys() {
        let mut app = CalculatorApp::new();
        app.handle(TuiAction::Keypad(KeypadAction::Digit(4)));
        app.handle(TuiAction::Keypad(KeypadAction::Operator(Operator::Multiply)));
        app.handle(TuiAction::Keypad(KeypadAction::Digit(2)));
        app.handle(TuiAction::Keypad(KeypadAction::Equals));
        assert_eq!(app.calculator().display(), "8");
    }

    #[test]
    fn test_app_quit() {
        let mut app = CalculatorApp::new();
        app.handle(TuiAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_app_none_is_noop() {
        let mut app = CalculatorApp::new();
        app.handle(TuiAction::None);
        assert_eq!(app.calculator().display(), "0");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_divide_by_zero_sets_status_until_next_key() {
        let mut app = CalculatorApp::new();
        app.handle_keypad(KeypadAction::Digit(1)).unwrap();
        app.handle_keypad(KeypadAction::Operator(Operator::Divide))
            .unwrap();
        app.handle_keypad(KeypadAction::Digit(0)).unwrap();
        assert_eq!(
            app.handle_keypad(KeypadAction::Equals),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(app.status(), Some("Cannot divide by zero"));
        assert_eq!(app.calculator().display(), "0");

        app.handle_keypad(KeypadAction::Digit(3)).unwrap();
        assert!(app.status().is_none());
    }

    #[test]
    fn test_status_line_notifier() {
        let mut status = StatusLine::default();
        status.notify("hello");
        assert_eq!(status.message(), Some("hello"));
        status.clear();
        assert!(status.message().is_none());
    }
}
