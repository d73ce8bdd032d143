//! Browser bindings
//!
//! `wasm-bindgen` exports for the calculator page. The page forwards button
//! clicks by element id and `keydown` events by key name, then re-renders
//! the two displays from the getters.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::config::MAX_PRECISION;
use crate::core::{Calculator, CalculatorConfig};
use crate::keypad::{Keypad, KeypadAction};
use crate::notify::Notifier;

/// Notifier backed by `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&mut self, message: &str) {
        tracing::info!(message, "alert");
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            console::error_1(&message.into());
        }
    }
}

/// Calculator widget exported to JavaScript
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: Keypad,
    alert: BrowserAlert,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_precision(CalculatorConfig::default().precision)
    }

    /// Creates a calculator rounding results to `precision` digits, at
    /// most [`MAX_PRECISION`]
    #[wasm_bindgen(js_name = withPrecision)]
    pub fn with_precision(precision: usize) -> Self {
        let precision = precision.min(MAX_PRECISION);
        Self {
            calculator: Calculator::with_config(CalculatorConfig::new().with_precision(precision)),
            keypad: Keypad::new(),
            alert: BrowserAlert,
        }
    }

    /// Primary display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Pending expression text
    #[wasm_bindgen(getter)]
    pub fn history(&self) -> String {
        self.calculator.history_display().to_string()
    }

    /// Handles a click on the button with `button_id`.
    ///
    /// Returns false when the id is not a keypad button.
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        self.keypad
            .handle_click(button_id)
            .map(|action| self.handle_action(action))
            .is_some()
    }

    /// Handles a `keydown` by `KeyboardEvent.key`.
    ///
    /// Returns false for keys the calculator ignores so the page can leave
    /// the event alone.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        Keypad::key_to_action(key)
            .map(|action| self.handle_action(action))
            .is_some()
    }

    /// Tape as a JSON array of `{expression, result}`
    #[wasm_bindgen(js_name = tapeJson)]
    pub fn tape_json(&self) -> String {
        self.calculator
            .tape()
            .to_json()
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// Number of tape entries
    #[wasm_bindgen(js_name = tapeLen)]
    pub fn tape_len(&self) -> usize {
        self.calculator.tape().len()
    }

    fn handle_action(&mut self, action: KeypadAction) {
        if let Err(err) = self.calculator.dispatch(action) {
            self.alert.notify(&err.to_string());
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"keypad-calc initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_calculator_new() {
        let calc = BrowserCalculator::new();
        assert_eq!(calc.display(), "0");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_handle_button() {
        let mut calc = BrowserCalculator::new();
        assert!(calc.handle_button("btn-5"));
        assert!(calc.handle_button("btn-plus"));
        assert_eq!(calc.history(), "5 +");
        assert!(calc.handle_button("btn-3"));
        assert!(calc.handle_button("btn-equals"));
        assert_eq!(calc.display(), "8");
        assert!(!calc.handle_button("not-a-button"));
    }

    #[test]
    fn test_handle_key() {
        let mut calc = BrowserCalculator::new();
        for key in ["7", "*", "6", "Enter"] {
            assert!(calc.handle_key(key));
        }
        assert_eq!(calc.display(), "42");
        assert!(!calc.handle_key("Tab"));
    }

    #[test]
    fn test_precision_clamped() {
        let mut calc = BrowserCalculator::with_precision(usize::MAX);
        for key in ["1", "/", "3", "="] {
            calc.handle_key(key);
        }
        assert_eq!(calc.display(), "0.333333333333333");
    }

    #[test]
    fn test_tape() {
        let mut calc = BrowserCalculator::with_precision(2);
        for key in ["2", "/", "3", "="] {
            calc.handle_key(key);
        }
        assert_eq!(calc.display(), "0.67");
        assert_eq!(calc.tape_len(), 1);
        assert!(calc.tape_json().contains("0.67"));
    }
}
