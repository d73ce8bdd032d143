//! Mock-DOM driver
//!
//! Runs the shared behavioural checks by clicking buttons on the mock
//! page and reading the displays back out of the DOM.

use super::calculator::WasmCalculator;
use crate::core::{CalcResult, CalculatorConfig, CalculatorState};
use crate::driver::CalculatorDriver;
use crate::keypad::KeypadAction;

/// Driver clicking through the mock page
#[derive(Debug, Default)]
pub struct WasmDriver {
    calculator: WasmCalculator,
}

impl WasmDriver {
    /// Creates a driver on a fresh page
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with custom calculator settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: WasmCalculator::with_config(config),
        }
    }

    /// The page-bound calculator
    #[must_use]
    pub const fn calculator(&self) -> &WasmCalculator {
        &self.calculator
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) -> CalcResult<()> {
        self.calculator.click(&action.element_id())
    }

    fn display(&self) -> String {
        self.calculator.display_text().to_string()
    }

    fn history_display(&self) -> String {
        self.calculator.history_text().to_string()
    }

    fn notifications(&self) -> Vec<String> {
        self.calculator.dom().alerts().to_vec()
    }

    fn state(&self) -> &CalculatorState {
        self.calculator.calculator().state()
    }

    fn reset(&mut self) {
        let config = *self.calculator.calculator().config();
        self.calculator = WasmCalculator::with_config(config);
    }
}
