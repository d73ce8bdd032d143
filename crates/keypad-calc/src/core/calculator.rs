//! Event-in / text-out calculator
//!
//! Owns one state machine and its tape, and routes keypad tokens to state
//! operations. Frontends read the two text fields it exposes.

use tracing::debug;

use super::config::CalculatorConfig;
use super::state::{CalculatorState, Computation};
use super::tape::Tape;
use super::CalcResult;
use crate::keypad::KeypadAction;

/// One calculator widget instance
#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorState,
    tape: Tape,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::with_precision(config.precision),
            tape: Tape::with_capacity(config.tape_capacity),
            config,
        }
    }

    /// Handles one input token.
    ///
    /// On division by zero the state has already been reset when the error
    /// comes back; the caller only has to tell the user.
    pub fn dispatch(&mut self, action: KeypadAction) -> CalcResult<()> {
        debug!(?action, "dispatch");
        match action {
            KeypadAction::Digit(d) => self.state.input_digit(d),
            KeypadAction::Decimal => self.state.input_decimal(),
            KeypadAction::Backspace => self.state.delete_last(),
            KeypadAction::ClearEntry => self.state.clear_entry(),
            KeypadAction::Clear => self.state.reset_all(),
            KeypadAction::Operator(op) => {
                let computed = self.state.choose_operator(op)?;
                self.record(computed);
            }
            KeypadAction::Equals => {
                let computed = self.state.evaluate()?;
                self.record(computed);
            }
        }
        Ok(())
    }

    fn record(&mut self, computed: Option<Computation>) {
        if let Some(computation) = computed {
            self.tape.record(&computation, self.config.precision);
        }
    }

    /// Primary value display
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display_value()
    }

    /// Secondary expression display
    #[must_use]
    pub fn history_display(&self) -> &str {
        self.state.operation_history()
    }

    /// The underlying state record
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Completed computations
    #[must_use]
    pub const fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Clears the tape
    pub fn clear_tape(&mut self) {
        self.tape.clear();
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
