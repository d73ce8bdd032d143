//! Calculator input state machine
//!
//! One [`CalculatorState`] backs one calculator widget. Every keypad event
//! mutates it in place; there is no global instance.
//!
//! ```text
//!            operator               digit / "."
//!   Idle ─────────────▶ OperatorPending ───────────▶ AccumulatingSecondOperand
//!    ▲                   │    ▲  operator (substitute)        │
//!    │                   └────┘                               │ operator (chain)
//!    │                                                        ▼
//!    └──────────────── "=" ◀──────────────────────── OperatorPending
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::format::{format_result, parse_operand, DEFAULT_PRECISION};
use super::operations::{apply, Operator};
use super::{CalcError, CalcResult};

/// Conceptual state derived from the pending operator and waiting flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator awaits a second operand
    Idle,
    /// An operator was chosen; the next digit starts the second operand
    OperatorPending,
    /// Digits for the second operand are being typed
    AccumulatingSecondOperand,
}

/// A completed `first op second = result` step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Computation {
    /// Left operand
    pub first: f64,
    /// Applied operator
    pub operator: Operator,
    /// Right operand
    pub second: f64,
    /// Unrounded result
    pub result: f64,
}

impl Computation {
    /// Expression text, e.g. `6 ÷ 3`
    #[must_use]
    pub fn expression(&self, precision: usize) -> String {
        format!(
            "{} {} {}",
            format_result(self.first, precision),
            self.operator.display_symbol(),
            format_result(self.second, precision)
        )
    }
}

/// Mutable calculator record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    display_value: String,
    first_operand: Option<f64>,
    pending_operator: Option<Operator>,
    waiting_for_second_operand: bool,
    operation_history: String,
    last_result: Option<f64>,
    #[serde(skip, default = "default_precision")]
    precision: usize,
}

const fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates the page-load state: display `0`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }

    /// Creates a fresh state that formats results to `precision` digits
    #[must_use]
    pub fn with_precision(precision: usize) -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            pending_operator: None,
            waiting_for_second_operand: false,
            operation_history: String::new(),
            last_result: None,
            precision,
        }
    }

    /// Current operand being edited, or the latest result
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Operand captured before the pending operator
    #[must_use]
    pub const fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub const fn waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// Human-readable trace of the pending expression
    #[must_use]
    pub fn operation_history(&self) -> &str {
        &self.operation_history
    }

    /// Most recent computed result
    #[must_use]
    pub const fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Fractional digits used when displaying results
    #[must_use]
    pub const fn precision(&self) -> usize {
        self.precision
    }

    /// Derived conceptual state
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match (self.pending_operator, self.waiting_for_second_operand) {
            (None, _) => Phase::Idle,
            (Some(_), true) => Phase::OperatorPending,
            (Some(_), false) => Phase::AccumulatingSecondOperand,
        }
    }

    /// Enters a digit (0-9). Other values are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.waiting_for_second_operand {
            self.display_value = ch.to_string();
            self.waiting_for_second_operand = false;
        } else if self.display_value == "0" {
            self.display_value = ch.to_string();
        } else {
            self.display_value.push(ch);
        }
        trace!(display = %self.display_value, "digit");
    }

    /// Enters a decimal point; no-op if the operand already has one
    pub fn input_decimal(&mut self) {
        if self.waiting_for_second_operand {
            self.display_value = "0.".to_string();
            self.waiting_for_second_operand = false;
        } else if !self.display_value.contains('.') {
            self.display_value.push('.');
        }
        trace!(display = %self.display_value, "decimal");
    }

    /// Removes the last character; a single remaining character or a bare
    /// sign becomes `0`
    pub fn delete_last(&mut self) {
        if self.display_value.chars().count() <= 1 {
            self.display_value = "0".to_string();
            return;
        }
        self.display_value.pop();
        if matches!(self.display_value.as_str(), "-" | "-0") {
            self.display_value = "0".to_string();
        }
    }

    /// Resets only the display
    pub fn clear_entry(&mut self) {
        self.display_value = "0".to_string();
    }

    /// Restores the page-load state, keeping the configured precision
    pub fn reset_all(&mut self) {
        *self = Self::with_precision(self.precision);
        debug!("calculator reset");
    }

    /// Chooses the next operator.
    ///
    /// Pressing a second operator before any digit substitutes it without
    /// computing. Otherwise the display becomes the first operand, or, if an
    /// operator is pending, the pending step is computed and its result
    /// becomes the first operand.
    pub fn choose_operator(&mut self, op: Operator) -> CalcResult<Option<Computation>> {
        if self.pending_operator.is_some() && self.waiting_for_second_operand {
            debug!(operator = ?op, "operator substituted");
            self.pending_operator = Some(op);
            self.operation_history = self.pending_expression(op);
            return Ok(None);
        }

        let input = self.operand()?;
        let computation = match (self.first_operand, self.pending_operator) {
            (Some(first), Some(pending)) => {
                let computation = self.compute(first, input, pending)?;
                self.first_operand = Some(computation.result);
                Some(computation)
            }
            _ => {
                self.first_operand = Some(input);
                None
            }
        };

        self.pending_operator = Some(op);
        self.waiting_for_second_operand = true;
        self.operation_history = self.pending_expression(op);
        debug!(operator = ?op, history = %self.operation_history, "operator chosen");
        Ok(computation)
    }

    /// The `=` action: applies the pending operator to the display value
    /// and ends the chain. Does nothing without a pending operator.
    pub fn evaluate(&mut self) -> CalcResult<Option<Computation>> {
        let (Some(first), Some(op)) = (self.first_operand, self.pending_operator) else {
            trace!("evaluate ignored: nothing pending");
            return Ok(None);
        };

        let second = self.operand()?;
        let computation = self.compute(first, second, op)?;

        self.first_operand = Some(computation.result);
        self.pending_operator = None;
        self.waiting_for_second_operand = false;
        self.operation_history.clear();
        Ok(Some(computation))
    }

    /// Runs one arithmetic step and shows its rounded result.
    /// A failed step resets the whole state before the error is returned.
    fn compute(&mut self, first: f64, second: f64, op: Operator) -> CalcResult<Computation> {
        match apply(first, second, op) {
            Ok(result) => {
                self.display_value = format_result(result, self.precision);
                self.last_result = Some(result);
                debug!(first, second, operator = ?op, result, "computed");
                Ok(Computation {
                    first,
                    operator: op,
                    second,
                    result,
                })
            }
            Err(err) => {
                warn!(first, operator = ?op, error = %err, "resetting calculator");
                self.reset_all();
                Err(err)
            }
        }
    }

    /// Value of the display. An entry too long for `f64` resets the state
    /// like a failed computation.
    fn operand(&mut self) -> CalcResult<f64> {
        let value = parse_operand(&self.display_value);
        if value.is_finite() {
            return Ok(value);
        }
        warn!(digits = self.display_value.len(), "operand out of range, resetting calculator");
        self.reset_all();
        Err(CalcError::Overflow)
    }

    fn pending_expression(&self, op: Operator) -> String {
        let first = self.first_operand.unwrap_or_default();
        format!(
            "{} {}",
            format_result(first, self.precision),
            op.display_symbol()
        )
    }
}
