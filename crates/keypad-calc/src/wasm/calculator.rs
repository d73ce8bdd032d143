//! Calculator bound to a page
//!
//! Every button click and keydown goes through [`WasmCalculator::handle_event`],
//! which dispatches the token, mirrors the display, history line and tape
//! into the DOM, and raises an alert on division by zero.

use tracing::trace;

use super::dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID, TAPE_ID};
use crate::core::{CalcResult, Calculator, CalculatorConfig};
use crate::keypad::{Keypad, KeypadAction};
use crate::notify::Notifier;

/// Calculator widget attached to a mock page
#[derive(Debug, Clone)]
pub struct WasmCalculator {
    calculator: Calculator,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmCalculator {
    /// Creates a calculator on a fresh calculator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut calc = Self {
            calculator: Calculator::with_config(config),
            keypad: Keypad::new(),
            dom: MockDom::calculator(),
        };
        calc.sync_dom();
        calc
    }

    /// Handles one page event.
    ///
    /// Events that map to no keypad token are recorded and otherwise
    /// ignored.
    pub fn handle_event(&mut self, event: DomEvent) -> CalcResult<()> {
        let action = match &event {
            DomEvent::Click { element_id } => self.keypad.handle_click(element_id),
            DomEvent::KeyPress { key } => Keypad::key_to_action(key),
            DomEvent::Input { .. } | DomEvent::Submit { .. } => None,
        };
        self.dom.dispatch_event(event);

        let Some(action) = action else {
            return Ok(());
        };
        self.handle_action(action)
    }

    /// Handles a keypad token as if its button were clicked
    pub fn handle_action(&mut self, action: KeypadAction) -> CalcResult<()> {
        let result = self.calculator.dispatch(action);
        if let Err(err) = &result {
            self.dom.notify(&err.to_string());
        }
        self.sync_dom();
        result
    }

    /// Clicks the button with `element_id`
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.handle_event(DomEvent::click(element_id))
    }

    /// Presses a keyboard key
    pub fn key_press(&mut self, key: &str) -> CalcResult<()> {
        self.handle_event(DomEvent::key_press(key))
    }

    fn sync_dom(&mut self) {
        trace!(display = self.calculator.display(), "sync dom");
        self.dom
            .set_element_text(DISPLAY_ID, self.calculator.display());
        self.dom
            .set_element_text(HISTORY_ID, self.calculator.history_display());

        self.dom.clear_children(TAPE_ID);
        let items: Vec<DomElement> = self
            .calculator
            .tape()
            .iter_rev()
            .enumerate()
            .map(|(i, entry)| {
                DomElement::new("li")
                    .with_id(&format!("tape-{i}"))
                    .with_text(&entry.display())
            })
            .collect();
        for item in items {
            self.dom.append_child(TAPE_ID, item);
        }
    }

    /// Text of the display element
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.dom.get_element_text(DISPLAY_ID).unwrap_or_default()
    }

    /// Text of the history element
    #[must_use]
    pub fn history_text(&self) -> &str {
        self.dom.get_element_text(HISTORY_ID).unwrap_or_default()
    }

    /// Tape list items, newest first
    #[must_use]
    pub fn tape_items(&self) -> Vec<String> {
        self.dom
            .get_element(TAPE_ID)
            .map(|tape| tape.children.iter().map(|c| c.text_content.clone()).collect())
            .unwrap_or_default()
    }

    /// The calculator behind the page
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The page
    #[must_use]
    pub const fn dom(&self) -> &MockDom {
        &self.dom
    }
}
