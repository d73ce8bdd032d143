//! Keypad model shared by every frontend
//!
//! Layout:
//! ```text
//! [ C ] [ CE] [ ⌫ ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [    =    ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// One input token: a button press or the matching keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Reset only the current entry
    ClearEntry,
    /// Delete the last character
    Backspace,
}

impl KeypadAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.display_symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::ClearEntry => "CE".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Returns the element id of the button for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::ClearEntry => "btn-clear-entry".to_string(),
            Self::Backspace => "btn-backspace".to_string(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button covers
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-cell button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// Whether the button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Standard calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad layout
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Backspace, Clear, ClearEntry, Decimal, Digit, Equals};

        let buttons = vec![
            // Row 0: C CE ⌫ ÷
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(ClearEntry, 0, 1),
            KeypadButtonDef::new(Backspace, 0, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 −
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Add), 3, 3),
            // Row 4: 0 . =
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(Decimal, 4, 1),
            KeypadButtonDef::spanning(Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the buttons of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Processes a button click and returns its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a keyboard key name to a keypad action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "Enter" | "=" => return Some(KeypadAction::Equals),
            "Escape" | "c" | "C" => return Some(KeypadAction::Clear),
            "Delete" => return Some(KeypadAction::ClearEntry),
            "Backspace" => return Some(KeypadAction::Backspace),
            "." | "," => return Some(KeypadAction::Decimal),
            _ => {}
        }

        let mut chars = key.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if let Some(d) = ch.to_digit(10) {
            return Some(KeypadAction::Digit(d as u8));
        }
        Operator::from_symbol(ch).map(KeypadAction::Operator)
    }
}
