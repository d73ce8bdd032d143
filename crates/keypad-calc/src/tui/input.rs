//! Keyboard input handling
//!
//! Maps crossterm key events onto the same keypad actions the browser uses.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::keypad::{Keypad, KeypadAction};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiAction {
    /// A calculator key
    Keypad(KeypadAction),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> TuiAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return TuiAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => TuiAction::Quit,
                KeyCode::Char('l') => TuiAction::Keypad(KeypadAction::Clear),
                KeyCode::Char('u') => TuiAction::Keypad(KeypadAction::ClearEntry),
                _ => TuiAction::None,
            };
        }

        let key = match code {
            KeyCode::Char('q') => return TuiAction::Quit,
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            _ => return TuiAction::None,
        };

        Keypad::key_to_action(&key).map_or(TuiAction::None, TuiAction::Keypad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                TuiAction::Keypad(KeypadAction::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                TuiAction::Keypad(KeypadAction::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_control_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            TuiAction::Keypad(KeypadAction::Equals)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            TuiAction::Keypad(KeypadAction::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Delete)),
            TuiAction::Keypad(KeypadAction::ClearEntry)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            TuiAction::Keypad(KeypadAction::Backspace)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            TuiAction::Keypad(KeypadAction::Decimal)
        );
    }

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), TuiAction::Quit);
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            TuiAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            TuiAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_shortcuts() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            TuiAction::Keypad(KeypadAction::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('u'))),
            TuiAction::Keypad(KeypadAction::ClearEntry)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('z'))),
            TuiAction::None
        );
    }

    #[test]
    fn test_handle_ignored_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('a'))), TuiAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), TuiAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Up)), TuiAction::None);
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key(event), TuiAction::None);
    }
}
