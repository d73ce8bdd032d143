//! Scripted mode
//!
//! `--keys` takes whitespace separated key names, the same names the
//! keyboard handler understands (`7`, `+`, `x`, `Enter`, `Escape`,
//! `Backspace`, `Delete`, ...). A number token such as `125` or `12.5` is
//! typed character by character.

use std::io::Write;

use keypad_calc::core::Calculator;
use keypad_calc::keypad::{Keypad, KeypadAction};
use keypad_calc::notify::Notifier;
use serde_json::json;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Notifier printing `Error: <message>` lines
#[derive(Debug)]
pub struct ErrorWriter<W: Write> {
    out: W,
}

impl<W: Write> ErrorWriter<W> {
    /// Wraps a writer, usually stderr
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the wrapped writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ErrorWriter<W> {
    fn notify(&mut self, message: &str) {
        // stderr going away must not abort the script
        let _ = writeln!(self.out, "Error: {message}");
    }
}

/// Parses a key script into keypad tokens
pub fn parse_script(script: &str) -> CliResult<Vec<KeypadAction>> {
    let mut actions = Vec::new();
    for token in script.split_whitespace() {
        if token.len() > 1 && token.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            actions.extend(
                token
                    .chars()
                    .filter_map(|ch| Keypad::key_to_action(ch.encode_utf8(&mut [0; 4]))),
            );
            continue;
        }
        let action = Keypad::key_to_action(token).ok_or_else(|| CliError::unknown_key(token))?;
        actions.push(action);
    }
    debug!(count = actions.len(), "parsed key script");
    Ok(actions)
}

/// Feeds every token to the calculator, reporting errors and carrying on.
///
/// Returns the number of errors reported.
pub fn run_script<N: Notifier>(
    calculator: &mut Calculator,
    actions: &[KeypadAction],
    notifier: &mut N,
) -> usize {
    let mut errors = 0;
    for action in actions {
        if let Err(err) = calculator.dispatch(*action) {
            errors += 1;
            notifier.notify(&err.to_string());
        }
    }
    errors
}

/// Final output: the display, then the history line if any
#[must_use]
pub fn render_text(calculator: &Calculator) -> String {
    let mut out = calculator.display().to_string();
    if !calculator.history_display().is_empty() {
        out.push('\n');
        out.push_str(calculator.history_display());
    }
    out
}

/// Final output as a JSON document with the state and the tape
pub fn render_json(calculator: &Calculator) -> CliResult<String> {
    let snapshot = json!({
        "display": calculator.display(),
        "history": calculator.history_display(),
        "state": calculator.state(),
        "tape": calculator.tape().iter().collect::<Vec<_>>(),
    });
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypad_calc::core::Operator;

    fn run(script: &str) -> (Calculator, String) {
        let mut calc = Calculator::new();
        let actions = parse_script(script).unwrap();
        let mut notifier = ErrorWriter::new(Vec::new());
        run_script(&mut calc, &actions, &mut notifier);
        let errors = String::from_utf8(notifier.into_inner()).unwrap();
        (calc, errors)
    }

    #[test]
    fn test_parse_named_and_symbol_keys() {
        let actions = parse_script("7 x 6 Enter Escape Backspace Delete").unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(7),
                KeypadAction::Operator(Operator::Multiply),
                KeypadAction::Digit(6),
                KeypadAction::Equals,
                KeypadAction::Clear,
                KeypadAction::Backspace,
                KeypadAction::ClearEntry,
            ]
        );
    }

    #[test]
    fn test_parse_splits_numbers() {
        let actions = parse_script("125 +").unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[2], KeypadAction::Digit(5));
    }

    #[test]
    fn test_parse_splits_decimal_numbers() {
        let actions = parse_script("12.5 .5").unwrap();
        assert_eq!(
            actions,
            vec![
                KeypadAction::Digit(1),
                KeypadAction::Digit(2),
                KeypadAction::Decimal,
                KeypadAction::Digit(5),
                KeypadAction::Decimal,
                KeypadAction::Digit(5),
            ]
        );
    }

    #[test]
    fn test_run_decimal_tokens() {
        let (calc, _) = run("12.5 x 4 =");
        assert_eq!(render_text(&calc), "50");
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = parse_script("1 + foo").unwrap_err();
        assert_eq!(err.to_string(), "Unknown key: foo");
    }

    #[test]
    fn test_parse_empty_script() {
        assert!(parse_script("   ").unwrap().is_empty());
    }

    #[test]
    fn test_run_chain() {
        let (calc, errors) = run("12 + 3 x 2 =");
        assert_eq!(render_text(&calc), "30");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_render_pending_history() {
        let (calc, _) = run("9 /");
        assert_eq!(render_text(&calc), "9\n9 ÷");
    }

    #[test]
    fn test_divide_by_zero_continues() {
        let (calc, errors) = run("5 / 0 = 2 + 2 =");
        assert_eq!(errors, "Error: Cannot divide by zero\n");
        assert_eq!(render_text(&calc), "4");
    }

    #[test]
    fn test_run_script_counts_errors() {
        let mut calc = Calculator::new();
        let actions = parse_script("1 / 0 = 1 / 0 =").unwrap();
        let mut notifier = keypad_calc::notify::RecordingNotifier::new();
        assert_eq!(run_script(&mut calc, &actions, &mut notifier), 2);
        assert_eq!(notifier.messages().len(), 2);
    }

    #[test]
    fn test_render_json() {
        let (calc, _) = run("6 / 3 =");
        let json: serde_json::Value = serde_json::from_str(&render_json(&calc).unwrap()).unwrap();
        assert_eq!(json["display"], "2");
        assert_eq!(json["state"]["firstOperand"], 2.0);
        assert_eq!(json["tape"][0]["expression"], "6 ÷ 3");
        assert_eq!(json["tape"][0]["result"], "2");
    }
}
