//! TUI rendering
//!
//! The screen is built as plain lines first so it can be checked in tests,
//! then written to the terminal with crossterm.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use super::app::CalculatorApp;
use crate::keypad::Keypad;

/// Total width of the rendered calculator, borders included
pub const SCREEN_WIDTH: usize = 24;

const INNER_WIDTH: usize = SCREEN_WIDTH - 2;
const CELL_WIDTH: usize = 5;
const TAPE_LINES: usize = 3;
const HELP: &str = "q quit · Esc clear · Del CE";

/// Builds the screen line by line
#[must_use]
pub fn render_lines(app: &CalculatorApp) -> Vec<String> {
    let calculator = app.calculator();
    let rule = "─".repeat(INNER_WIDTH);

    let mut lines = vec![
        format!("┌{rule}┐"),
        boxed(&right_aligned(calculator.history_display())),
        boxed(&right_aligned(calculator.display())),
        format!("├{rule}┤"),
    ];

    let keypad = Keypad::new();
    let (rows, _) = keypad.dimensions();
    for row in 0..rows {
        let cells: String = keypad
            .row(row)
            .map(|btn| {
                let width = CELL_WIDTH * btn.span - 2;
                format!("[{:^width$}]", btn.action.label())
            })
            .collect();
        lines.push(boxed(&format!(" {cells:<w$} ", w = INNER_WIDTH - 2)));
    }
    lines.push(format!("└{rule}┘"));

    for entry in calculator.tape().iter_rev().take(TAPE_LINES) {
        lines.push(format!(" {}", entry.display()));
    }

    lines.push(format!(" {}", app.status().unwrap_or(HELP)));
    lines
}

/// Draws the screen at the top-left corner of the terminal
pub fn draw<W: Write>(app: &CalculatorApp, out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in render_lines(app).iter().enumerate() {
        queue!(out, MoveTo(0, u16::try_from(row).unwrap_or(u16::MAX)), Print(line))?;
    }
    out.flush()
}

fn boxed(content: &str) -> String {
    format!("│{content}│")
}

/// Right-aligns within the box; overlong text keeps its rightmost part
fn right_aligned(text: &str) -> String {
    let width = INNER_WIDTH - 1;
    let len = text.chars().count();
    let visible: String = if len > width {
        text.chars().skip(len - width).collect()
    } else {
        text.to_string()
    };
    format!("{visible:>width$} ")
}
