//! Terminal frontend for the calculator
//!
//! Rendered with plain crossterm commands; no widget toolkit.

mod app;
mod input;
mod ui;

pub use app::{CalculatorApp, StatusLine};
pub use input::{InputHandler, TuiAction};
pub use ui::{draw, render_lines, SCREEN_WIDTH};
