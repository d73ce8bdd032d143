//! Interactive terminal mode

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calc::core::CalculatorConfig;
use keypad_calc::tui::{draw, CalculatorApp, InputHandler};
use tracing::{info, warn};

use crate::error::CliResult;

/// Runs the calculator until the user quits.
///
/// The terminal is restored even when the loop fails.
pub fn run(config: CalculatorConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(CalculatorApp::with_config(config), &mut stdout);
    let restored = restore(&mut stdout);
    first_error(result, restored)
}

/// Leaves raw mode and the alternate screen, attempting both steps
fn restore<W: Write>(out: &mut W) -> CliResult<()> {
    let raw = disable_raw_mode();
    execute!(out, Show, LeaveAlternateScreen)?;
    raw?;
    Ok(())
}

/// A loop error takes precedence over a failure to restore the terminal
fn first_error(result: CliResult<()>, restored: CliResult<()>) -> CliResult<()> {
    if let Err(err) = &restored {
        warn!(error = %err, "terminal restore failed");
    }
    result.and(restored)
}

fn event_loop<W: Write>(mut app: CalculatorApp, out: &mut W) -> CliResult<()> {
    let input = InputHandler::new();
    info!("interactive session started");
    while !app.should_quit() {
        draw(&app, out)?;
        if let Event::Key(key) = event::read()? {
            app.handle(input.handle_key(key));
        }
    }
    info!(
        computations = app.calculator().tape().len(),
        "interactive session ended"
    );
    Ok(())
}
