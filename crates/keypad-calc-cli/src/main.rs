//! keypad-calc: four-function calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                          # Interactive calculator
//! keypad-calc --keys "12 + 3 ="        # Scripted, prints 15
//! keypad-calc --keys "1 / 3 =" --json  # Final state as JSON
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use keypad_calc::core::Calculator;
use keypad_calc_cli::{
    build_config, interactive, logging,
    script::{self, ErrorWriter},
    Cli, CliResult,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    logging::init(config.verbosity);

    let Some(keys) = cli.keys.as_deref() else {
        return interactive::run(config.calculator);
    };

    let actions = script::parse_script(keys)?;
    let mut calculator = Calculator::with_config(config.calculator);
    let mut errors = ErrorWriter::new(io::stderr());
    script::run_script(&mut calculator, &actions, &mut errors);

    let output = if cli.json {
        script::render_json(&calculator)?
    } else {
        script::render_text(&calculator)
    };
    println!("{output}");
    Ok(())
}
