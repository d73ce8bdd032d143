//! Keypad calculator command line
//!
//! Without `--keys` the binary runs the interactive terminal calculator;
//! with `--keys` it replays a key script and prints the display.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod commands;
mod config;
mod error;
pub mod interactive;
pub mod logging;
pub mod script;

pub use commands::Cli;
pub use config::{load_calculator_config, CliConfig, Verbosity};
pub use error::{CliError, CliResult};

/// Resolves the run configuration: config file first, then flags
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut calculator = match &cli.config {
        Some(path) => load_calculator_config(path)?,
        None => keypad_calc::core::CalculatorConfig::default(),
    };
    if let Some(precision) = cli.precision {
        calculator.precision = precision;
    }
    calculator.validate()?;

    Ok(CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_calculator(calculator))
}
