//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Four-function keypad calculator
///
/// Runs an interactive terminal calculator, or replays a key script with
/// `--keys` and prints the resulting display.
#[derive(Parser, Debug)]
#[command(name = "keypad-calc", version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// JSON file with calculator settings
    #[arg(long, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Fractional digits kept in results (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Key script, e.g. "12 + 3 =" or "5 / 0 Enter"
    #[arg(long, allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Print the final calculator state and tape as JSON (with --keys)
    #[arg(long, requires = "keys")]
    pub json: bool,
}
