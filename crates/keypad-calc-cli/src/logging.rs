//! Log output
//!
//! Library events go to stderr so scripted output on stdout stays clean.
//! `RUST_LOG` takes precedence over the `-v`/`-q` derived level.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Builds the filter for `verbosity`, honouring `RUST_LOG` when set
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber; later calls are no-ops
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
