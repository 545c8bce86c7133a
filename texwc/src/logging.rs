// src/logging.rs
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the process-wide tracing subscriber.
///
/// Logs go to stderr so stdout stays the report stream. DEBUG with
/// `debug`, INFO otherwise; `RUST_LOG` overrides both. Called exactly once
/// from the entry point, so setup is idempotent by construction.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to set tracing subscriber: {err}"))
}
