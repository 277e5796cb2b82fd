//! Tracing setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log lines can
//! never go to stdout/stderr while it runs. Logs are written to a file when
//! one is configured and discarded otherwise.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber if `config.log_file` is set.
///
/// Returns whether a subscriber was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))?;

    Ok(true)
}
