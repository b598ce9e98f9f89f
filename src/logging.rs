// src/logging.rs

//! Log setup: a `tracing-subscriber` fmt layer on stderr.
//!
//! The filter is chosen in this order:
//! 1. `--log-level` on the command line
//! 2. `MAPCRAFT_LOG`, in `EnvFilter` syntax (`debug`,
//!    `mapcraft::render=trace,info`, ...)
//! 3. `info`
//!
//! STDOUT is reserved for the report, the dump and the render plan.

use anyhow::{Result, anyhow};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "MAPCRAFT_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(level) => level_filter(level.into()),
        None => filter_from_env(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn filter_from_env() -> EnvFilter {
    match std::env::var(LOG_ENV) {
        Ok(value) => match parse_level_str(&value) {
            Some(level) => level_filter(level),
            // Not a bare level: try it as a directive list.
            None => EnvFilter::try_new(&value).unwrap_or_else(|_| EnvFilter::new("info")),
        },
        Err(_) => EnvFilter::new("info"),
    }
}

fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::new(level.as_str().to_ascii_lowercase())
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// Parse a bare level name, case-insensitively. `warning` is accepted as
/// an alias for `warn`.
pub fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_ascii_lowercase().as_str() {
        "warning" => Some(Level::WARN),
        other => other.parse().ok(),
    }
}
