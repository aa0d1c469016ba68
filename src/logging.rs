// src/logging.rs

//! `tracing` subscriber for the `scss-refresh` binary.
//!
//! The filter is taken from, in order:
//! 1. `--log-level`, applied to every target;
//! 2. `SCSS_REFRESH_LOG`, which accepts a bare level (`debug`) or full
//!    `EnvFilter` directives (`scss_refresh=trace,warn`);
//! 3. `info`.
//!
//! Output goes to stderr so `--dry-run` listings on stdout stay clean.

use anyhow::{anyhow, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when no `--log-level` is given.
pub const LOG_ENV_VAR: &str = "SCSS_REFRESH_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(level) => EnvFilter::new("").add_directive(LevelFilter::from(level).into()),
        None => filter_from_env(std::env::var(LOG_ENV_VAR).ok().as_deref()),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

/// Filter for a raw `SCSS_REFRESH_LOG` value. Unset, blank or unparsable
/// values fall back to `info`.
pub fn filter_from_env(value: Option<&str>) -> EnvFilter {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| EnvFilter::try_new(normalize_level(v)).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// `warning` is accepted as an alias of `warn`.
fn normalize_level(value: &str) -> String {
    if value.eq_ignore_ascii_case("warning") {
        "warn".to_string()
    } else {
        value.to_string()
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
