//! Logging setup for the exporter CLI
//!
//! Logs go to stderr as `LEVEL message` lines (or JSON lines with
//! `--json-logs`). `--verbose` forces debug level; otherwise `RUST_LOG` is
//! honoured and the default is info.

use std::io::IsTerminal;
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error types for logging setup
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install subscriber: {0}")]
    Install(String),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Logging configuration derived from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `todoist_export_core=debug`
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LogConfig {
    /// Build from the CLI flags and the `RUST_LOG` environment variable
    #[must_use]
    pub fn from_flags(verbose: bool, json: bool) -> Self {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        Self {
            level: resolve_level(verbose, env.as_deref()),
            json,
        }
    }
}

/// Pick the filter directive: verbose wins, then a non-empty `RUST_LOG`, then info
#[must_use]
pub fn resolve_level(verbose: bool, env: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match env.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => "info".to_string(),
    }
}

/// Parse a filter directive
///
/// # Errors
/// Returns an error if the directive is not a valid `EnvFilter`
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| LoggingError::InvalidFilter(format!("{level}: {e}")))
}

/// Install the global tracing subscriber.
///
/// An unparsable directive falls back to `info` and is reported as a warning
/// once the subscriber is running.
///
/// # Errors
/// Returns an error if a subscriber is already set
pub fn init(config: &LogConfig) -> Result<()> {
    let (filter, rejected) = match build_filter(&config.level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        let json_layer = fmt::layer()
            .json()
            .with_target(false)
            .with_writer(std::io::stderr);
        registry
            .with(json_layer)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?;
    } else {
        let fmt_layer = fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr);
        registry
            .with(fmt_layer)
            .try_init()
            .map_err(|e| LoggingError::Install(e.to_string()))?;
    }

    if let Some(e) = rejected {
        warn!("{e}; using info");
    }
    Ok(())
}
