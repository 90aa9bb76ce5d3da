//! Structured logging with tracing
//!
//! Centralized logging setup for hosts embedding the clustering context.
//! Library code only emits `tracing` events; installing a subscriber is
//! the host's call, made once at process startup.

use crate::config::LoggingConfig;
use tce_domain::error::{Error, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging with the provided configuration
///
/// The `TCE_LOG` environment variable overrides the configured level
/// using the usual `EnvFilter` directive syntax.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env("TCE_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|error| {
            Error::config(format!("Failed to install tracing subscriber: {error}"))
        })?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse a log level string to a tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration file pickup
pub fn log_config_loaded(config_path: &std::path::Path) {
    info!("Configuration loaded from {}", config_path.display());
}
