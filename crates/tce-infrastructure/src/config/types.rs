//! Configuration types

use serde::{Deserialize, Serialize};

/// Settings for the clustering subsystem
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Resource locations, relative to the configuration directory
    ///
    /// Paths that do not exist are discarded during discovery; an empty
    /// remainder means providers fall back to their embedded defaults.
    pub resources: Vec<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
