//! Configuration loader
//!
//! Loads [`ClusteringConfig`] from the plugin configuration directory.
//! Sources are merged with Figment in this order (later sources override
//! earlier): defaults, `config.toml`, `config.yaml`, `config.yml`,
//! `config.json`, then environment variables with the `TCE_` prefix.
//! Missing files are fine; a missing configuration directory is fatal.

use crate::config::ClusteringConfig;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use std::path::{Path, PathBuf};
use tce_domain::error::{Error, Result};

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "TCE";

/// Configuration file names probed inside the configuration directory
const CONFIG_FILE_NAMES: [&str; 4] = ["config.toml", "config.yaml", "config.yml", "config.json"];

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Plugin configuration directory
    config_dir: PathBuf,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a loader for the given configuration directory
    pub fn new<P: AsRef<Path>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.as_ref().to_path_buf(),
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// The configuration directory this loader reads from
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<ClusteringConfig> {
        if !self.config_dir.is_dir() {
            return Err(Error::config(format!(
                "Missing configuration folder?: {}",
                self.config_dir.display()
            )));
        }

        let mut figment = Figment::new().merge(Serialized::defaults(ClusteringConfig::default()));

        for file_name in CONFIG_FILE_NAMES {
            let path = self.config_dir.join(file_name);
            if !path.exists() {
                continue;
            }
            log_config_loaded(&path);
            figment = match file_name.rsplit('.').next() {
                Some("toml") => figment.merge(Toml::file(&path)),
                Some("json") => figment.merge(Json::file(&path)),
                _ => figment.merge(Yaml::file(&path)),
            };
        }

        // Underscore separates nested keys (e.g., TCE_LOGGING_LEVEL)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        figment.extract().map_err(|error| {
            Error::config_with_source("Failed to extract clustering configuration", error)
        })
    }
}
