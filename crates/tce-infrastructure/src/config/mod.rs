//! Configuration
//!
//! Settings for the clustering subsystem, read from the plugin
//! configuration directory. Only the `resources` key matters to the
//! registry core; everything else is ambient.

/// Configuration loader
pub mod loader;
/// Configuration types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ClusteringConfig, LoggingConfig};
