//! Resource Discovery and Path-Based Lookup
//!
//! Resolves the configured resource locations against the configuration
//! directory, discards locations that do not exist, and produces the
//! path-based lookup capability factories read from. An empty remainder
//! means providers use their embedded defaults instead.

use std::fs;
use std::path::{Path, PathBuf};
use tce_domain::error::{Error, Result};
use tce_domain::ports::resources::ResourceLookup;
use tracing::info;

/// Resource lookup over an ordered list of directories
///
/// Resources are resolved against each directory in order; the first
/// directory containing the named file wins.
#[derive(Debug, Clone)]
pub struct PathResourceLookup {
    locations: Vec<PathBuf>,
}

impl PathResourceLookup {
    /// Create a lookup over the given directories
    pub fn new(locations: Vec<PathBuf>) -> Self {
        Self { locations }
    }

    /// The directories this lookup searches, in order
    pub fn locations(&self) -> &[PathBuf] {
        &self.locations
    }

    fn resolve(&self, resource: &str) -> Option<PathBuf> {
        self.locations
            .iter()
            .map(|location| location.join(resource))
            .find(|path| path.is_file())
    }
}

impl ResourceLookup for PathResourceLookup {
    fn open(&self, resource: &str) -> Result<Vec<u8>> {
        let path = self
            .resolve(resource)
            .ok_or_else(|| Error::not_found(resource.to_string()))?;
        fs::read(&path).map_err(|error| {
            Error::io_with_source(format!("Failed to read resource '{}'", path.display()), error)
        })
    }

    fn exists(&self, resource: &str) -> bool {
        self.resolve(resource).is_some()
    }
}

/// Resolve configured resource locations to a lookup
///
/// Each configured location is resolved relative to the configuration
/// directory. Locations that do not exist are discarded with an info log
/// entry; retained locations are logged as well. `None` means nothing
/// usable was configured and providers should read their embedded
/// defaults, which is logged exactly once.
pub fn discover_resource_lookup(
    config_dir: &Path,
    configured: &[String],
) -> Option<PathResourceLookup> {
    let mut locations = Vec::new();
    for entry in configured {
        let path = config_dir.join(entry);
        if path.exists() {
            info!(
                "Clustering algorithm resources loaded relative to: {}",
                path.display()
            );
            locations.push(path);
        } else {
            info!(
                "Clustering algorithm resource location does not exist, ignored: {}",
                path.display()
            );
        }
    }

    if locations.is_empty() {
        info!("Resources read from defaults (embedded).");
        None
    } else {
        Some(PathResourceLookup::new(locations))
    }
}
