//! Clustering Algorithm Provider Registry
//!
//! Auto-registration for clustering algorithm providers using linkme
//! distributed slices. Registration order becomes the enumeration order
//! of the published algorithm registry.

use std::sync::Arc;
use tce_domain::ports::providers::ClusteringAlgorithmProvider;

/// Registry entry for clustering algorithm providers
///
/// Each algorithm provider registers itself with this entry using
/// `#[linkme::distributed_slice(ALGORITHM_PROVIDERS)]`.
pub struct AlgorithmProviderEntry {
    /// Unique algorithm name (e.g., "frequent-terms")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider instance
    pub factory: fn() -> Arc<dyn ClusteringAlgorithmProvider>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static ALGORITHM_PROVIDERS: [AlgorithmProviderEntry] = [..];

/// List all registered algorithm providers
///
/// Returns (name, description) tuples in registration order.
pub fn list_algorithm_providers() -> Vec<(&'static str, &'static str)> {
    ALGORITHM_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

/// Instantiate every registered algorithm provider
///
/// Providers come back in registration order; that order is preserved in
/// the published algorithm registry.
pub fn collect_algorithm_providers() -> Vec<Arc<dyn ClusteringAlgorithmProvider>> {
    ALGORITHM_PROVIDERS
        .iter()
        .map(|entry| (entry.factory)())
        .collect()
}
