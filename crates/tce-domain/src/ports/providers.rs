//! Provider Contracts
//!
//! A language components provider contributes capability factories for the
//! languages it declares. An algorithm provider wraps one clustering
//! algorithm. Both are instantiated once at startup and consulted only
//! during registry assembly; afterwards the published registries hold them
//! for the lifetime of the process.

use crate::error::Result;
use crate::ports::resources::ResourceLookup;
use crate::value_objects::{Capability, CapabilityFactory, CapabilityType, Cluster, Document};
use crate::value_objects::{LanguageBundle, LanguageCode};
use std::collections::HashMap;
use std::sync::Arc;

/// One provider's contribution for one language
pub type ComponentContribution = HashMap<CapabilityType, CapabilityFactory>;

/// Contributes language-analysis capability factories per language
///
/// `load` variants may fail with I/O-class errors (missing or unreadable
/// backing resources). Such a failure only voids this provider's
/// contribution for that one language.
pub trait LanguageComponentsProvider: Send + Sync {
    /// Stable provider name used in logs and conflict diagnostics
    fn name(&self) -> &str;

    /// Languages this provider can contribute components for
    fn languages(&self) -> Vec<LanguageCode>;

    /// Load factories for a language from built-in bundled resources
    fn load_defaults(&self, language: &LanguageCode) -> Result<ComponentContribution>;

    /// Load factories for a language from a custom resource lookup
    fn load(
        &self,
        language: &LanguageCode,
        resources: &dyn ResourceLookup,
    ) -> Result<ComponentContribution>;
}

/// Wraps one clustering algorithm
pub trait ClusteringAlgorithmProvider: Send + Sync {
    /// Stable algorithm name used as the registry key
    fn name(&self) -> &str;

    /// The wrapped algorithm instance
    fn algorithm(&self) -> Arc<dyn ClusteringAlgorithm>;
}

/// A clustering algorithm instance
pub trait ClusteringAlgorithm: Send + Sync {
    /// Whether the bundle provides everything this algorithm requires
    fn supports(&self, components: &LanguageBundle) -> bool;

    /// Cluster documents using the capabilities of an assembled bundle
    fn cluster(&self, documents: &[Document], components: &LanguageBundle)
    -> Result<Vec<Cluster>>;
}

/// Build a single-entry contribution
///
/// Convenience for providers contributing one capability per language.
pub fn contribution_of(
    capability: CapabilityType,
    factory: impl Fn() -> Capability + Send + Sync + 'static,
) -> ComponentContribution {
    let mut contribution = ComponentContribution::new();
    contribution.insert(capability, Arc::new(factory));
    contribution
}
