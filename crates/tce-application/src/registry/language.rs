//! Language Components Provider Registry
//!
//! Auto-registration for language-components providers using linkme
//! distributed slices. Registration order is link order, which is stable
//! for a given build and becomes the provider consultation order during
//! bundle assembly.

use std::sync::Arc;
use tce_domain::ports::providers::LanguageComponentsProvider;

/// Registry entry for language-components providers
///
/// Each provider implementation registers itself with this entry using
/// `#[linkme::distributed_slice(LANGUAGE_COMPONENT_PROVIDERS)]`.
pub struct LanguageComponentProviderEntry {
    /// Unique provider name (e.g., "core-stopwords")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create the provider instance
    pub factory: fn() -> Arc<dyn LanguageComponentsProvider>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static LANGUAGE_COMPONENT_PROVIDERS: [LanguageComponentProviderEntry] = [..];

/// List all registered language-components providers
///
/// Returns (name, description) tuples in registration order. Useful for
/// diagnostics and listings.
pub fn list_language_component_providers() -> Vec<(&'static str, &'static str)> {
    LANGUAGE_COMPONENT_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}

/// Instantiate every registered language-components provider
///
/// Providers come back in registration order; that order is preserved all
/// the way into bundle assembly.
pub fn collect_language_component_providers() -> Vec<Arc<dyn LanguageComponentsProvider>> {
    LANGUAGE_COMPONENT_PROVIDERS
        .iter()
        .map(|entry| (entry.factory)())
        .collect()
}
