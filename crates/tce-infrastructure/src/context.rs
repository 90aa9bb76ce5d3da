//! Clustering Context
//!
//! The long-lived facade holding the language components and algorithm
//! providers initialized and ready throughout the host process's
//! lifecycle. Initialization runs once, synchronously, during host
//! startup: resource discovery, per-language bundle assembly, then
//! compatibility pruning. On success the context is an immutable
//! published snapshot; concurrent readers need no locking. On failure
//! nothing is published.

use crate::config::{ClusteringConfig, ConfigLoader};
use crate::resources::discover_resource_lookup;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tce_application::registry::{
    collect_algorithm_providers, collect_language_component_providers,
};
use tce_application::{assemble, resolve_compatibility};
use tce_domain::error::{Error, Result};
use tce_domain::ports::providers::{ClusteringAlgorithmProvider, LanguageComponentsProvider};
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{
    AlgorithmRegistry, LanguageBundle, LanguageCode, LanguageRegistry,
};
use tracing::info;

/// Published registries of algorithms and assembled language bundles
pub struct ClusteringContext {
    algorithms: AlgorithmRegistry,
    languages: LanguageRegistry,
}

impl ClusteringContext {
    /// Run the full startup sequence with explicit providers
    ///
    /// `config.resources` entries are resolved relative to `config_dir`.
    /// Algorithm registry order follows the given provider order;
    /// language order follows first declaration across the component
    /// providers in the given order.
    pub fn initialize(
        config_dir: &Path,
        config: &ClusteringConfig,
        algorithm_providers: Vec<Arc<dyn ClusteringAlgorithmProvider>>,
        component_providers: Vec<Arc<dyn LanguageComponentsProvider>>,
    ) -> Result<Self> {
        if !config_dir.is_dir() {
            return Err(Error::config(format!(
                "Missing configuration folder?: {}",
                config_dir.display()
            )));
        }

        let lookup = discover_resource_lookup(config_dir, &config.resources);
        let lookup_ref = lookup
            .as_ref()
            .map(|lookup| lookup as &dyn ResourceLookup);

        let mut language_order: Vec<LanguageCode> = Vec::new();
        for provider in &component_providers {
            for language in provider.languages() {
                if !language_order.contains(&language) {
                    language_order.push(language);
                }
            }
        }

        let mut languages = LanguageRegistry::new();
        for language in language_order {
            let contributing: Vec<Arc<dyn LanguageComponentsProvider>> = component_providers
                .iter()
                .filter(|provider| provider.languages().contains(&language))
                .cloned()
                .collect();
            let bundle = assemble(&language, lookup_ref, &contributing)?;
            languages.insert(language, bundle);
        }

        let mut algorithms = AlgorithmRegistry::new();
        for provider in algorithm_providers {
            algorithms.insert(provider.name().to_string(), provider);
        }

        resolve_compatibility(&mut languages, &mut algorithms);

        if algorithms.is_empty() {
            return Err(Error::NoAlgorithms);
        }

        info!(
            "Clustering context initialized with {} algorithm(s) and {} language(s)",
            algorithms.len(),
            languages.len(),
        );

        Ok(Self {
            algorithms,
            languages,
        })
    }

    /// Run the full startup sequence with the registered providers
    ///
    /// Loads configuration from `config_dir` and gathers every provider
    /// registered in the compile-time registry slices.
    pub fn from_registered(config_dir: &Path) -> Result<Self> {
        let config = ConfigLoader::new(config_dir).load()?;
        Self::initialize(
            config_dir,
            &config,
            collect_algorithm_providers(),
            collect_language_component_providers(),
        )
    }

    /// The ordered registry of available algorithm providers
    pub fn algorithms(&self) -> &AlgorithmRegistry {
        &self.algorithms
    }

    /// The assembled component bundle for a language, if supported
    pub fn language_components(&self, language: &LanguageCode) -> Option<&LanguageBundle> {
        self.languages.get(language)
    }

    /// Whether any surviving algorithm supports the language
    pub fn is_language_supported(&self, language: &LanguageCode) -> bool {
        self.languages.contains_key(language)
    }

    /// Supported language codes, in registry order
    pub fn supported_languages(&self) -> impl Iterator<Item = &LanguageCode> {
        self.languages.keys()
    }
}

impl fmt::Debug for ClusteringContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusteringContext")
            .field("algorithms", &self.algorithms.keys().collect::<Vec<_>>())
            .field("languages", &self.languages.keys().collect::<Vec<_>>())
            .finish()
    }
}
