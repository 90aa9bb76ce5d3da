//! Language Bundle
//!
//! The merged result of every provider's contribution for one language
//! code: at most one capability factory per `CapabilityType`, each tagged
//! with the name of the provider that contributed it. The provenance tag
//! exists so a duplicate contribution can be reported naming both sides.

use crate::error::{Error, Result};
use crate::ports::components::{Stemmer, StopwordFilter, Tokenizer};
use crate::value_objects::{Capability, CapabilityFactory, CapabilityType, LanguageCode};
use std::collections::HashMap;
use std::fmt;

/// A capability factory together with the provider that contributed it
#[derive(Clone)]
struct Contribution {
    provider: String,
    factory: CapabilityFactory,
}

/// Merged per-language component bundle
///
/// Invariant: one factory per capability type. A second contribution for
/// an already-present type is rejected with
/// [`Error::ComponentConflict`] naming the language, the capability type
/// and both providers.
#[derive(Clone)]
pub struct LanguageBundle {
    language: LanguageCode,
    components: HashMap<CapabilityType, Contribution>,
}

impl LanguageBundle {
    /// Create an empty bundle for a language
    pub fn new(language: LanguageCode) -> Self {
        Self {
            language,
            components: HashMap::new(),
        }
    }

    /// The language this bundle was assembled for
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Record a provider's contribution of one capability factory
    pub fn insert(
        &mut self,
        capability: CapabilityType,
        provider: &str,
        factory: CapabilityFactory,
    ) -> Result<()> {
        if let Some(existing) = self.components.get(&capability) {
            return Err(Error::ComponentConflict {
                language: self.language.clone(),
                capability,
                first_provider: existing.provider.clone(),
                second_provider: provider.to_string(),
            });
        }
        self.components.insert(
            capability,
            Contribution {
                provider: provider.to_string(),
                factory,
            },
        );
        Ok(())
    }

    /// Whether a capability of the given type is present
    pub fn has(&self, capability: CapabilityType) -> bool {
        self.components.contains_key(&capability)
    }

    /// Construct the capability of the given type, if present
    pub fn create(&self, capability: CapabilityType) -> Option<Capability> {
        self.components
            .get(&capability)
            .map(|contribution| (*contribution.factory)())
    }

    /// Name of the provider that contributed the given capability
    pub fn provider_of(&self, capability: CapabilityType) -> Option<&str> {
        self.components
            .get(&capability)
            .map(|contribution| contribution.provider.as_str())
    }

    /// Present capability types, in the fixed `CapabilityType::ALL` order
    pub fn capability_types(&self) -> Vec<CapabilityType> {
        CapabilityType::ALL
            .into_iter()
            .filter(|capability| self.has(*capability))
            .collect()
    }

    /// True when no provider contributed anything for this language
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of contributed capabilities
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Construct the tokenizer, if one was contributed
    pub fn tokenizer(&self) -> Option<Box<dyn Tokenizer>> {
        match self.create(CapabilityType::Tokenizer)? {
            Capability::Tokenizer(tokenizer) => Some(tokenizer),
            _ => None,
        }
    }

    /// Construct the stemmer, if one was contributed
    pub fn stemmer(&self) -> Option<Box<dyn Stemmer>> {
        match self.create(CapabilityType::Stemmer)? {
            Capability::Stemmer(stemmer) => Some(stemmer),
            _ => None,
        }
    }

    /// Construct the stopword filter, if one was contributed
    pub fn stopword_filter(&self) -> Option<Box<dyn StopwordFilter>> {
        match self.create(CapabilityType::StopwordFilter)? {
            Capability::StopwordFilter(filter) => Some(filter),
            _ => None,
        }
    }
}

impl fmt::Debug for LanguageBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageBundle")
            .field("language", &self.language)
            .field("capabilities", &self.capability_types())
            .finish()
    }
}
