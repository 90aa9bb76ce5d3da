//! Unicode Word Tokenizer Provider
//!
//! Contributes a `Tokenizer` for every built-in language. Tokenization is
//! Unicode word segmentation with lowercased terms and needs no backing
//! resources, so custom resource lookups are accepted but unused.

use crate::language::built_in_languages;
use linkme::distributed_slice;
use std::sync::Arc;
use tce_application::registry::{LANGUAGE_COMPONENT_PROVIDERS, LanguageComponentProviderEntry};
use tce_domain::error::{Error, Result};
use tce_domain::ports::components::Tokenizer;
use tce_domain::ports::providers::{
    ComponentContribution, LanguageComponentsProvider, contribution_of,
};
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{Capability, CapabilityType, LanguageCode};
use unicode_segmentation::UnicodeSegmentation;

/// Tokenizer backed by Unicode word segmentation
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| word.to_lowercase())
            .collect()
    }
}

/// Provider contributing the word tokenizer for all built-in languages
#[derive(Debug, Clone, Default)]
pub struct TokenizerProvider;

impl TokenizerProvider {
    /// Create a new tokenizer provider
    pub fn new() -> Self {
        Self
    }

    fn contribution(&self, language: &LanguageCode) -> Result<ComponentContribution> {
        if !self.languages().contains(language) {
            return Err(Error::not_found(format!(
                "tokenizer for language '{language}'"
            )));
        }
        Ok(contribution_of(CapabilityType::Tokenizer, || {
            Capability::Tokenizer(Box::new(WordTokenizer))
        }))
    }
}

impl LanguageComponentsProvider for TokenizerProvider {
    fn name(&self) -> &str {
        "core-tokenizers"
    }

    fn languages(&self) -> Vec<LanguageCode> {
        built_in_languages()
    }

    fn load_defaults(&self, language: &LanguageCode) -> Result<ComponentContribution> {
        self.contribution(language)
    }

    fn load(
        &self,
        language: &LanguageCode,
        _resources: &dyn ResourceLookup,
    ) -> Result<ComponentContribution> {
        self.contribution(language)
    }
}

#[distributed_slice(LANGUAGE_COMPONENT_PROVIDERS)]
static TOKENIZER_PROVIDER: LanguageComponentProviderEntry = LanguageComponentProviderEntry {
    name: "core-tokenizers",
    description: "Unicode word tokenizer for all built-in languages",
    factory: || Arc::new(TokenizerProvider::new()),
};
