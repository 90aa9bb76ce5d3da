//! Suffix-Stripping Stemmer Provider
//!
//! Contributes a `Stemmer` for english and german. French intentionally
//! has none, so algorithms requiring a stemmer do not support it. The
//! stemmers are light suffix strippers; no backing resources are needed.

use linkme::distributed_slice;
use std::sync::Arc;
use tce_application::registry::{LANGUAGE_COMPONENT_PROVIDERS, LanguageComponentProviderEntry};
use tce_domain::error::{Error, Result};
use tce_domain::ports::components::Stemmer;
use tce_domain::ports::providers::{
    ComponentContribution, LanguageComponentsProvider, contribution_of,
};
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{Capability, CapabilityType, LanguageCode};

/// Minimum stem length left after stripping a suffix
const MIN_STEM_LEN: usize = 3;

/// Stemmer stripping the longest matching suffix from a fixed table
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    suffixes: &'static [&'static str],
}

impl SuffixStemmer {
    /// English suffix table
    pub fn english() -> Self {
        Self {
            suffixes: &["ingly", "edly", "ing", "ed", "ies", "es", "ly", "s"],
        }
    }

    /// German suffix table
    pub fn german() -> Self {
        Self {
            suffixes: &["ungen", "ung", "heit", "keit", "en", "ern", "er", "e", "n", "s"],
        }
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, term: &str) -> String {
        let term = term.to_lowercase();
        for suffix in self.suffixes {
            if let Some(stem) = term.strip_suffix(suffix) {
                if stem.chars().count() >= MIN_STEM_LEN {
                    return stem.to_string();
                }
            }
        }
        term
    }
}

/// Provider contributing suffix stemmers for english and german
#[derive(Debug, Clone, Default)]
pub struct StemmerProvider;

impl StemmerProvider {
    /// Create a new stemmer provider
    pub fn new() -> Self {
        Self
    }

    fn stemmer_for(language: &LanguageCode) -> Option<SuffixStemmer> {
        match language.as_str() {
            "english" => Some(SuffixStemmer::english()),
            "german" => Some(SuffixStemmer::german()),
            _ => None,
        }
    }

    fn contribution(&self, language: &LanguageCode) -> Result<ComponentContribution> {
        let stemmer = Self::stemmer_for(language)
            .ok_or_else(|| Error::not_found(format!("stemmer for language '{language}'")))?;
        Ok(contribution_of(CapabilityType::Stemmer, move || {
            Capability::Stemmer(Box::new(stemmer.clone()))
        }))
    }
}

impl LanguageComponentsProvider for StemmerProvider {
    fn name(&self) -> &str {
        "core-stemmers"
    }

    fn languages(&self) -> Vec<LanguageCode> {
        vec![LanguageCode::new("english"), LanguageCode::new("german")]
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
static STEMMER_PROVIDER: LanguageComponentProviderEntry = LanguageComponentProviderEntry {
    name: "core-stemmers",
    description: "Suffix-stripping stemmers for english and german",
    factory: || Arc::new(StemmerProvider::new()),
};
