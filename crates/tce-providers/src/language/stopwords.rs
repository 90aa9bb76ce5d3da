//! Stopword Filter Provider
//!
//! Contributes a `StopwordFilter` for english, german and french. Default
//! word lists are embedded in the binary; a custom resource lookup
//! replaces them entirely, reading `<code>.stopwords.utf8` (one word per
//! line, `#` starts a comment). A language whose list is missing from the
//! custom lookup is reported as an I/O-class failure, which voids this
//! provider's contribution for that language only.

use crate::language::built_in_languages;
use linkme::distributed_slice;
use std::collections::HashSet;
use std::sync::Arc;
use tce_application::registry::{LANGUAGE_COMPONENT_PROVIDERS, LanguageComponentProviderEntry};
use tce_domain::error::{Error, Result};
use tce_domain::ports::components::StopwordFilter;
use tce_domain::ports::providers::{
    ComponentContribution, LanguageComponentsProvider, contribution_of,
};
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{Capability, CapabilityType, LanguageCode};

const ENGLISH_DEFAULTS: &str = include_str!("../../resources/english.stopwords.utf8");
const GERMAN_DEFAULTS: &str = include_str!("../../resources/german.stopwords.utf8");
const FRENCH_DEFAULTS: &str = include_str!("../../resources/french.stopwords.utf8");

/// Stopword filter over a fixed word set
#[derive(Debug, Clone)]
pub struct SetStopwordFilter {
    words: Arc<HashSet<String>>,
}

impl StopwordFilter for SetStopwordFilter {
    fn is_stopword(&self, term: &str) -> bool {
        self.words.contains(&term.to_lowercase())
    }
}

/// Resource name for a language's stopword list
pub fn stopwords_resource(language: &LanguageCode) -> String {
    format!("{language}.stopwords.utf8")
}

/// Parse a stopword list: one word per line, `#` comments, blank lines ignored
fn parse_word_list(raw: &str) -> HashSet<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Provider contributing stopword filters with embedded defaults
#[derive(Debug, Clone, Default)]
pub struct StopwordsProvider;

impl StopwordsProvider {
    /// Create a new stopwords provider
    pub fn new() -> Self {
        Self
    }

    fn embedded_defaults(language: &LanguageCode) -> Option<&'static str> {
        match language.as_str() {
            "english" => Some(ENGLISH_DEFAULTS),
            "german" => Some(GERMAN_DEFAULTS),
            "french" => Some(FRENCH_DEFAULTS),
            _ => None,
        }
    }

    fn contribution_from(words: HashSet<String>) -> ComponentContribution {
        let words = Arc::new(words);
        contribution_of(CapabilityType::StopwordFilter, move || {
            Capability::StopwordFilter(Box::new(SetStopwordFilter {
                words: Arc::clone(&words),
            }))
        })
    }
}

impl LanguageComponentsProvider for StopwordsProvider {
    fn name(&self) -> &str {
        "core-stopwords"
    }

    fn languages(&self) -> Vec<LanguageCode> {
        built_in_languages()
    }

    fn load_defaults(&self, language: &LanguageCode) -> Result<ComponentContribution> {
        let raw = Self::embedded_defaults(language).ok_or_else(|| {
            Error::not_found(format!("embedded stopword list for language '{language}'"))
        })?;
        Ok(Self::contribution_from(parse_word_list(raw)))
    }

    fn load(
        &self,
        language: &LanguageCode,
        resources: &dyn ResourceLookup,
    ) -> Result<ComponentContribution> {
        let resource = stopwords_resource(language);
        let bytes = resources.open(&resource)?;
        let raw = String::from_utf8(bytes).map_err(|error| {
            Error::io_with_source(format!("stopword list '{resource}' is not valid UTF-8"), error)
        })?;
        Ok(Self::contribution_from(parse_word_list(&raw)))
    }
}

#[distributed_slice(LANGUAGE_COMPONENT_PROVIDERS)]
static STOPWORDS_PROVIDER: LanguageComponentProviderEntry = LanguageComponentProviderEntry {
    name: "core-stopwords",
    description: "Stopword filters with embedded default lists",
    factory: || Arc::new(StopwordsProvider::new()),
};
