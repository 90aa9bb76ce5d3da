//! Tests for the clustering context startup sequence and facade
//!
//! Uses the real built-in providers registered through the linkme slices
//! plus local stubs for the fatal paths.

use std::fs;
use std::sync::Arc;
use tce_application::registry::collect_language_component_providers;
use tce_domain::error::{Error, Result};
use tce_domain::ports::components::Tokenizer;
use tce_domain::ports::providers::{
    ComponentContribution, LanguageComponentsProvider, contribution_of,
};
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{Capability, CapabilityType, Document, LanguageCode};
use tce_infrastructure::{ClusteringConfig, ClusteringContext};

fn english() -> LanguageCode {
    LanguageCode::new("english")
}

#[test]
fn test_startup_with_defaults_supports_built_in_languages() {
    let config_dir = tempfile::tempdir().unwrap();

    let context = ClusteringContext::from_registered(config_dir.path()).unwrap();

    for code in ["english", "german", "french"] {
        assert!(
            context.is_language_supported(&LanguageCode::new(code)),
            "{code} should be supported with embedded defaults"
        );
    }
    assert!(!context.is_language_supported(&LanguageCode::new("klingon")));

    let names: Vec<&str> = context.algorithms().keys().map(String::as_str).collect();
    assert!(names.contains(&"frequent-terms"));
    assert!(names.contains(&"stem-groups"));
}

#[test]
fn test_reads_are_idempotent() {
    let config_dir = tempfile::tempdir().unwrap();
    let context = ClusteringContext::from_registered(config_dir.path()).unwrap();

    let first: Vec<String> = context
        .supported_languages()
        .map(ToString::to_string)
        .collect();
    let algorithms_first: Vec<&str> =
        context.algorithms().keys().map(String::as_str).collect();

    for _ in 0..3 {
        let again: Vec<String> = context
            .supported_languages()
            .map(ToString::to_string)
            .collect();
        assert_eq!(first, again);
        let algorithms_again: Vec<&str> =
            context.algorithms().keys().map(String::as_str).collect();
        assert_eq!(algorithms_first, algorithms_again);
        assert!(context.language_components(&english()).is_some());
    }
}

#[test]
fn test_bundle_exposes_assembled_capabilities() {
    let config_dir = tempfile::tempdir().unwrap();
    let context = ClusteringContext::from_registered(config_dir.path()).unwrap();

    let bundle = context.language_components(&english()).unwrap();
    assert!(bundle.has(CapabilityType::Tokenizer));
    assert!(bundle.has(CapabilityType::Stemmer));
    assert!(bundle.has(CapabilityType::StopwordFilter));

    let french = context
        .language_components(&LanguageCode::new("french"))
        .unwrap();
    assert!(!french.has(CapabilityType::Stemmer));

    assert!(
        context
            .language_components(&LanguageCode::new("klingon"))
            .is_none()
    );
}

#[test]
fn test_clustering_through_the_facade() {
    let config_dir = tempfile::tempdir().unwrap();
    let context = ClusteringContext::from_registered(config_dir.path()).unwrap();

    let provider = context.algorithms().get("frequent-terms").unwrap();
    let bundle = context.language_components(&english()).unwrap();

    let documents = [
        Document::new("clustering search results"),
        Document::new("search result clustering"),
    ];
    let clusters = provider.algorithm().cluster(&documents, bundle).unwrap();

    assert!(!clusters.is_empty());
    assert!(clusters.iter().all(|cluster| cluster.size() == 2));
}

#[test]
fn test_custom_resources_narrow_the_language_set() {
    let config_dir = tempfile::tempdir().unwrap();
    fs::write(
        config_dir.path().join("config.yaml"),
        "resources:\n  - res\n",
    )
    .unwrap();
    let resource_dir = config_dir.path().join("res");
    fs::create_dir(&resource_dir).unwrap();
    fs::write(
        resource_dir.join("english.stopwords.utf8"),
        "the\nand\nof\n",
    )
    .unwrap();

    let context = ClusteringContext::from_registered(config_dir.path()).unwrap();

    // The german and french stopword lists are absent from the custom
    // location, so their bundles lack a stopword filter and no algorithm
    // supports them.
    assert!(context.is_language_supported(&english()));
    assert!(!context.is_language_supported(&LanguageCode::new("german")));
    assert!(!context.is_language_supported(&LanguageCode::new("french")));

    let names: Vec<&str> = context.algorithms().keys().map(String::as_str).collect();
    assert!(names.contains(&"frequent-terms"));
    assert!(names.contains(&"stem-groups"));
}

#[test]
fn test_no_surviving_algorithm_is_fatal() {
    let config_dir = tempfile::tempdir().unwrap();

    let err = ClusteringContext::initialize(
        config_dir.path(),
        &ClusteringConfig::default(),
        Vec::new(),
        collect_language_component_providers(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::NoAlgorithms));
}

#[test]
fn test_missing_configuration_directory_is_fatal() {
    let config_dir = tempfile::tempdir().unwrap();
    let missing = config_dir.path().join("nope");

    let err = ClusteringContext::from_registered(&missing).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

struct NoopTokenizer;

impl Tokenizer for NoopTokenizer {
    fn tokenize(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
}

struct DuplicateTokenizerProvider {
    name: &'static str,
}

impl LanguageComponentsProvider for DuplicateTokenizerProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn languages(&self) -> Vec<LanguageCode> {
        vec![english()]
    }

    fn load_defaults(&self, _language: &LanguageCode) -> Result<ComponentContribution> {
        Ok(contribution_of(CapabilityType::Tokenizer, || {
            Capability::Tokenizer(Box::new(NoopTokenizer))
        }))
    }

    fn load(
        &self,
        language: &LanguageCode,
        _resources: &dyn ResourceLookup,
    ) -> Result<ComponentContribution> {
        self.load_defaults(language)
    }
}

#[test]
fn test_conflicting_contributions_abort_startup() {
    let config_dir = tempfile::tempdir().unwrap();

    let component_providers: Vec<Arc<dyn LanguageComponentsProvider>> = vec![
        Arc::new(DuplicateTokenizerProvider { name: "install-a" }),
        Arc::new(DuplicateTokenizerProvider { name: "install-b" }),
    ];

    let err = ClusteringContext::initialize(
        config_dir.path(),
        &ClusteringConfig::default(),
        tce_application::registry::collect_algorithm_providers(),
        component_providers,
    )
    .unwrap_err();

    match err {
        Error::ComponentConflict {
            first_provider,
            second_provider,
            ..
        } => {
            assert_eq!(first_provider, "install-a");
            assert_eq!(second_provider, "install-b");
        }
        other => panic!("expected ComponentConflict, got {other:?}"),
    }
}
