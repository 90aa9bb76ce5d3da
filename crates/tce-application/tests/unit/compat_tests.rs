//! Tests for compatibility resolution
//!
//! Algorithms here are stubs keyed on language codes, so the pruning
//! behavior can be pinned down without real capability objects.

use std::sync::Arc;
use tce_application::resolve_compatibility;
use tce_domain::error::Result;
use tce_domain::ports::providers::{ClusteringAlgorithm, ClusteringAlgorithmProvider};
use tce_domain::value_objects::{
    AlgorithmRegistry, Cluster, Document, LanguageBundle, LanguageCode, LanguageRegistry,
};

struct LanguageSetAlgorithm {
    supported: Vec<LanguageCode>,
}

impl ClusteringAlgorithm for LanguageSetAlgorithm {
    fn supports(&self, components: &LanguageBundle) -> bool {
        self.supported.contains(components.language())
    }

    fn cluster(
        &self,
        _documents: &[Document],
        _components: &LanguageBundle,
    ) -> Result<Vec<Cluster>> {
        Ok(Vec::new())
    }
}

struct StubAlgorithmProvider {
    name: &'static str,
    algorithm: Arc<dyn ClusteringAlgorithm>,
}

impl StubAlgorithmProvider {
    fn new(name: &'static str, supported: &[&str]) -> Arc<dyn ClusteringAlgorithmProvider> {
        Arc::new(Self {
            name,
            algorithm: Arc::new(LanguageSetAlgorithm {
                supported: supported.iter().map(LanguageCode::new).collect(),
            }),
        })
    }
}

impl ClusteringAlgorithmProvider for StubAlgorithmProvider {
    fn name(&self) -> &str {
        self.name
    }

    fn algorithm(&self) -> Arc<dyn ClusteringAlgorithm> {
        Arc::clone(&self.algorithm)
    }
}

fn language_registry(codes: &[&str]) -> LanguageRegistry {
    codes
        .iter()
        .map(|code| {
            let language = LanguageCode::new(code);
            (language.clone(), LanguageBundle::new(language))
        })
        .collect()
}

fn algorithm_registry(
    providers: Vec<Arc<dyn ClusteringAlgorithmProvider>>,
) -> AlgorithmRegistry {
    providers
        .into_iter()
        .map(|provider| (provider.name().to_string(), provider))
        .collect()
}

#[test]
fn test_unsupported_language_is_pruned() {
    let mut languages = language_registry(&["en", "de", "fr"]);
    let mut algorithms = algorithm_registry(vec![
        StubAlgorithmProvider::new("a", &["en"]),
        StubAlgorithmProvider::new("b", &["en", "de"]),
    ]);

    resolve_compatibility(&mut languages, &mut algorithms);

    let codes: Vec<&str> = languages.keys().map(LanguageCode::as_str).collect();
    assert_eq!(codes, ["en", "de"]);

    let names: Vec<&str> = algorithms.keys().map(String::as_str).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_algorithm_supporting_no_language_is_pruned() {
    let mut languages = language_registry(&["en", "de"]);
    let mut algorithms = algorithm_registry(vec![
        StubAlgorithmProvider::new("narrow", &["fr"]),
        StubAlgorithmProvider::new("wide", &["en", "de"]),
    ]);

    resolve_compatibility(&mut languages, &mut algorithms);

    let names: Vec<&str> = algorithms.keys().map(String::as_str).collect();
    assert_eq!(names, ["wide"]);
    assert_eq!(languages.len(), 2);
}

#[test]
fn test_only_algorithm_supporting_nothing_empties_both_registries() {
    let mut languages = language_registry(&["en", "de"]);
    let mut algorithms = algorithm_registry(vec![StubAlgorithmProvider::new("a", &["fr"])]);

    resolve_compatibility(&mut languages, &mut algorithms);

    // No algorithm supports en or de, so both fall in pass 1; the
    // algorithm then supports nothing that survived and falls in pass 2.
    assert!(languages.is_empty());
    assert!(algorithms.is_empty());
}

#[test]
fn test_pass_two_uses_pruned_language_set() {
    // "late" supports only a language that pass 1 removes, so pass 2
    // removes the algorithm even though its language was registered.
    let mut languages = language_registry(&["en", "fr"]);
    let mut algorithms = algorithm_registry(vec![
        StubAlgorithmProvider::new("keeper", &["en"]),
        StubAlgorithmProvider::new("late", &["fr"]),
    ]);

    // fr is supported by "late" in pass 1 and survives; "late" then also
    // survives pass 2. The registries stay mutually consistent.
    resolve_compatibility(&mut languages, &mut algorithms);
    assert_eq!(languages.len(), 2);
    assert_eq!(algorithms.len(), 2);
}

#[test]
fn test_enumeration_order_survives_pruning() {
    let mut languages = language_registry(&["en"]);
    let mut algorithms = algorithm_registry(vec![
        StubAlgorithmProvider::new("zeta", &["en"]),
        StubAlgorithmProvider::new("gone", &["fr"]),
        StubAlgorithmProvider::new("alpha", &["en"]),
    ]);

    resolve_compatibility(&mut languages, &mut algorithms);

    let names: Vec<&str> = algorithms.keys().map(String::as_str).collect();
    assert_eq!(names, ["zeta", "alpha"]);
}
