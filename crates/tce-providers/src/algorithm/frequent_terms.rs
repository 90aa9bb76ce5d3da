//! Frequent Terms Clustering
//!
//! Groups documents around the non-stop terms shared by the most
//! documents. Requires a tokenizer and a stopword filter; any language
//! bundle carrying both is supported.

use crate::algorithm::{MAX_CLUSTERS, MIN_CLUSTER_SIZE};
use linkme::distributed_slice;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tce_application::registry::{ALGORITHM_PROVIDERS, AlgorithmProviderEntry};
use tce_domain::error::{Error, Result};
use tce_domain::ports::providers::{ClusteringAlgorithm, ClusteringAlgorithmProvider};
use tce_domain::value_objects::{CapabilityType, Cluster, Document, LanguageBundle};

/// Clustering by shared frequent terms
#[derive(Debug, Clone, Default)]
pub struct FrequentTermsAlgorithm;

impl FrequentTermsAlgorithm {
    /// Capability types this algorithm requires from a bundle
    pub const REQUIRED: [CapabilityType; 2] =
        [CapabilityType::Tokenizer, CapabilityType::StopwordFilter];
}

impl ClusteringAlgorithm for FrequentTermsAlgorithm {
    fn supports(&self, components: &LanguageBundle) -> bool {
        Self::REQUIRED
            .iter()
            .all(|capability| components.has(*capability))
    }

    fn cluster(
        &self,
        documents: &[Document],
        components: &LanguageBundle,
    ) -> Result<Vec<Cluster>> {
        let tokenizer = components
            .tokenizer()
            .ok_or_else(|| Error::internal("bundle has no tokenizer"))?;
        let stopwords = components
            .stopword_filter()
            .ok_or_else(|| Error::internal("bundle has no stopword filter"))?;

        // Term -> documents containing it, each document counted once.
        let mut term_docs: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, document) in documents.iter().enumerate() {
            let mut seen = HashSet::new();
            for term in tokenizer.tokenize(&document.text()) {
                if stopwords.is_stopword(&term) {
                    continue;
                }
                if seen.insert(term.clone()) {
                    term_docs.entry(term).or_default().push(index);
                }
            }
        }

        let mut ranked: Vec<(String, Vec<usize>)> = term_docs
            .into_iter()
            .filter(|(_, docs)| docs.len() >= MIN_CLUSTER_SIZE)
            .collect();
        ranked.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(MAX_CLUSTERS);

        Ok(ranked
            .into_iter()
            .map(|(term, docs)| Cluster::new(term, docs))
            .collect())
    }
}

/// Provider wrapping the frequent-terms algorithm
#[derive(Clone)]
pub struct FrequentTermsProvider {
    algorithm: Arc<dyn ClusteringAlgorithm>,
}

impl FrequentTermsProvider {
    /// Create a new frequent-terms provider
    pub fn new() -> Self {
        Self {
            algorithm: Arc::new(FrequentTermsAlgorithm),
        }
    }
}

impl Default for FrequentTermsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusteringAlgorithmProvider for FrequentTermsProvider {
    fn name(&self) -> &str {
        "frequent-terms"
    }

    fn algorithm(&self) -> Arc<dyn ClusteringAlgorithm> {
        Arc::clone(&self.algorithm)
    }
}

#[distributed_slice(ALGORITHM_PROVIDERS)]
static FREQUENT_TERMS_PROVIDER: AlgorithmProviderEntry = AlgorithmProviderEntry {
    name: "frequent-terms",
    description: "Groups documents by their most frequent non-stop terms",
    factory: || Arc::new(FrequentTermsProvider::new()),
};
