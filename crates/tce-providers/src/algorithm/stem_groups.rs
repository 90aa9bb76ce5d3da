//! Stem Groups Clustering
//!
//! Groups documents by shared stems rather than surface forms, so
//! "cluster", "clusters" and "clustering" land in one group. Requires a
//! tokenizer, a stemmer and a stopword filter; languages without a
//! stemmer are not supported.

use crate::algorithm::{MAX_CLUSTERS, MIN_CLUSTER_SIZE};
use linkme::distributed_slice;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;
use tce_application::registry::{ALGORITHM_PROVIDERS, AlgorithmProviderEntry};
use tce_domain::error::{Error, Result};
use tce_domain::ports::providers::{ClusteringAlgorithm, ClusteringAlgorithmProvider};
use tce_domain::value_objects::{CapabilityType, Cluster, Document, LanguageBundle};

/// Clustering by shared stems
#[derive(Debug, Clone, Default)]
pub struct StemGroupsAlgorithm;

impl StemGroupsAlgorithm {
    /// Capability types this algorithm requires from a bundle
    pub const REQUIRED: [CapabilityType; 3] = [
        CapabilityType::Tokenizer,
        CapabilityType::Stemmer,
        CapabilityType::StopwordFilter,
    ];
}

#[derive(Default)]
struct StemGroup {
    documents: Vec<usize>,
    surface_forms: BTreeSet<String>,
}

impl StemGroup {
    /// Shortest surface form, ties broken lexicographically
    fn label(&self) -> String {
        self.surface_forms
            .iter()
            .min_by_key(|form| (form.chars().count(), (*form).clone()))
            .cloned()
            .unwrap_or_default()
    }
}

impl ClusteringAlgorithm for StemGroupsAlgorithm {
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
        let stemmer = components
            .stemmer()
            .ok_or_else(|| Error::internal("bundle has no stemmer"))?;
        let stopwords = components
            .stopword_filter()
            .ok_or_else(|| Error::internal("bundle has no stopword filter"))?;

        let mut groups: BTreeMap<String, StemGroup> = BTreeMap::new();
        for (index, document) in documents.iter().enumerate() {
            let mut seen = HashSet::new();
            for term in tokenizer.tokenize(&document.text()) {
                if stopwords.is_stopword(&term) {
                    continue;
                }
                let stem = stemmer.stem(&term);
                let group = groups.entry(stem.clone()).or_default();
                group.surface_forms.insert(term);
                if seen.insert(stem) {
                    group.documents.push(index);
                }
            }
        }

        let mut ranked: Vec<StemGroup> = groups
            .into_values()
            .filter(|group| group.documents.len() >= MIN_CLUSTER_SIZE)
            .collect();
        ranked.sort_by(|a, b| {
            b.documents
                .len()
                .cmp(&a.documents.len())
                .then_with(|| a.label().cmp(&b.label()))
        });
        ranked.truncate(MAX_CLUSTERS);

        Ok(ranked
            .into_iter()
            .map(|group| {
                let label = group.label();
                Cluster::new(label, group.documents)
            })
            .collect())
    }
}

/// Provider wrapping the stem-groups algorithm
#[derive(Clone)]
pub struct StemGroupsProvider {
    algorithm: Arc<dyn ClusteringAlgorithm>,
}

impl StemGroupsProvider {
    /// Create a new stem-groups provider
    pub fn new() -> Self {
        Self {
            algorithm: Arc::new(StemGroupsAlgorithm),
        }
    }
}

impl Default for StemGroupsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusteringAlgorithmProvider for StemGroupsProvider {
    fn name(&self) -> &str {
        "stem-groups"
    }

    fn algorithm(&self) -> Arc<dyn ClusteringAlgorithm> {
        Arc::clone(&self.algorithm)
    }
}

#[distributed_slice(ALGORITHM_PROVIDERS)]
static STEM_GROUPS_PROVIDER: AlgorithmProviderEntry = AlgorithmProviderEntry {
    name: "stem-groups",
    description: "Groups documents by shared word stems",
    factory: || Arc::new(StemGroupsProvider::new()),
};
