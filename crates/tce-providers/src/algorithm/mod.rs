//! Clustering Algorithm Providers
//!
//! Built-in `ClusteringAlgorithmProvider` implementations. Each declares
//! the capability types it requires; `supports` tests an assembled bundle
//! for exactly those. Registration order in `ALGORITHM_PROVIDERS` becomes
//! the enumeration order of the published registry.

/// Clustering by shared frequent terms
pub mod frequent_terms;
/// Clustering by shared stems
pub mod stem_groups;

pub use frequent_terms::{FrequentTermsAlgorithm, FrequentTermsProvider};
pub use stem_groups::{StemGroupsAlgorithm, StemGroupsProvider};

/// Smallest document group worth reporting as a cluster
pub(crate) const MIN_CLUSTER_SIZE: usize = 2;

/// Upper bound on clusters returned by the built-in algorithms
pub(crate) const MAX_CLUSTERS: usize = 10;
