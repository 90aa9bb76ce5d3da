//! # Text Clustering Engine - Built-in Providers
//!
//! Provider implementations shipped with the engine. Each implements a
//! port (trait) defined in `tce-domain` and registers itself into the
//! linkme slices declared in `tce-application`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Language components | `LanguageComponentsProvider` | core-tokenizers, core-stopwords, core-stemmers |
//! | Algorithms | `ClusteringAlgorithmProvider` | frequent-terms, stem-groups |
//!
//! Language-components providers cover english, german and french out of
//! the box; stemmers are contributed for english and german only, so the
//! algorithm/language compatibility matrix is not uniform.

// Re-export tce-domain types commonly used with providers
pub use tce_domain::error::{Error, Result};
pub use tce_domain::ports::providers::{
    ClusteringAlgorithm, ClusteringAlgorithmProvider, LanguageComponentsProvider,
};

/// Language component provider implementations
///
/// Implement `LanguageComponentsProvider` for tokenizers, stopword
/// filters and stemmers.
pub mod language;

/// Clustering algorithm provider implementations
///
/// Implement `ClusteringAlgorithmProvider` and `ClusteringAlgorithm`.
pub mod algorithm;
