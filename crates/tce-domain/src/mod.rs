//! # Text Clustering Engine - Domain Layer
//!
//! Core types and port traits for the clustering provider registry.
//! This crate has no I/O of its own: providers, resource lookups and
//! clustering algorithms are contracts (`ports`) implemented elsewhere,
//! while the value objects model language bundles and the ordered
//! registries published at startup.
//!
//! ## Layers
//!
//! | Module | Contents |
//! |--------|----------|
//! | `error` | Domain error type and `Result` alias |
//! | `value_objects` | Language codes, capabilities, bundles, registries, documents |
//! | `ports` | Provider, algorithm and resource-lookup contracts |

/// Error handling types
pub mod error;

/// Port traits implemented by providers and infrastructure
pub mod ports;

/// Core value objects
pub mod value_objects;

// Re-export the most commonly used types at the crate root
pub use error::{Error, Result};
pub use value_objects::{
    AlgorithmRegistry, Capability, CapabilityFactory, CapabilityType, Cluster, Document,
    LanguageBundle, LanguageCode, LanguageRegistry, OrderedMap,
};
