//! Port Traits
//!
//! Contracts the registry core depends on. Capability objects, component
//! providers, algorithm providers and resource lookups are all external
//! collaborators behind these traits.
//!
//! | Port | Description |
//! |------|-------------|
//! | `Tokenizer` / `Stemmer` / `StopwordFilter` | Constructed language-analysis capabilities |
//! | `LanguageComponentsProvider` | Contributes capability factories per language |
//! | `ClusteringAlgorithmProvider` | Wraps one clustering algorithm |
//! | `ResourceLookup` | Locates backing data files for capability factories |

/// Capability object contracts
pub mod components;
/// Provider contracts
pub mod providers;
/// Resource lookup contract
pub mod resources;

pub use components::{Stemmer, StopwordFilter, Tokenizer};
pub use providers::{
    ClusteringAlgorithm, ClusteringAlgorithmProvider, ComponentContribution,
    LanguageComponentsProvider,
};
pub use resources::ResourceLookup;
