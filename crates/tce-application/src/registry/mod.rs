//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that are discovered and instantiated once at startup.
//!
//! ## Architecture
//!
//! ```text
//! 1. Provider defines:  #[linkme::distributed_slice(ALGORITHM_PROVIDERS)]
//!                       static ENTRY: AlgorithmProviderEntry = ...
//!                             ↓
//! 2. Registry declares: #[linkme::distributed_slice]
//!                       pub static ALGORITHM_PROVIDERS: [Entry] = [..]
//!                             ↓
//! 3. Startup collects:  collect_algorithm_providers()
//!                             ↓
//! 4. Facade publishes:  ClusteringContext { algorithms, languages }
//! ```
//!
//! ## Registering a Provider (in tce-providers)
//!
//! ```ignore
//! use tce_application::registry::{AlgorithmProviderEntry, ALGORITHM_PROVIDERS};
//!
//! #[linkme::distributed_slice(ALGORITHM_PROVIDERS)]
//! static FREQUENT_TERMS: AlgorithmProviderEntry = AlgorithmProviderEntry {
//!     name: "frequent-terms",
//!     description: "Groups documents by their most frequent non-stop terms",
//!     factory: || Arc::new(FrequentTermsProvider::new()),
//! };
//! ```

pub mod algorithm;
pub mod language;

pub use algorithm::{
    ALGORITHM_PROVIDERS, AlgorithmProviderEntry, collect_algorithm_providers,
    list_algorithm_providers,
};
pub use language::{
    LANGUAGE_COMPONENT_PROVIDERS, LanguageComponentProviderEntry,
    collect_language_component_providers, list_language_component_providers,
};
