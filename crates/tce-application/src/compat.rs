//! Compatibility Resolution
//!
//! Prunes the language and algorithm registries to mutually-supported
//! pairs in exactly two passes:
//!
//! 1. Languages no algorithm supports are removed, tested against the
//!    original, unpruned algorithm set.
//! 2. Algorithms supporting none of the surviving languages are removed.
//!
//! The order is asymmetric on purpose: an algorithm whose only supported
//! languages fell in pass 1 is removed in pass 2, and no further pass is
//! performed. A summary of each surviving algorithm's supported languages
//! is then logged against the final sets.

use tce_domain::value_objects::{AlgorithmRegistry, LanguageRegistry};
use tracing::info;

/// Prune both registries to mutually-supported pairs
///
/// Leaves both registries in their final published state. The caller is
/// responsible for treating an empty algorithm registry as fatal.
pub fn resolve_compatibility(
    languages: &mut LanguageRegistry,
    algorithms: &mut AlgorithmRegistry,
) {
    // Pass 1: remove languages for which there are no supporting algorithms.
    languages.retain(|code, bundle| {
        let supported = algorithms
            .values()
            .any(|provider| provider.algorithm().supports(bundle));
        if !supported {
            info!(
                language = %code,
                "Language '{code}' is not supported by any clustering algorithm and will be ignored.",
            );
        }
        supported
    });

    // Pass 2: remove algorithms for which there are no supported languages.
    algorithms.retain(|name, provider| {
        let algorithm = provider.algorithm();
        let supported = languages.values().any(|bundle| algorithm.supports(bundle));
        if !supported {
            info!(
                algorithm = %name,
                "Algorithm '{name}' does not support any of the loaded languages and will be ignored.",
            );
        }
        supported
    });

    for (name, provider) in algorithms.iter() {
        let algorithm = provider.algorithm();
        let supported: Vec<&str> = languages
            .iter()
            .filter(|(_, bundle)| algorithm.supports(bundle))
            .map(|(code, _)| code.as_str())
            .collect();
        info!(
            algorithm = %name,
            "Clustering algorithm '{name}' loaded with support for the following languages: {}",
            supported.join(", "),
        );
    }
}
