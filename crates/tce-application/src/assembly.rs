//! Language Bundle Assembly
//!
//! Merges the contributions of every registered language-components
//! provider into one bundle per language. Providers are consulted in
//! registration order. A provider that cannot load its backing resources
//! for a language is skipped for that language only; a duplicate
//! contribution of the same capability type is a fatal configuration
//! error.

use std::sync::Arc;
use tce_domain::error::Result;
use tce_domain::ports::providers::LanguageComponentsProvider;
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{LanguageBundle, LanguageCode};
use tracing::warn;

/// Assemble the component bundle for one language
///
/// `resources` is the custom resource lookup discovered at startup; `None`
/// tells each provider to fall back to its built-in bundled resources.
///
/// The returned bundle may be empty. Empty bundles are valid input to
/// compatibility resolution, where they are pruned for lack of algorithm
/// support.
pub fn assemble(
    language: &LanguageCode,
    resources: Option<&dyn ResourceLookup>,
    providers: &[Arc<dyn LanguageComponentsProvider>],
) -> Result<LanguageBundle> {
    let mut bundle = LanguageBundle::new(language.clone());

    for provider in providers {
        let loaded = match resources {
            Some(lookup) => provider.load(language, lookup),
            None => provider.load_defaults(language),
        };

        match loaded {
            Ok(contribution) => {
                for (capability, factory) in contribution {
                    bundle.insert(capability, provider.name(), factory)?;
                }
            }
            Err(error) if error.is_io() => {
                warn!(
                    language = %language,
                    provider = provider.name(),
                    "Could not load resources for language '{language}' of provider '{}', \
                     provider ignored for this language: {error}",
                    provider.name(),
                );
            }
            Err(error) => return Err(error),
        }
    }

    Ok(bundle)
}
