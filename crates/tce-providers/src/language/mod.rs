//! Language Component Providers
//!
//! Built-in `LanguageComponentsProvider` implementations. Each provider
//! contributes one capability type for the languages it declares and
//! registers itself into `LANGUAGE_COMPONENT_PROVIDERS`.

/// Suffix-stripping stemmers (english, german)
pub mod stemmer;
/// Stopword filters with embedded default lists (english, german, french)
pub mod stopwords;
/// Unicode word tokenizer (english, german, french)
pub mod tokenizer;

pub use stemmer::StemmerProvider;
pub use stopwords::StopwordsProvider;
pub use tokenizer::TokenizerProvider;

use tce_domain::value_objects::LanguageCode;

/// Languages covered by the built-in providers
pub(crate) fn built_in_languages() -> Vec<LanguageCode> {
    ["english", "german", "french"]
        .into_iter()
        .map(LanguageCode::new)
        .collect()
}
