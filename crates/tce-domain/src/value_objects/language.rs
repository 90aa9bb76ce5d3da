//! Language Code Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Language Code
///
/// Short identifier for a natural language ("english", "german"), used as
/// the key for assembled component bundles. Codes are normalized to
/// lowercase at construction so registry lookups never depend on the
/// caller's casing.
///
/// ## Example
///
/// ```rust
/// use tce_domain::value_objects::LanguageCode;
///
/// let code = LanguageCode::new("English");
/// assert_eq!(code.as_str(), "english");
/// assert_eq!(code, LanguageCode::new("ENGLISH"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a language code, normalizing to lowercase
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    /// The normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}
