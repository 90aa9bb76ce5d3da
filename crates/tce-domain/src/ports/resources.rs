//! Resource Lookup Contract

use crate::error::Result;

/// Locates named resources backing capability factories
///
/// Implementations resolve a relative resource name ("english.stopwords.utf8")
/// against whatever storage they wrap. Passing no lookup to assembly is the
/// signal for providers to fall back to their built-in bundled resources.
pub trait ResourceLookup: Send + Sync {
    /// Read the full contents of a named resource
    fn open(&self, resource: &str) -> Result<Vec<u8>>;

    /// Whether the named resource can be opened
    fn exists(&self, resource: &str) -> bool;
}
