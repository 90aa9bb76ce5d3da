//! # Text Clustering Engine - Application Layer
//!
//! The registry core: per-language bundle assembly, the two-pass
//! compatibility resolver that prunes languages and algorithms down to
//! mutually-supported pairs, and the compile-time provider registration
//! slices that built-in providers submit themselves to.
//!
//! Infrastructure runs these pieces once at startup and publishes the
//! result; nothing in this crate touches the filesystem or holds state.

/// Per-language bundle assembly
pub mod assembly;
/// Two-pass language/algorithm compatibility resolution
pub mod compat;
/// Compile-time provider registration
pub mod registry;

pub use assembly::assemble;
pub use compat::resolve_compatibility;
