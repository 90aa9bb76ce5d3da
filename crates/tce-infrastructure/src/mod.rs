//! # Text Clustering Engine - Infrastructure Layer
//!
//! Plumbing around the registry core: figment-based configuration
//! loading, tracing setup, filesystem resource discovery, and the
//! [`context::ClusteringContext`] facade that runs the startup sequence
//! and publishes the read-only registries.

// Force-link the built-in providers so their linkme `distributed_slice`
// registrations are included in any binary that links this crate. Without an
// explicit reference the rlib is dropped and the registries come up empty.
extern crate tce_providers;

/// Configuration types and loader
pub mod config;
/// Startup facade and published registries
pub mod context;
/// Structured logging with tracing
pub mod logging;
/// Resource discovery and path-based lookup
pub mod resources;

pub use config::{ClusteringConfig, ConfigLoader, LoggingConfig};
pub use context::ClusteringContext;
pub use resources::{PathResourceLookup, discover_resource_lookup};
