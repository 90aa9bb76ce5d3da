//! Capability Types and Factories
//!
//! A capability is a single language-analysis facility contributed by a
//! provider. The `CapabilityType` key carries both identity and the
//! expected shape of the constructed object: a lookup by key yields the
//! matching `Capability` variant, so dispatch stays strongly typed without
//! any runtime reflection.

use crate::ports::components::{Stemmer, StopwordFilter, Tokenizer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Kind of language-analysis capability a provider can contribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CapabilityType {
    /// Splits raw text into terms
    Tokenizer,
    /// Reduces terms to stem form
    Stemmer,
    /// Recognizes terms carrying no topical meaning
    StopwordFilter,
}

impl CapabilityType {
    /// All capability types, in a fixed order used for deterministic listings
    pub const ALL: [CapabilityType; 3] = [
        CapabilityType::Tokenizer,
        CapabilityType::Stemmer,
        CapabilityType::StopwordFilter,
    ];

    /// Stable identifier used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            CapabilityType::Tokenizer => "Tokenizer",
            CapabilityType::Stemmer => "Stemmer",
            CapabilityType::StopwordFilter => "StopwordFilter",
        }
    }
}

impl fmt::Display for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One constructed capability object, tagged by kind
pub enum Capability {
    /// A constructed tokenizer
    Tokenizer(Box<dyn Tokenizer>),
    /// A constructed stemmer
    Stemmer(Box<dyn Stemmer>),
    /// A constructed stopword filter
    StopwordFilter(Box<dyn StopwordFilter>),
}

impl Capability {
    /// The type tag of this capability
    pub fn capability_type(&self) -> CapabilityType {
        match self {
            Capability::Tokenizer(_) => CapabilityType::Tokenizer,
            Capability::Stemmer(_) => CapabilityType::Stemmer,
            Capability::StopwordFilter(_) => CapabilityType::StopwordFilter,
        }
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capability")
            .field(&self.capability_type().name())
            .finish()
    }
}

/// Deferred capability construction
///
/// Providers perform their fallible I/O inside `load`; the factories they
/// return capture the loaded data and construct instances cheaply. A
/// factory may be invoked any number of times after assembly.
pub type CapabilityFactory = Arc<dyn Fn() -> Capability + Send + Sync>;
