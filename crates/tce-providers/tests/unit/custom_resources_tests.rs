//! Tests for provider behavior under custom resource lookups
//!
//! A custom lookup replaces embedded defaults entirely: a language whose
//! backing file is absent surfaces an I/O-class error, which assembly
//! treats as "skip this provider for this language."

use std::collections::HashMap;
use tce_domain::error::{Error, Result};
use tce_domain::ports::providers::LanguageComponentsProvider;
use tce_domain::ports::resources::ResourceLookup;
use tce_domain::value_objects::{Capability, CapabilityType, LanguageCode};
use tce_providers::language::StopwordsProvider;
use tce_providers::language::stopwords::stopwords_resource;

/// In-memory resource lookup for tests
#[derive(Default)]
struct MapLookup {
    resources: HashMap<String, Vec<u8>>,
}

impl MapLookup {
    fn with(mut self, name: &str, contents: &str) -> Self {
        self.resources
            .insert(name.to_string(), contents.as_bytes().to_vec());
        self
    }
}

impl ResourceLookup for MapLookup {
    fn open(&self, resource: &str) -> Result<Vec<u8>> {
        self.resources
            .get(resource)
            .cloned()
            .ok_or_else(|| Error::not_found(resource.to_string()))
    }

    fn exists(&self, resource: &str) -> bool {
        self.resources.contains_key(resource)
    }
}

#[test]
fn test_custom_stopword_list_replaces_defaults() {
    let english = LanguageCode::new("english");
    let lookup = MapLookup::default().with(
        &stopwords_resource(&english),
        "# custom list\nfoo\nbar\n",
    );

    let provider = StopwordsProvider::new();
    let contribution = provider.load(&english, &lookup).unwrap();
    let factory = contribution
        .get(&CapabilityType::StopwordFilter)
        .expect("stopword filter factory");

    let Capability::StopwordFilter(filter) = (**factory)() else {
        panic!("expected a stopword filter");
    };
    assert!(filter.is_stopword("foo"));
    assert!(filter.is_stopword("BAR"));
    // Default entries no longer apply under a custom lookup
    assert!(!filter.is_stopword("the"));
}

#[test]
fn test_missing_custom_list_is_io_class() {
    let german = LanguageCode::new("german");
    let lookup = MapLookup::default();

    let err = StopwordsProvider::new().load(&german, &lookup).err().unwrap();
    assert!(err.is_io());
}

#[test]
fn test_invalid_utf8_is_io_class() {
    let english = LanguageCode::new("english");
    let mut lookup = MapLookup::default();
    lookup
        .resources
        .insert(stopwords_resource(&english), vec![0xff, 0xfe, 0xfd]);

    let err = StopwordsProvider::new().load(&english, &lookup).err().unwrap();
    assert!(err.is_io());
}
