//! Insertion-Ordered Registry Map
//!
//! Both published registries preserve provider registration order for
//! enumeration while keeping keyed lookup on a hash map. Replacing an
//! existing key keeps its original position.

use crate::ports::providers::ClusteringAlgorithmProvider;
use crate::value_objects::{LanguageBundle, LanguageCode};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// Ordered mapping algorithm name to provider
pub type AlgorithmRegistry = OrderedMap<String, Arc<dyn ClusteringAlgorithmProvider>>;

/// Ordered mapping language code to assembled bundle
pub type LanguageRegistry = OrderedMap<LanguageCode, LanguageBundle>;

/// Map preserving insertion order with constant-time keyed lookup
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    keys: Vec<K>,
    entries: HashMap<K, V>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert a value, returning the previous value for the key, if any
    ///
    /// A replaced key keeps its original enumeration position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key.clone(), value);
        if previous.is_none() {
            self.keys.push(key);
        }
        previous
    }

    /// Lookup by key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    /// Whether the key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().map(|key| (key, &self.entries[key]))
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.keys.iter().map(|key| &self.entries[key])
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when no entries are present
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keep only entries the predicate accepts, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&K, &V) -> bool) {
        let entries = &mut self.entries;
        self.keys.retain(|key| {
            let keep_entry = entries
                .get(key)
                .is_some_and(|value| keep(key, value));
            if !keep_entry {
                entries.remove(key);
            }
            keep_entry
        });
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedMap").field("keys", &self.keys).finish()
    }
}
