//! Coarsely synchronized shared map.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::sync::Mutex;

/// Map lookup error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MapError {
    #[error("key not found")]
    KeyNotFound,
}

/// A map guarded by a single coarse-grained lock.
///
/// Every operation serializes on one mutex per map instance, so the
/// map is safe to share freely between workers at the cost of no
/// internal parallelism. Snapshots taken with [`ConcurrentMap::to_vec`]
/// are copied entirely under the lock: they reflect a single instant
/// and may be stale by the time the caller inspects them.
pub struct ConcurrentMap<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    /// True when the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }

    /// Insert a value, overwriting any existing entry for the key.
    pub fn insert(&self, key: K, value: V) {
        self.inner.lock().unwrap().insert(key, value);
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }

    /// Whether the map contains the key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.lock().unwrap().contains_key(key)
    }

    /// Insert only if the key is absent. Returns whether the insert
    /// happened; among callers racing to add the same key, exactly one
    /// wins and its value is the one stored.
    pub fn try_add(&self, key: K, value: V) -> bool {
        match self.inner.lock().unwrap().entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K: Eq + Hash, V: Clone> ConcurrentMap<K, V> {
    /// Look up a key, cloning the stored value.
    pub fn get(&self, key: &K) -> Result<V, MapError> {
        self.inner
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or(MapError::KeyNotFound)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> ConcurrentMap<K, V> {
    /// Copy every entry at a single instant. Not a live view.
    pub fn to_vec(&self) -> Vec<(K, V)> {
        self.inner
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<K: Eq + Hash, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
