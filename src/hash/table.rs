//! Separate-chaining hash table
//!
//! Bucket array of `Vec<(K, V)>` chains. The hash function comes from the
//! standard `RandomState` build hasher; the bucket index is the hash reduced
//! modulo the bucket count.
//!
//! ## Layout
//! ```text
//! buckets
//! ┌───┐
//! │ 0 │──▶ [(k, v), (k, v)]
//! │ 1 │──▶ []
//! │ 2 │──▶ [(k, v)]
//! └───┘
//! ```

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

use tracing::debug;

/// Initial bucket count
const DEFAULT_BUCKETS: usize = 16;

/// Load factor (entries / buckets) that triggers a resize
const LOAD_FACTOR_LIMIT: f64 = 0.7;

/// Separate-chaining hash table
#[derive(Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: RandomState,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Create a table with the default bucket count
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create a table with a specific initial bucket count
    ///
    /// A zero bucket count is rounded up to one.
    pub fn with_buckets(buckets: usize) -> Self {
        let buckets = buckets.max(1);
        Self {
            buckets: Self::alloc_buckets(buckets),
            len: 0,
            hasher: RandomState::new(),
        }
    }

    /// Insert a key-value pair, replacing any existing value for the key
    ///
    /// O(1) average, O(n) worst case. Returns the previous value when the
    /// key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(std::mem::replace(&mut entry.1, value));
            }
        }

        bucket.push((key, value));
        self.len += 1;

        if self.load_factor() > LOAD_FACTOR_LIMIT {
            self.resize();
        }
        None
    }

    /// Look up the value for a key
    ///
    /// O(1) average, O(n) worst case
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|entry| entry.0 == *key)
            .map(|entry| &entry.1)
    }

    /// Remove a key-value pair
    ///
    /// O(1) average, O(n) worst case. Returns the removed value when the
    /// key was present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];

        let position = bucket.iter().position(|entry| entry.0 == *key)?;
        let (_, value) = bucket.swap_remove(position);
        self.len -= 1;
        Some(value)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of key-value pairs
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries divided by buckets
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Iterate over all entries in bucket order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    /// Map a key to its bucket index
    fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) % self.buckets.len()
    }

    /// Double the bucket count and rehash every entry
    ///
    /// O(n)
    fn resize(&mut self) {
        let new_count = self.buckets.len() * 2;
        debug!(
            "resizing hash table: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_count,
            self.len
        );

        let old_buckets = std::mem::replace(&mut self.buckets, Self::alloc_buckets(new_count));
        for (key, value) in old_buckets.into_iter().flatten() {
            let index = self.bucket_index(&key);
            self.buckets[index].push((key, value));
        }
    }

    fn alloc_buckets(count: usize) -> Vec<Vec<(K, V)>> {
        (0..count).map(|_| Vec::new()).collect()
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
