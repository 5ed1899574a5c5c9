//! Member table backed by a fixed-bucket chained hash table.
//!
//! The bucket count is set once at construction and never changes; the
//! table resolves collisions by chaining and never rehashes. Long
//! chains degrade lookups to linear scans, which is accepted at this
//! layer's scale.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::common::config::DEFAULT_BUCKET_COUNT;

/// Fixed-bucket chained hash table with string keys.
///
/// # Insert policy
/// Re-inserting an existing key overwrites its value in place, keeping
/// the entry's position in the chain and counting no collision. A new
/// key landing in an already-occupied bucket counts one collision; the
/// counter is an approximation (occupied-at-insert), not a pairwise
/// collision census.
///
/// # Ordering
/// [`all`](Self::all) walks buckets in index order and chains in
/// insertion order. There is no ordering by key; that is
/// [`OrderedIndex`](crate::index::OrderedIndex)'s job.
///
/// # Example
/// ```
/// use libralog::DirectTable;
///
/// let mut table: DirectTable<u32> = DirectTable::with_buckets(8);
/// assert_eq!(table.insert("M1", 1), None);
/// assert_eq!(table.insert("M1", 2), Some(1));
/// assert_eq!(table.get("M1"), Some(&2));
/// ```
#[derive(Debug)]
pub struct DirectTable<V> {
    /// Chains of `(key, value)` entries, one per bucket.
    buckets: Vec<Vec<(String, V)>>,
    /// Live entry count, maintained on insert/delete.
    len: usize,
    /// New-key inserts that landed in an occupied bucket.
    collisions: AtomicU64,
}

impl<V> DirectTable<V> {
    /// Create a table with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create a table with a fixed number of buckets.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_buckets(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "bucket_count must be > 0");

        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len: 0,
            collisions: AtomicU64::new(0),
        }
    }

    /// Insert or overwrite a value under `key`.
    ///
    /// Returns the displaced value when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(entry) = bucket.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut entry.1, value));
        }

        if !bucket.is_empty() {
            self.collisions.fetch_add(1, Ordering::Relaxed);
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Look up a value by exact key (linear scan of one bucket).
    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Look up a value by exact key for in-place mutation.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.bucket_index(key);
        self.buckets[idx]
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Remove the first entry matching `key`.
    ///
    /// Returns whether a removal occurred.
    pub fn delete(&mut self, key: &str) -> bool {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];

        match bucket.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// All values, in bucket-index order and chain insertion order.
    pub fn all(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(_, v)| v.clone()))
            .collect()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets (fixed at construction).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// New-key inserts that found their bucket occupied.
    pub fn collision_count(&self) -> u64 {
        self.collisions.load(Ordering::Relaxed)
    }

    /// Map a key to its bucket index.
    ///
    /// `DefaultHasher::new()` is deterministic within a build, which is
    /// all the fixed-bucket contract needs.
    fn bucket_index(&self, key: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }
}

impl<V> Default for DirectTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
