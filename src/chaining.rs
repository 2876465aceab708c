//! ChainedTable: each slot owns a bucket of the entries that hashed to it.
//!
//! The bucket count is fixed at construction. There is no resize; chains
//! grow without bound and lookups degrade to O(chain length) once the
//! table is heavily loaded. `longest_chain` reports how far that has gone.

use crate::hash::polynomial_hash;
use crate::Entry;
use std::collections::VecDeque;

type Bucket = VecDeque<Entry>;

#[derive(Debug, Clone)]
pub struct ChainedTable {
    buckets: Vec<Bucket>,
    count: usize,
}

impl ChainedTable {
    /// Create an empty table with `capacity` buckets (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buckets: std::iter::repeat_with(Bucket::new).take(capacity).collect(),
            count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Overwrite in place when the key is already chained, otherwise
    /// prepend a new entry to the front of its bucket.
    pub fn put(&mut self, key: String, value: String) {
        let i = polynomial_hash(&key, self.capacity());
        let bucket = &mut self.buckets[i];
        if let Some(e) = bucket.iter_mut().find(|e| e.key == key) {
            e.value = value;
            return;
        }
        bucket.push_front(Entry { key, value });
        self.count += 1;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.bucket_for(key)
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.bucket_for(key).iter().any(|e| e.key == key)
    }

    /// Length of the fullest bucket.
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Bucket::len).max().unwrap_or(0)
    }

    fn bucket_for(&self, key: &str) -> &Bucket {
        &self.buckets[polynomial_hash(key, self.capacity())]
    }
}
