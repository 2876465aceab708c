//! HashTable: the public put/get surface over either collision strategy.

use crate::chaining::ChainedTable;
use crate::config::{LoaderConfig, TableConfig};
use crate::error::Result;
use crate::hash::DEFAULT_CAPACITY;
use crate::loader::TableLoader;
use crate::open_addressing::OpenAddressingTable;
use serde::Deserialize;
use std::io::BufRead;

/// How colliding keys are resolved. Fixed for the lifetime of a table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Linear probing in a single slot array that grows to stay under half full.
    #[default]
    OpenAddressing,
    /// Fixed number of buckets, each holding a chain of entries.
    Chaining,
}

#[derive(Debug, Clone)]
enum Storage {
    Open(OpenAddressingTable),
    Chained(ChainedTable),
}

/// String-to-string lookup table.
///
/// Keys and values are copied in; `get` borrows from the table.
#[derive(Debug, Clone)]
pub struct HashTable {
    storage: Storage,
}

impl HashTable {
    pub fn new(strategy: CollisionStrategy) -> Self {
        Self::with_capacity(strategy, DEFAULT_CAPACITY)
    }

    /// Create an empty table with at least `capacity` slots. Open addressing
    /// rounds up to the next prime; chaining uses `capacity` as given
    /// (clamped to at least one).
    pub fn with_capacity(strategy: CollisionStrategy, capacity: usize) -> Self {
        let storage = match strategy {
            CollisionStrategy::OpenAddressing => {
                Storage::Open(OpenAddressingTable::with_capacity(capacity))
            }
            CollisionStrategy::Chaining => Storage::Chained(ChainedTable::with_capacity(capacity)),
        };
        Self { storage }
    }

    pub fn from_config(config: &TableConfig) -> Self {
        Self::with_capacity(config.strategy, config.initial_capacity)
    }

    /// Build a table in one shot from delimited records.
    pub fn build<R: BufRead>(
        table: &TableConfig,
        reader: R,
        loader: &LoaderConfig,
    ) -> Result<Self> {
        let mut t = Self::from_config(table);
        TableLoader::new(loader).load(reader, &mut t)?;
        Ok(t)
    }

    pub fn strategy(&self) -> CollisionStrategy {
        match self.storage {
            Storage::Open(_) => CollisionStrategy::OpenAddressing,
            Storage::Chained(_) => CollisionStrategy::Chaining,
        }
    }

    /// Insert `key -> value`, replacing any previous value for `key`.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        match &mut self.storage {
            Storage::Open(t) => t.put(key, value),
            Storage::Chained(t) => t.put(key, value),
        }
    }

    /// Value stored for `key`, or `None` if it was never inserted.
    pub fn get(&self, key: &str) -> Option<&str> {
        match &self.storage {
            Storage::Open(t) => t.get(key),
            Storage::Chained(t) => t.get(key),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        match &self.storage {
            Storage::Open(t) => t.contains_key(key),
            Storage::Chained(t) => t.contains_key(key),
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Open(t) => t.len(),
            Storage::Chained(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current slot (or bucket) count.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Open(t) => t.capacity(),
            Storage::Chained(t) => t.capacity(),
        }
    }

    /// `len / capacity`. Always below 0.5 for open addressing; unbounded for
    /// chaining.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new(CollisionStrategy::default())
    }
}
