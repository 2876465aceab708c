//! lookup-table: a load-once, query-many string lookup table with a
//! selectable collision strategy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one put/get contract over two structurally different tables,
//!   chosen at construction and never switched afterward.
//! - Layers:
//!   - `hash`: Horner polynomial hash (base 31) reduced into
//!     `[0, capacity)`, plus the prime helpers used when growing.
//!   - `OpenAddressingTable`: a single `Vec` of `Empty`/`Occupied` slots
//!     with linear probing. Grows to the smallest prime at least twice the
//!     current size whenever an insertion could bring the load factor to
//!     one half.
//!   - `ChainedTable`: a fixed number of buckets, each owning its entries.
//!     No growth.
//!   - `HashTable`: the public surface; dispatches to one of the above.
//!   - `TableLoader`: splits delimited records and calls `put`. It sits
//!     outside the core and only uses the public surface.
//!
//! Constraints
//! - Single-threaded. `put` takes `&mut self` and `get` takes `&self`, so
//!   exclusive access is enforced by the borrow checker; there is no
//!   internal locking.
//! - No deletion and no iteration over stored pairs.
//! - A missing key is `None`. No stored string doubles as a sentinel, so
//!   empty and arbitrary values round-trip.
//!
//! Open addressing invariants
//! - `len * 2 < capacity` after every `put`. Because of this a probe
//!   always meets an empty slot, and `get` stops after one full wrap
//!   regardless (debug builds assert the free slot exists).
//! - Capacity only grows. Rehashing reinserts through the probe routine
//!   directly; the grown table cannot need another resize mid-rehash.
//!
//! Chaining trade-off
//! - Bucket count is fixed. Chains grow without bound, so lookups degrade
//!   to O(chain length) on an undersized table. `ChainedTable::longest_chain`
//!   exposes the current worst case.

pub mod chaining;
pub mod config;
pub mod error;
pub mod hash;
mod hash_table;
pub mod loader;
pub mod open_addressing;

// Public surface
pub use config::{Config, LoaderConfig, TableConfig};
pub use error::{Error, Result};
pub use hash_table::{CollisionStrategy, HashTable};
pub use loader::{LoadStats, TableLoader};

/// One stored pair, owned by whichever slot or bucket holds it.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
}
