//! Serde-backed settings for building a table from delimited records.
//!
//! ```toml
//! [table]
//! strategy = "open_addressing"   # or "chaining"
//! initial_capacity = 100003
//!
//! [loader]
//! key_col = 0
//! val_col = 1
//! delimiter = ","
//! trim = false
//! ```

use crate::error::Result;
use crate::hash::DEFAULT_CAPACITY;
use crate::hash_table::CollisionStrategy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub table: TableConfig,
    pub loader: LoaderConfig,
}

impl Config {
    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub strategy: CollisionStrategy,
    /// Starting slot count. Open addressing grows past it; chaining keeps it.
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            strategy: CollisionStrategy::default(),
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Zero-based field index of the key.
    pub key_col: usize,
    /// Zero-based field index of the value.
    pub val_col: usize,
    pub delimiter: char,
    /// Strip surrounding whitespace from both extracted fields.
    pub trim: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            key_col: 0,
            val_col: 1,
            delimiter: ',',
            trim: false,
        }
    }
}
