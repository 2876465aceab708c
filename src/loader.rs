//! TableLoader: feeds delimited text records into a `HashTable`.
//!
//! Each line is one record. A record must have at least
//! `max(key_col, val_col) + 1` fields; shorter records are skipped and
//! counted, never reported as errors. Trailing empty fields are dropped
//! before counting, so `"k1,"` has one field; leading and inner empty
//! fields are kept, so `",v"` stores `("", "v")`.

use crate::config::LoaderConfig;
use crate::error::Result;
use crate::hash_table::HashTable;
use std::io::BufRead;

/// Tally of one `load` call.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LoadStats {
    /// Records that produced a `put`.
    pub stored: usize,
    /// Records with too few fields.
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct TableLoader {
    key_col: usize,
    val_col: usize,
    delimiter: char,
    trim: bool,
}

impl TableLoader {
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            key_col: config.key_col,
            val_col: config.val_col,
            delimiter: config.delimiter,
            trim: config.trim,
        }
    }

    /// Fields a record needs before it can be stored.
    pub fn required_fields(&self) -> usize {
        self.key_col.max(self.val_col) + 1
    }

    /// Split one record and store its key/value pair. Returns `false` when
    /// the record is too short and was skipped.
    pub fn load_record(&self, record: &str, table: &mut HashTable) -> bool {
        let mut fields: Vec<&str> = record.split(self.delimiter).collect();
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }
        if fields.len() < self.required_fields() {
            log::trace!(
                "skipping record with {} of {} required fields: {record:?}",
                fields.len(),
                self.required_fields()
            );
            return false;
        }
        let (key, value) = (fields[self.key_col], fields[self.val_col]);
        if self.trim {
            table.put(key.trim(), value.trim());
        } else {
            table.put(key, value);
        }
        true
    }

    /// Read every line from `reader` into `table`.
    pub fn load<R: BufRead>(&self, reader: R, table: &mut HashTable) -> Result<LoadStats> {
        let mut stats = LoadStats::default();
        for line in reader.lines() {
            if self.load_record(&line?, table) {
                stats.stored += 1;
            } else {
                stats.skipped += 1;
            }
        }
        log::debug!(
            "loaded {} records ({} skipped) into {} distinct keys",
            stats.stored,
            stats.skipped,
            table.len()
        );
        Ok(stats)
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(&LoaderConfig::default())
    }
}
