//! OpenAddressingTable: every entry lives directly in the slot array;
//! collisions are resolved by linear probing and the table grows to keep
//! its load factor below one half.

use crate::hash::{next_prime, polynomial_hash};
use crate::Entry;

#[derive(Debug, Clone, Default)]
enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

impl Slot {
    fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(e) => Some(e),
        }
    }
}

/// Outcome of walking a probe sequence for a key.
enum Probe {
    /// Slot holding the key.
    Found(usize),
    /// First empty slot on the sequence; the key is absent.
    Vacant(usize),
    /// Sequence wrapped back to its start without an empty slot.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct OpenAddressingTable {
    slots: Vec<Slot>,
    count: usize,
}

impl OpenAddressingTable {
    /// Create an empty table with the smallest prime number of slots
    /// `>= capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
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
        self.slots.len()
    }

    /// Insert or overwrite. Grows first whenever the insertion could push
    /// the load factor to one half or above.
    pub fn put(&mut self, key: String, value: String) {
        while needs_growth(self.count, self.capacity()) {
            self.grow();
        }
        self.place(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match self.probe(key) {
            Probe::Found(i) => self.slots[i].entry().map(|e| e.value.as_str()),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Walk the linear probe sequence starting at `hash(key)`, stopping at
    /// the matching key, the first empty slot, or after one full wrap.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.capacity();
        debug_assert!(
            self.count < capacity,
            "open-addressing table has no empty slot (count {}, capacity {})",
            self.count,
            capacity
        );
        let start = polynomial_hash(key, capacity);
        let mut i = start;
        loop {
            match &self.slots[i] {
                Slot::Empty => return Probe::Vacant(i),
                Slot::Occupied(e) if e.key == key => return Probe::Found(i),
                Slot::Occupied(_) => {}
            }
            i = (i + 1) % capacity;
            if i == start {
                return Probe::Exhausted;
            }
        }
    }

    /// Store without checking the load factor. Callers guarantee a free slot.
    fn place(&mut self, key: String, value: String) {
        match self.probe(&key) {
            Probe::Found(i) => {
                if let Slot::Occupied(e) = &mut self.slots[i] {
                    e.value = value;
                }
            }
            Probe::Vacant(i) => {
                self.slots[i] = Slot::Occupied(Entry { key, value });
                self.count += 1;
            }
            Probe::Exhausted => {
                unreachable!("load factor kept below 1/2, a free slot must exist")
            }
        }
    }

    /// Rebuild at the smallest prime at least twice the current capacity and
    /// rehash every stored entry into it.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = next_prime(old_capacity.saturating_mul(2));
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        let stored = self.count;
        self.count = 0;
        for slot in old {
            if let Slot::Occupied(Entry { key, value }) = slot {
                self.place(key, value);
            }
        }
        debug_assert_eq!(self.count, stored, "rehash lost or duplicated entries");
        log::debug!(
            "open-addressing table resized {old_capacity} -> {new_capacity} slots ({stored} entries)"
        );
    }
}

/// `(count + 1) / capacity >= 0.5`, in integer arithmetic.
#[inline]
fn needs_growth(count: usize, capacity: usize) -> bool {
    (count + 1) * 2 >= capacity
}

fn empty_slots(capacity: usize) -> Vec<Slot> {
    std::iter::repeat_with(Slot::default).take(capacity).collect()
}
