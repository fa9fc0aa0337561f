//! Fixed-capacity integer map with two access modes.
//!
//! Entries are kept densely in insertion order. While unsorted, a
//! linear-probing hash index locates keys. [`SortableMap::sort_full`] orders
//! the entries by key, after which lookups binary-search instead.

pub mod merge;

pub use merge::{merge, sort_pairs, split_permutation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pair {
    pub key: u64,
    pub value: u64,
}

impl Pair {
    pub const fn new(key: u64, value: u64) -> Self {
        Self { key, value }
    }
}

/// Operations the harness needs from a map.
pub trait SortableMap {
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    fn capacity(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry. Capacity is kept.
    fn clear(&mut self);

    /// Insert or replace. Returns `false` when a new key does not fit.
    fn insert(&mut self, pair: Pair) -> bool;

    fn find(&self, key: u64) -> Option<&Pair>;

    /// Order all entries by key.
    fn sort_full(&mut self);

    /// Look `key` up through the ordered representation.
    fn find_sorted(&self, key: u64) -> Option<&Pair>;
}

const EMPTY: u32 = u32::MAX;
/// Entry positions are stored as `u32`.
pub const MAX_CAPACITY: usize = 1 << 31;

pub struct Map {
    entries: Vec<Pair>,
    index: Vec<u32>,
    shift: u32,
    capacity: usize,
    sorted: bool,
}

impl Map {
    fn home_slot(&self, key: u64) -> usize {
        // Fibonacci hashing: the top bits of the product pick the slot.
        (key.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> self.shift) as usize
    }

    /// Probe for `key`: `Ok(entry position)` or `Err(free slot)`.
    ///
    /// The index is at least twice the capacity, so a free slot always
    /// ends the probe.
    fn probe(&self, key: u64) -> Result<usize, usize> {
        let mask = self.index.len() - 1;
        let mut slot = self.home_slot(key);
        loop {
            match self.index[slot] {
                EMPTY => return Err(slot),
                pos if self.entries[pos as usize].key == key => return Ok(pos as usize),
                _ => slot = (slot + 1) & mask,
            }
        }
    }

    fn probe_find(&self, key: u64) -> Option<&Pair> {
        self.probe(key).ok().map(|pos| &self.entries[pos])
    }

    fn search_sorted(&self, key: u64) -> Option<&Pair> {
        self.entries
            .binary_search_by_key(&key, |pair| pair.key)
            .ok()
            .map(|pos| &self.entries[pos])
    }

    /// Rebuild the hash index from the entries and leave sorted mode.
    fn reindex(&mut self) {
        self.index.fill(EMPTY);
        for pos in 0..self.entries.len() {
            if let Err(slot) = self.probe(self.entries[pos].key) {
                self.index[slot] = pos as u32;
            }
        }
        self.sorted = false;
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn entries(&self) -> &[Pair] {
        &self.entries
    }
}

impl SortableMap for Map {
    fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CAPACITY);
        let slots = (capacity * 2).next_power_of_two().max(2);
        Self {
            entries: Vec::with_capacity(capacity),
            index: vec![EMPTY; slots],
            shift: 64 - slots.trailing_zeros(),
            capacity,
            sorted: false,
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.index.fill(EMPTY);
        self.sorted = false;
    }

    fn insert(&mut self, pair: Pair) -> bool {
        if self.sorted {
            self.reindex();
        }
        match self.probe(pair.key) {
            Ok(pos) => {
                self.entries[pos].value = pair.value;
                true
            }
            Err(_) if self.entries.len() == self.capacity => false,
            Err(slot) => {
                self.index[slot] = self.entries.len() as u32;
                self.entries.push(pair);
                true
            }
        }
    }

    fn find(&self, key: u64) -> Option<&Pair> {
        if self.sorted {
            self.search_sorted(key)
        } else {
            self.probe_find(key)
        }
    }

    fn sort_full(&mut self) {
        sort_pairs(&mut self.entries);
        self.sorted = true;
    }

    fn find_sorted(&self, key: u64) -> Option<&Pair> {
        if self.sorted {
            self.search_sorted(key)
        } else {
            self.probe_find(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(keys: &[u64]) -> Map {
        let mut map = Map::with_capacity(keys.len());
        for &key in keys {
            assert!(map.insert(Pair::new(key, key.wrapping_add(100))));
        }
        map
    }

    #[test]
    fn test_insert_then_find() {
        let map = filled(&[7, 3, 11, 0, u64::MAX]);
        assert_eq!(map.len(), 5);
        for key in [7, 3, 11, 0, u64::MAX] {
            assert_eq!(map.find(key).map(|p| p.value), Some(key.wrapping_add(100)));
        }
        assert!(map.find(5).is_none());
    }

    #[test]
    fn test_insert_rejects_when_full_but_replaces_existing() {
        let mut map = filled(&[1, 2]);
        assert!(!map.insert(Pair::new(3, 3)));
        assert_eq!(map.len(), 2);
        assert!(map.insert(Pair::new(2, 42)));
        assert_eq!(map.find(2).map(|p| p.value), Some(42));
    }

    #[test]
    fn test_zero_capacity_accepts_nothing() {
        let mut map = Map::with_capacity(0);
        assert!(!map.insert(Pair::new(1, 1)));
        assert!(map.find(1).is_none());
    }

    #[test]
    fn test_sort_full_keeps_every_entry() {
        let keys: Vec<u64> = (0..200u64).map(|i| i.wrapping_mul(0x2545_F491_4F6C_DD1D)).collect();
        let mut map = filled(&keys);
        map.sort_full();
        assert!(map.is_sorted());
        assert!(map.entries().windows(2).all(|w| w[0].key < w[1].key));
        for &key in &keys {
            assert_eq!(map.find_sorted(key).map(|p| p.value), Some(key.wrapping_add(100)));
            assert_eq!(map.find(key).map(|p| p.key), Some(key));
        }
    }

    #[test]
    fn test_insert_after_sort_reindexes() {
        let mut map = Map::with_capacity(4);
        map.insert(Pair::new(9, 9));
        map.insert(Pair::new(4, 4));
        map.sort_full();
        assert!(map.insert(Pair::new(6, 6)));
        assert!(!map.is_sorted());
        for key in [9, 4, 6] {
            assert_eq!(map.find(key).map(|p| p.value), Some(key));
        }
    }

    #[test]
    fn test_clear_resets_mode_and_contents() {
        let mut map = filled(&[5, 6]);
        map.sort_full();
        map.clear();
        assert!(map.is_empty());
        assert!(!map.is_sorted());
        assert!(map.find_sorted(5).is_none());
        assert!(map.insert(Pair::new(5, 1)));
    }
}
