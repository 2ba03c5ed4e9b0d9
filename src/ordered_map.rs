//! A map over a `DynamicArray` of pairs which is kept sorted by key, so every
//! lookup is a binary search.

use std::{cmp::Ordering, ops::Index};

use crate::dynamic_array::DynamicArray;
use crate::error::{CollectionError, Result};
use crate::map::Map;

/// Where a binary search ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    /// The key is stored at this index.
    Found(usize),

    /// The key isn't stored; inserting it at this index keeps the pairs
    /// sorted.
    Vacant(usize),
}

impl Probe {
    fn index(self) -> usize {
        match self {
            Probe::Found(i) | Probe::Vacant(i) => i,
        }
    }
}

/// An associative array backed by a sorted `DynamicArray<(K, V)>`.
///
/// Lookups, erases and the position search for an insert are O(log n);
/// actually inserting or erasing still has to shift the tail of the array,
/// so those are O(n) overall.
pub struct OrderedMap<K, V> {
    seq: DynamicArray<(K, V)>,
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self {
            seq: DynamicArray::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.seq.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Ord + Clone,
{
    /// Binary search over the closed range `[0, len - 1]`.
    ///
    /// When the key is missing the index handed back is the last one the
    /// search looked at, nudged one to the right if the key belongs after
    /// it. That is exactly where an insert has to put the key, so `insert`
    /// never needs a second pass.
    fn bin_search(&self, key: &K) -> Result<Probe> {
        if self.seq.is_empty() {
            return Ok(Probe::Vacant(0));
        }

        let mut start = 0;
        let mut end = self.seq.len() - 1;

        loop {
            let mid = (start + end) / 2;
            let (probe, _) = self.seq.get(mid)?;

            if start == end {
                return Ok(match key.cmp(probe) {
                    Ordering::Equal => Probe::Found(mid),
                    Ordering::Less => Probe::Vacant(mid),
                    Ordering::Greater => Probe::Vacant(mid + 1),
                });
            }

            match key.cmp(probe) {
                Ordering::Equal => return Ok(Probe::Found(mid)),
                Ordering::Less if mid == start => return Ok(Probe::Vacant(start)),
                Ordering::Less => end = mid - 1,
                Ordering::Greater => start = mid + 1,
            }
        }
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        match self.bin_search(key)? {
            Probe::Found(i) => self.seq.get(i).map(|(_, v)| v),
            Probe::Vacant(_) => Err(key_not_found()),
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        match self.bin_search(key)? {
            Probe::Found(i) => self.seq.get_mut(i).map(|(_, v)| v),
            Probe::Vacant(_) => Err(key_not_found()),
        }
    }

    /// Inserts the pair where the binary search says it goes.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        match self.bin_search(&key)? {
            Probe::Found(i) => {
                log::debug!("refusing duplicate insert of key at index {}", i);
                Err(CollectionError::DuplicateKey)
            }
            Probe::Vacant(i) => {
                self.seq.insert((key, value), i)?;

                #[cfg(test)]
                self.sortedness_test();

                Ok(())
            }
        }
    }

    pub fn erase(&mut self, key: &K) -> Result<V> {
        match self.bin_search(key)? {
            Probe::Found(i) => {
                let (_, value) = self.seq.erase(i)?;

                #[cfg(test)]
                self.sortedness_test();

                Ok(value)
            }
            Probe::Vacant(_) => Err(key_not_found()),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        matches!(self.bin_search(key), Ok(Probe::Found(_)))
    }

    /// Keys in `[k1, k2]`, ascending. Starts from wherever `k1` would go and
    /// reads forward until it passes `k2`.
    pub fn find_keys(&self, k1: &K, k2: &K) -> DynamicArray<K> {
        if k1 > k2 {
            return DynamicArray::new();
        }

        let start = self
            .bin_search(k1)
            .map(Probe::index)
            .unwrap_or_else(|_| self.seq.len());

        self.seq
            .iter()
            .skip(start)
            .map(|(k, _)| k)
            .take_while(|k| *k <= k2)
            .cloned()
            .collect()
    }

    /// The storage is already in key order, so this is just a copy.
    pub fn sorted_keys(&self) -> DynamicArray<K> {
        self.seq.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.seq.clear();
    }

    #[cfg(test)]
    fn sortedness_test(&self) {
        let keys: Vec<&K> = self.seq.iter().map(|(k, _)| k).collect();

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "backing storage fell out of order");
        }
    }
}

fn key_not_found() -> CollectionError {
    log::debug!("key not found in ordered map");
    CollectionError::KeyNotFound
}

impl<K, V> Map<K, V> for OrderedMap<K, V>
where
    K: Ord + Clone,
{
    fn len(&self) -> usize {
        OrderedMap::len(self)
    }

    fn get(&self, key: &K) -> Result<&V> {
        OrderedMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        OrderedMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        OrderedMap::insert(self, key, value)
    }

    fn erase(&mut self, key: &K) -> Result<V> {
        OrderedMap::erase(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        OrderedMap::contains(self, key)
    }

    fn find_keys(&self, k1: &K, k2: &K) -> DynamicArray<K> {
        OrderedMap::find_keys(self, k1, k2)
    }

    fn sorted_keys(&self) -> DynamicArray<K> {
        OrderedMap::sorted_keys(self)
    }

    fn clear(&mut self) {
        OrderedMap::clear(self)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for OrderedMap<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
        }
    }
}

impl<K, V> Index<&K> for OrderedMap<K, V>
where
    K: Ord + Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<K, V> std::fmt::Debug for OrderedMap<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
