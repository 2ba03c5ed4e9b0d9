//! A map over a `LinkedList` of pairs kept in insertion order. Every lookup is
//! a linear scan; anything that wants the keys in order has to sort them.

use std::ops::Index;

use crate::dynamic_array::DynamicArray;
use crate::error::{CollectionError, Result};
use crate::linked_list::LinkedList;
use crate::map::Map;

/// An associative list. Cheap to insert into (once the duplicate check has
/// walked the list), O(n) for everything else.
pub struct LinearMap<K, V> {
    seq: LinkedList<(K, V)>,
}

impl<K, V> LinearMap<K, V> {
    pub fn new() -> Self {
        Self {
            seq: LinkedList::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Pairs in the order they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.seq.iter().map(|(k, v)| (k, v))
    }
}

impl<K, V> LinearMap<K, V>
where
    K: Ord + Clone,
{
    fn position(&self, key: &K) -> Option<usize> {
        self.seq.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &K) -> Result<&V> {
        self.seq
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
            .ok_or_else(key_not_found)
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        let i = self.position(key).ok_or_else(key_not_found)?;
        self.seq.get_mut(i).map(|(_, v)| v)
    }

    /// Appends the pair at the tail, after checking the key isn't already
    /// somewhere in the list.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        if self.position(&key).is_some() {
            log::debug!("refusing duplicate insert into linear map");
            return Err(CollectionError::DuplicateKey);
        }

        self.seq.push_back((key, value));
        Ok(())
    }

    pub fn erase(&mut self, key: &K) -> Result<V> {
        let i = self.position(key).ok_or_else(key_not_found)?;
        let (_, value) = self.seq.erase(i)?;
        Ok(value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Keys in `[k1, k2]`, in insertion order rather than key order.
    pub fn find_keys(&self, k1: &K, k2: &K) -> DynamicArray<K> {
        self.seq
            .iter()
            .map(|(k, _)| k)
            .filter(|k| *k >= k1 && *k <= k2)
            .cloned()
            .collect()
    }

    /// Every key, in insertion order.
    pub fn all_keys(&self) -> DynamicArray<K> {
        self.seq.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Every key, smallest first. The list carries no order of its own, so
    /// this copies the keys out and merge sorts the copy.
    pub fn sorted_keys(&self) -> DynamicArray<K> {
        let mut keys = self.all_keys();
        keys.merge_sort();
        keys
    }

    pub fn clear(&mut self) {
        self.seq.clear();
    }
}

fn key_not_found() -> CollectionError {
    log::debug!("key not found in linear map");
    CollectionError::KeyNotFound
}

impl<K, V> Map<K, V> for LinearMap<K, V>
where
    K: Ord + Clone,
{
    fn len(&self) -> usize {
        LinearMap::len(self)
    }

    fn get(&self, key: &K) -> Result<&V> {
        LinearMap::get(self, key)
    }

    fn get_mut(&mut self, key: &K) -> Result<&mut V> {
        LinearMap::get_mut(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Result<()> {
        LinearMap::insert(self, key, value)
    }

    fn erase(&mut self, key: &K) -> Result<V> {
        LinearMap::erase(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        LinearMap::contains(self, key)
    }

    fn find_keys(&self, k1: &K, k2: &K) -> DynamicArray<K> {
        LinearMap::find_keys(self, k1, k2)
    }

    fn sorted_keys(&self) -> DynamicArray<K> {
        LinearMap::sorted_keys(self)
    }

    fn clear(&mut self) {
        LinearMap::clear(self)
    }
}

impl<K, V> Default for LinearMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Clone for LinearMap<K, V>
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

impl<K, V> Index<&K> for LinearMap<K, V>
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

impl<K, V> std::fmt::Debug for LinearMap<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
