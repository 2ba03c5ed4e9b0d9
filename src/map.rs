use crate::dynamic_array::DynamicArray;
use crate::error::Result;

/// Describes what a map is: a partial function from unique keys to values.
pub trait Map<K, V>
where
    K: Ord + Clone,
{
    /// The number of key-value pairs stored in the map right now.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the value stored for `key`, or `KeyNotFound`.
    fn get(&self, key: &K) -> Result<&V>;

    /// Get a mutable reference to the value stored for `key`, or
    /// `KeyNotFound`. This is the way to update a value in place.
    fn get_mut(&mut self, key: &K) -> Result<&mut V>;

    /// Adds a new pair. Inserting a key which is already present is refused
    /// with `DuplicateKey` and leaves the map as it was.
    fn insert(&mut self, key: K, value: V) -> Result<()>;

    /// Removes the pair for `key`, returning its value, or `KeyNotFound`.
    fn erase(&mut self, key: &K) -> Result<V>;

    fn contains(&self, key: &K) -> bool;

    /// Every key `k` with `k1 <= k <= k2`.
    fn find_keys(&self, k1: &K, k2: &K) -> DynamicArray<K>;

    /// Every key, smallest first.
    fn sorted_keys(&self) -> DynamicArray<K>;

    /// Clears the map entirely.
    fn clear(&mut self);
}
