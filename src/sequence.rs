use crate::error::Result;

/// Describes what a sequence is: an ordered, index-addressable collection
/// which can grow and shrink at any position.
pub trait Sequence<T> {
    /// The number of elements in the sequence right now.
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements at all.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the element at `index`, failing if `index >= len`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Gets a mutable reference to the element at `index`, failing if
    /// `index >= len`.
    fn get_mut(&mut self, index: usize) -> Result<&mut T>;

    /// Inserts `elem` so that it ends up at `index`, shifting everything at
    /// or after `index` one place later. `index == len` appends. Fails
    /// without touching the sequence if `index > len`.
    fn insert(&mut self, elem: T, index: usize) -> Result<()>;

    /// Removes and returns the element at `index`, shifting everything after
    /// it one place earlier. Fails without touching the sequence if
    /// `index >= len`.
    fn erase(&mut self, index: usize) -> Result<T>;

    /// Whether an element equal to `elem` is anywhere in the sequence.
    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq;

    /// Drops every element.
    fn clear(&mut self);
}
