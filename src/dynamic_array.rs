//! A growable array that manages its own buffer, doubling on demand and never
//! giving memory back until it is dropped.

use std::{
    fmt,
    iter::FromIterator,
    mem,
    ops::{Index, IndexMut},
};

use crate::error::{CollectionError, Result};
use crate::sequence::Sequence;
use crate::sort;

/// Which algorithm `DynamicArray::sort` reaches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Stable merge sort. O(n log n) always, but allocates a scratch buffer
    /// for every merge.
    Merge,

    /// In-place quick sort. Not stable, and quadratic on input that is
    /// already sorted.
    Quick,
}

impl Default for SortStrategy {
    fn default() -> Self {
        SortStrategy::Merge
    }
}

/// A contiguous, index-addressable sequence.
///
/// The buffer is a run of `capacity` slots of which the first `len` are
/// occupied and the rest are `None`. Capacity starts at zero, becomes one on
/// the first insert and doubles whenever an insert would overflow it.
/// Erasing never shrinks it.
pub struct DynamicArray<T> {
    /// The buffer. Slots `[0, len)` are always `Some`.
    slots: Box<[Option<T>]>,

    /// The number of occupied slots.
    len: usize,

    /// What `sort` does.
    strategy: SortStrategy,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array. Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self::with_sort_strategy(SortStrategy::default())
    }

    /// Creates an empty array whose `sort` uses the given strategy.
    pub fn with_sort_strategy(strategy: SortStrategy) -> Self {
        Self {
            slots: Box::default(),
            len: 0,
            strategy,
        }
    }

    /// The number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the array can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn sort_strategy(&self) -> SortStrategy {
        self.strategy
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        self.slots[index]
            .as_ref()
            .ok_or(CollectionError::OutOfRange {
                index,
                len: self.len,
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;

        if index >= len {
            return Err(self.out_of_range(index));
        }

        self.slots[index]
            .as_mut()
            .ok_or(CollectionError::OutOfRange { index, len })
    }

    /// Inserts `elem` at `index`, shifting the tail of the array one place
    /// to the right. Grows the buffer first if it is full.
    pub fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        if self.len + 1 > self.capacity() {
            self.grow();
        }

        // drop the new element into the first free slot, then rotate it
        // down into place. everything in [index, len) moves up by one.
        self.slots[self.len] = Some(elem);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;

        Ok(())
    }

    /// Appends `elem` to the end of the array.
    pub fn push(&mut self, elem: T) {
        if self.len + 1 > self.capacity() {
            self.grow();
        }

        self.slots[self.len] = Some(elem);
        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting the tail of the
    /// array one place to the left. The buffer keeps its capacity.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        let removed = self.slots[index].take();

        // the emptied slot rotates out to the end of the occupied run
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;

        removed.ok_or(CollectionError::OutOfRange {
            index,
            len: self.len + 1,
        })
    }

    /// Whether an element equal to `elem` is in the array. Linear scan.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elem)
    }

    /// Drops every element. Does not free the underlying buffer.
    pub fn clear(&mut self) {
        for slot in self.slots[..self.len].iter_mut() {
            *slot = None;
        }

        self.len = 0;
    }

    /// Moves the contents out into a new array, leaving this one empty with
    /// no buffer at all.
    pub fn take(&mut self) -> Self {
        Self {
            slots: mem::take(&mut self.slots),
            len: mem::take(&mut self.len),
            strategy: self.strategy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots[..self.len].iter_mut().flatten()
    }

    /// Sorts using whichever strategy this array was built with.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        match self.strategy {
            SortStrategy::Merge => self.merge_sort(),
            SortStrategy::Quick => self.quick_sort(),
        }
    }

    /// Stable merge sort over the whole array.
    pub fn merge_sort(&mut self)
    where
        T: PartialOrd,
    {
        log::trace!("merge sorting {} elements", self.len);
        sort::merge_sort(&mut self.slots[..self.len]);
    }

    /// Unstable in-place quick sort over the whole array.
    pub fn quick_sort(&mut self)
    where
        T: PartialOrd,
    {
        log::trace!("quick sorting {} elements", self.len);
        sort::quick_sort(&mut self.slots[..self.len]);
    }

    /// Doubles the buffer (or makes a one-slot buffer out of nothing) and
    /// moves every element across.
    fn grow(&mut self) {
        let capacity = match self.capacity() {
            0 => 1,
            n => n * 2,
        };

        log::trace!(
            "growing array from {} to {} slots",
            self.capacity(),
            capacity
        );

        let mut slots: Box<[Option<T>]> = (0..capacity).map(|_| None).collect();

        for (new, old) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *new = old.take();
        }

        self.slots = slots;
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        log::debug!(
            "index {} out of range for array of length {}",
            index,
            self.len
        );

        CollectionError::OutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        DynamicArray::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        DynamicArray::get_mut(self, index)
    }

    fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        DynamicArray::insert(self, elem, index)
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        DynamicArray::erase(self, index)
    }

    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        DynamicArray::contains(self, elem)
    }

    fn clear(&mut self) {
        DynamicArray::clear(self)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies element by element into a fresh buffer, so the copy's capacity is
/// whatever the doubling rule gives for its length rather than the source's.
impl<T> Clone for DynamicArray<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::with_sort_strategy(self.strategy);

        for elem in self.iter() {
            copy.push(elem.clone());
        }

        copy
    }
}

impl<T> PartialEq for DynamicArray<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for DynamicArray<T> where T: Eq {}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();

        for elem in iter {
            array.push(elem);
        }

        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> fmt::Debug for DynamicArray<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `a, b, c`.
impl<T> fmt::Display for DynamicArray<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{}", elem)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DynamicArray, SortStrategy};
    use crate::error::CollectionError;
    use crate::sequence::contract;
    use quickcheck_macros::quickcheck;

    fn contents(array: &DynamicArray<i32>) -> Vec<i32> {
        array.iter().copied().collect()
    }

    #[test]
    fn test_sequence_contract() {
        contract::check_all(DynamicArray::<i32>::new);
    }

    #[test]
    fn test_insert_at_front_then_merge_sort() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut array = DynamicArray::new();
        for value in &[5, 3, 1, 4, 2] {
            array.insert(*value, 0).unwrap();
        }
        assert_eq!(vec![2, 4, 1, 3, 5], contents(&array));

        array.merge_sort();
        assert_eq!(vec![1, 2, 3, 4, 5], contents(&array));
    }

    #[test]
    fn test_capacity_doubles_and_never_shrinks() {
        let mut array = DynamicArray::new();
        assert_eq!(0, array.capacity());

        let mut seen = Vec::new();
        for i in 0..9 {
            array.push(i);
            seen.push(array.capacity());
        }
        assert_eq!(vec![1, 2, 4, 4, 8, 8, 8, 8, 16], seen);

        while !array.is_empty() {
            array.erase(0).unwrap();
            assert_eq!(16, array.capacity());
        }

        array.clear();
        assert_eq!(16, array.capacity());
    }

    #[test]
    fn test_failed_insert_does_not_grow() {
        let mut array: DynamicArray<i32> = DynamicArray::new();

        assert_eq!(
            Err(CollectionError::OutOfRange { index: 2, len: 0 }),
            array.insert(1, 2)
        );
        assert_eq!(0, array.capacity());
        assert!(array.is_empty());
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original: DynamicArray<String> = DynamicArray::new();
        for word in &["put", "large", "things", "in", "memory"] {
            original.push(word.to_string());
        }
        // erase so the source capacity is oversized for its length
        original.erase(4).unwrap();
        original.erase(3).unwrap();
        assert_eq!(8, original.capacity());

        let mut copy = original.clone();
        assert_eq!(original, copy);
        assert_eq!(4, copy.capacity());

        copy[0].push_str("!!");
        copy.push("more".to_owned());

        assert_eq!("put", original[0]);
        assert_eq!(3, original.len());
        assert_eq!("put!!", copy[0]);
        assert_eq!(4, copy.len());
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut source: DynamicArray<i32> = (1..=5).collect();
        let moved = source.take();

        assert_eq!(vec![1, 2, 3, 4, 5], contents(&moved));
        assert_eq!(8, moved.capacity());

        assert_eq!(0, source.len());
        assert_eq!(0, source.capacity());

        // and the husk is still usable
        source.insert(42, 0).unwrap();
        assert_eq!(vec![42], contents(&source));
    }

    #[test]
    fn test_sort_uses_configured_strategy() {
        let mut merge = DynamicArray::new();
        let mut quick = DynamicArray::with_sort_strategy(SortStrategy::Quick);

        for value in &[9, -2, 7, 7, 0, 3] {
            merge.push(*value);
            quick.push(*value);
        }

        merge.sort();
        quick.sort();

        assert_eq!(vec![-2, 0, 3, 7, 7, 9], contents(&merge));
        assert_eq!(vec![-2, 0, 3, 7, 7, 9], contents(&quick));
        assert_eq!(SortStrategy::Quick, quick.clone().sort_strategy());
    }

    #[test]
    fn test_sort_leaves_spare_capacity_alone() {
        let mut array: DynamicArray<i32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(4, array.capacity());

        array.quick_sort();
        assert_eq!(vec![1, 2, 3], contents(&array));

        array.push(0);
        array.merge_sort();
        assert_eq!(vec![0, 1, 2, 3], contents(&array));
        assert_eq!(4, array.capacity());
    }

    #[test]
    fn test_display() {
        let empty: DynamicArray<i32> = DynamicArray::new();
        assert_eq!("", empty.to_string());

        let one: DynamicArray<i32> = Some(1).into_iter().collect();
        assert_eq!("1", one.to_string());

        let many: DynamicArray<i32> = (1..=3).collect();
        assert_eq!("1, 2, 3", many.to_string());
        assert_eq!("[1, 2, 3]", format!("{:?}", many));
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for a sequence of length 3")]
    fn test_index_panics_out_of_range() {
        let array: DynamicArray<i32> = (1..=3).collect();
        let _elem = array[3];
    }

    #[quickcheck]
    fn insert_then_read_round_trips(items: Vec<i32>, value: i32, at: usize) -> bool {
        let mut array: DynamicArray<i32> = items.iter().copied().collect();
        let index = at % (items.len() + 1);

        array.insert(value, index).unwrap();

        array.len() == items.len() + 1 && array[index] == value
    }

    #[quickcheck]
    fn both_sorts_agree_with_std(items: Vec<i32>) -> bool {
        let mut expected = items.clone();
        expected.sort();

        let mut merged: DynamicArray<i32> = items.iter().copied().collect();
        let mut quicked = merged.clone();
        merged.merge_sort();
        quicked.quick_sort();

        contents(&merged) == expected && contents(&quicked) == expected
    }
}
