//! The two sorts that back `DynamicArray`. Both only ever ask `<` of their
//! elements.
//!
//! Merge sort works on the array's slots directly (`Option<T>`) so that it
//! can move elements into its scratch buffer and back without requiring
//! `Clone`. Every slot handed in is occupied; `Option`'s ordering compares
//! two `Some`s by their contents, so this is the same as comparing `T`.

/// Stable top-down merge sort. The range `[0, len - 1]` splits at
/// `mid = (len - 1) / 2`, left half inclusive of `mid`.
pub(crate) fn merge_sort<T>(slots: &mut [Option<T>])
where
    T: PartialOrd,
{
    if slots.len() < 2 {
        return;
    }

    let mid = (slots.len() - 1) / 2 + 1;

    {
        let (left, right) = slots.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }

    merge(slots, mid);
}

/// Merges the sorted runs `[0, mid)` and `[mid, len)` through a scratch
/// buffer sized to the range.
fn merge<T>(slots: &mut [Option<T>], mid: usize)
where
    T: PartialOrd,
{
    let mut merged: Vec<Option<T>> = Vec::with_capacity(slots.len());
    let (mut left, mut right) = (0, mid);

    while left < mid && right < slots.len() {
        // the right run only goes first when it is strictly smaller, which
        // keeps equal elements in their original order
        if slots[right] < slots[left] {
            merged.push(slots[right].take());
            right += 1;
        } else {
            merged.push(slots[left].take());
            left += 1;
        }
    }

    merged.extend(slots[left..mid].iter_mut().map(Option::take));
    merged.extend(slots[right..].iter_mut().map(Option::take));

    for (slot, value) in slots.iter_mut().zip(merged) {
        *slot = value;
    }
}

/// In-place quick sort with a Lomuto partition around the first element.
/// Not stable, worst case quadratic on already-sorted input.
pub(crate) fn quick_sort<T>(items: &mut [T])
where
    T: PartialOrd,
{
    if items.len() < 2 {
        return;
    }

    let boundary = partition(items);
    let (lower, upper) = items.split_at_mut(boundary);

    quick_sort(lower);
    quick_sort(&mut upper[1..]);
}

/// Moves everything smaller than `items[0]` in front of it and returns the
/// pivot's final position.
fn partition<T>(items: &mut [T]) -> usize
where
    T: PartialOrd,
{
    let mut boundary = 0;

    // swaps never touch index 0 until the scan is over, so the pivot
    // stays put for the whole loop
    for i in 1..items.len() {
        if items[i] < items[0] {
            boundary += 1;
            items.swap(i, boundary);
        }
    }

    items.swap(0, boundary);
    boundary
}

#[cfg(test)]
mod tests {
    use super::{merge_sort, partition, quick_sort};
    use quickcheck_macros::quickcheck;
    use std::cmp::Ordering;

    /// Orders by key alone so that equal keys with different tags can be
    /// told apart after sorting.
    #[derive(Clone, Debug)]
    struct Tagged {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            self.key.partial_cmp(&other.key)
        }
    }

    fn slots_of<T>(items: Vec<T>) -> Vec<Option<T>> {
        items.into_iter().map(Some).collect()
    }

    fn unslot<T>(slots: Vec<Option<T>>) -> Vec<T> {
        slots.into_iter().flatten().collect()
    }

    #[test]
    fn test_merge_sort_small_ranges() {
        let mut empty: Vec<Option<i32>> = Vec::new();
        merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = slots_of(vec![7]);
        merge_sort(&mut one);
        assert_eq!(vec![7], unslot(one));

        let mut two = slots_of(vec![9, 3]);
        merge_sort(&mut two);
        assert_eq!(vec![3, 9], unslot(two));
    }

    #[test]
    fn test_merge_sort_keeps_equal_elements_in_order() {
        let items: Vec<Tagged> = [2u8, 1, 2, 1, 0, 2]
            .iter()
            .enumerate()
            .map(|(tag, &key)| Tagged { key, tag })
            .collect();

        let mut slots = slots_of(items);
        merge_sort(&mut slots);

        let tags: Vec<usize> = unslot(slots).iter().map(|t| t.tag).collect();
        assert_eq!(vec![4, 1, 3, 0, 2, 5], tags);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut items = vec![4, 7, 1, 9, 3, 4, 2];
        let boundary = partition(&mut items);

        assert_eq!(3, boundary);
        assert_eq!(4, items[boundary]);
        assert!(items[..boundary].iter().all(|&x| x < 4));
        assert!(items[boundary + 1..].iter().all(|&x| x >= 4));
    }

    #[test]
    fn test_quick_sort_duplicates_and_sorted_input() {
        let mut dupes = vec![3, 3, 1, 3, 1, 2];
        quick_sort(&mut dupes);
        assert_eq!(vec![1, 1, 2, 3, 3, 3], dupes);

        let mut sorted: Vec<i32> = (0..64).collect();
        quick_sort(&mut sorted);
        assert_eq!((0..64).collect::<Vec<i32>>(), sorted);

        let mut reversed: Vec<i32> = (0..64).rev().collect();
        quick_sort(&mut reversed);
        assert_eq!((0..64).collect::<Vec<i32>>(), reversed);
    }

    #[quickcheck]
    fn merge_sort_matches_std_sort(items: Vec<i32>) -> bool {
        let mut expected = items.clone();
        expected.sort();

        let mut slots = slots_of(items);
        merge_sort(&mut slots);

        expected == unslot(slots)
    }

    #[quickcheck]
    fn quick_sort_matches_std_sort(items: Vec<i32>) -> bool {
        let mut expected = items.clone();
        expected.sort();

        let mut actual = items;
        quick_sort(&mut actual);

        expected == actual
    }

    #[quickcheck]
    fn merge_sort_is_stable(keys: Vec<u8>) -> bool {
        // narrow the key space so there are plenty of ties
        let items: Vec<Tagged> = keys
            .into_iter()
            .enumerate()
            .map(|(tag, key)| Tagged { key: key % 8, tag })
            .collect();

        let mut expected = items.clone();
        // std's sort_by is stable
        expected.sort_by(|a, b| a.key.cmp(&b.key));

        let mut slots = slots_of(items);
        merge_sort(&mut slots);
        let actual = unslot(slots);

        expected
            .iter()
            .zip(actual.iter())
            .all(|(e, a)| e.key == a.key && e.tag == a.tag)
    }
}
