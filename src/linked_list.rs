//! A doubly linked list that flattens all its nodes onto a Vec for storage.
//! Nodes point at each other by position in that Vec rather than by pointer,
//! so the list owns every node outright and there is nothing cyclic to untie
//! when it is dropped.

use std::{
    fmt,
    iter::FromIterator,
    mem,
    ops::{Index, IndexMut},
};

use crate::error::{CollectionError, Result};
use crate::sequence::Sequence;

/// Alias for the index of a node in the linked list's storage vec.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct NodeHandle(usize);

/// A node that lives in a linked list.
struct Node<T> {
    /// The value being stored. `None` once the node has been freelisted.
    value: Option<T>,

    /// The node before this one, if this isn't the head.
    prev: Option<NodeHandle>,

    /// The node after this one, if this isn't the tail.
    next: Option<NodeHandle>,
}

/// An ordered chain of nodes with O(1) access to either end and O(n)
/// positional access everywhere else.
///
/// Erased nodes go on a freelist and their slots are reused by later
/// inserts, so a list that churns around a steady size stops allocating.
/// The element held by a node is dropped the moment the node is erased.
pub struct LinkedList<T> {
    /// The nodes in the list, live and freelisted alike.
    store: Vec<Node<T>>,

    /// Entries in the store which aren't in use anymore. These will be reused.
    free: Vec<NodeHandle>,

    /// The first node in the list.
    head: Option<NodeHandle>,

    /// The last node in the list.
    tail: Option<NodeHandle>,

    /// The number of live nodes.
    len: usize,
}

/// Walks a list from head to tail.
pub struct LinkedListIter<'a, T> {
    next: Option<NodeHandle>,
    list: &'a LinkedList<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new linked list with room for `capacity` nodes before the
    /// store has to reallocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The length of this linked list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The element at the head of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.store[h.0].value.as_ref())
    }

    /// The element at the tail of the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|h| self.store[h.0].value.as_ref())
    }

    /// Pushes t onto the front of the list.
    pub fn push_front(&mut self, t: T) {
        let idx = self.alloc(Node {
            value: Some(t),
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(head) => self.store[head.0].prev = Some(idx),
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
        self.len += 1;

        #[cfg(test)]
        self.continuity_test();
    }

    /// Pushes t onto the back of the list.
    pub fn push_back(&mut self, t: T) {
        let idx = self.alloc(Node {
            value: Some(t),
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.store[tail.0].next = Some(idx),
            None => self.head = Some(idx),
        }

        self.tail = Some(idx);
        self.len += 1;

        #[cfg(test)]
        self.continuity_test();
    }

    /// Pops the front node off the list if it exists.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        self.unlink(head)
    }

    /// Pops the back node off the list if it exists.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.unlink(tail)
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.handle_at(index)
            .and_then(|h| self.store[h.0].value.as_ref())
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;

        match self.handle_at(index) {
            Some(h) => self.store[h.0]
                .value
                .as_mut()
                .ok_or(CollectionError::OutOfRange { index, len }),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Splices `elem` in so that it ends up at `index`. The walk to find the
    /// splice point starts from whichever end is closer.
    pub fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        if index == self.len {
            self.push_back(elem);
            return Ok(());
        }

        let at = self
            .handle_at(index)
            .ok_or_else(|| self.out_of_range(index))?;

        self.link_before(at, elem);

        Ok(())
    }

    /// Unlinks and returns the element at `index`.
    pub fn erase(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let node = self
            .handle_at(index)
            .ok_or_else(|| self.out_of_range(index))?;

        self.unlink(node)
            .ok_or(CollectionError::OutOfRange { index, len })
    }

    /// Whether an element equal to `elem` is in the list. Linear scan.
    pub fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|e| e == elem)
    }

    /// Clears this linked list. Does not free the underlying buffers.
    pub fn clear(&mut self) {
        self.store.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Moves the whole chain out into a new list, leaving this one empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub fn iter(&self) -> LinkedListIter<'_, T> {
        LinkedListIter {
            next: self.head,
            list: self,
        }
    }

    /// Puts `node` into a free slot of the store, or a new one at the end.
    fn alloc(&mut self, node: Node<T>) -> NodeHandle {
        // use the first available location in the storage vec, or infer what
        // the next location will be on push.
        let idx = self
            .free
            .pop()
            .unwrap_or_else(|| NodeHandle(self.store.len()));

        if self.store.len() <= idx.0 {
            self.store.push(node);
        } else {
            self.store[idx.0] = node;
        }

        idx
    }

    /// Links a new node carrying `t` into the chain just before `at`.
    fn link_before(&mut self, at: NodeHandle, t: T) {
        let prev = self.store[at.0].prev;
        let idx = self.alloc(Node {
            value: Some(t),
            prev,
            next: Some(at),
        });

        self.store[at.0].prev = Some(idx);

        match prev {
            Some(prev) => self.store[prev.0].next = Some(idx),
            None => self.head = Some(idx),
        }

        self.len += 1;

        #[cfg(test)]
        self.continuity_test();
    }

    /// Removes an arbitrary node from the chain, freelists its slot and hands
    /// back its value.
    fn unlink(&mut self, node: NodeHandle) -> Option<T> {
        // link prev to next and next to prev so node doesn't exist in the
        // chain anymore
        let prev = self.store[node.0].prev;
        let next = self.store[node.0].next;

        match prev {
            Some(prev) => self.store[prev.0].next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.store[next.0].prev = prev,
            None => self.tail = prev,
        }

        let removed = &mut self.store[node.0];
        removed.prev = None;
        removed.next = None;
        let value = removed.value.take();

        self.free.push(node);
        self.len -= 1;

        #[cfg(test)]
        self.continuity_test();

        value
    }

    /// Finds the node at `index`, walking in from the nearer end.
    fn handle_at(&self, index: usize) -> Option<NodeHandle> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut node = self.head?;
            for _ in 0..index {
                node = self.store[node.0].next?;
            }
            Some(node)
        } else {
            let mut node = self.tail?;
            for _ in 0..(self.len - 1 - index) {
                node = self.store[node.0].prev?;
            }
            Some(node)
        }
    }

    fn out_of_range(&self, index: usize) -> CollectionError {
        log::debug!(
            "index {} out of range for list of length {}",
            index,
            self.len
        );

        CollectionError::OutOfRange {
            index,
            len: self.len,
        }
    }

    #[cfg(test)]
    fn continuity_test(&self) {
        // walk forwards, checking every back link on the way
        let mut count = 0;
        let mut prev = None;
        let mut idx = self.head;
        while let Some(node) = idx {
            count += 1;
            assert!(count <= self.len, "forward walk overran the list");
            assert_eq!(prev, self.store[node.0].prev);
            assert!(self.store[node.0].value.is_some());
            prev = idx;
            idx = self.store[node.0].next;
        }
        assert_eq!(self.len, count);
        assert_eq!(self.tail, prev);

        // then backwards
        count = 0;
        idx = self.tail;
        while let Some(node) = idx {
            count += 1;
            assert!(count <= self.len, "reverse walk overran the list");
            idx = self.store[node.0].prev;
        }
        assert_eq!(self.len, count);

        assert_eq!(self.len, self.store.len() - self.free.len());
    }
}

impl<T> Sequence<T> for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        LinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        LinkedList::get_mut(self, index)
    }

    fn insert(&mut self, elem: T, index: usize) -> Result<()> {
        LinkedList::insert(self, elem, index)
    }

    fn erase(&mut self, index: usize) -> Result<T> {
        LinkedList::erase(self, index)
    }

    fn contains(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        LinkedList::contains(self, elem)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }
}

impl<'a, T> Iterator for LinkedListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = &list.store[self.next?.0];
        self.next = node.next;
        node.value.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuilds the chain node by node, so the copy comes out compacted with no
/// freelisted slots.
impl<T> Clone for LinkedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);

        for elem in self.iter() {
            copy.push_back(elem.clone());
        }

        copy
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push_back(elem);
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `a, b, c`.
impl<T> fmt::Display for LinkedList<T>
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
