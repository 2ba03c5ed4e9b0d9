//! A handful of generic collections built from the ground up: two sequences
//! and two maps, each pair sharing a common trait.
//!
//! * [`DynamicArray`] is a contiguous, growable array with merge sort and
//!   quick sort built in.
//! * [`LinkedList`] is a doubly linked list with cheap access to both ends.
//! * [`OrderedMap`] keeps its pairs sorted in a `DynamicArray` and binary
//!   searches them.
//! * [`LinearMap`] keeps its pairs in insertion order in a `LinkedList` and
//!   scans them.
//!
//! ```rust
//! use mysterious_collections::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.insert(3, "c").unwrap();
//! map.insert(1, "a").unwrap();
//! map.insert(2, "b").unwrap();
//!
//! assert_eq!("1, 2, 3", map.sorted_keys().to_string());
//! assert_eq!(Ok(&"b"), map.get(&2));
//! ```
//!
//! Nothing in here is thread safe; every collection expects a single owner.

mod dynamic_array;
mod error;
mod linear_map;
mod linked_list;
mod map;
mod ordered_map;
mod sequence;
mod sort;

pub use dynamic_array::{DynamicArray, SortStrategy};
pub use error::{CollectionError, Result};
pub use linear_map::LinearMap;
pub use linked_list::{LinkedList, LinkedListIter};
pub use map::Map;
pub use ordered_map::OrderedMap;
pub use sequence::Sequence;
