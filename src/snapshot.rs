//! Non-destructive heap traversal
//!
//! [`Snapshot`] yields a heap's elements in extraction order (root first)
//! without touching the heap it was taken from. Creating one copies the
//! source's storage, which is already heap-ordered, into a private heap that
//! the snapshot then drains. Mutating the source afterwards has no effect on
//! a running traversal, and two snapshots of the same heap never share state.
//!
//! ```rust
//! use rust_array_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::max();
//! heap.extend([2, 9, 4]);
//!
//! let mut snapshot = heap.iter();
//! assert_eq!(snapshot.next(), Some(9));
//! heap.insert(100);
//! assert_eq!(snapshot.collect::<Vec<_>>(), vec![4, 2]);
//!
//! // the source heap is untouched
//! assert_eq!(heap.len(), 4);
//! ```

use std::iter::FusedIterator;

use crate::binary::BinaryHeap;
use crate::compare::Compare;

/// Extraction-order iterator over a private copy of a [`BinaryHeap`]
///
/// Created by [`BinaryHeap::iter`]. Cloning a snapshot forks the traversal
/// at its current position.
#[derive(Debug, Clone)]
pub struct Snapshot<T, C> {
    copy: BinaryHeap<T, C>,
}

impl<T: Clone, C: Compare<T> + Clone> Snapshot<T, C> {
    pub(crate) fn new(source: &BinaryHeap<T, C>) -> Self {
        Self {
            copy: BinaryHeap::from_heap_ordered(
                source.variant(),
                source.storage().to_vec(),
                source.comparator().clone(),
            ),
        }
    }
}

impl<T, C: Compare<T>> Snapshot<T, C> {
    /// Returns the next element without advancing
    pub fn peek(&self) -> Option<&T> {
        self.copy.peek_root().ok()
    }
}

impl<T, C: Compare<T>> Iterator for Snapshot<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.copy.extract_root().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.copy.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for Snapshot<T, C> {}

impl<T, C: Compare<T>> FusedIterator for Snapshot<T, C> {}
