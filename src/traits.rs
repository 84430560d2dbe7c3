//! Common traits for heap data structures
//!
//! This module provides the priority-queue contract shared by the heaps in
//! this crate and the error taxonomy their fallible operations report.
//!
//! Unlike `std::collections::BinaryHeap`, whose `pop` returns `Option`,
//! [`Heap::extract_root`] and [`Heap::peek_root`] report an empty heap as a
//! [`HeapError::EmptyCollection`] so that callers handle it explicitly.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The heap holds no elements
    #[error("priority queue is empty")]
    EmptyCollection,
    /// A constructor or configuration value was rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl HeapError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        HeapError::InvalidArgument(msg.into())
    }
}

/// Base trait for single-ended priority queues
///
/// The element at the root is the one that *dominates* every other element:
/// the greatest for a max-heap, the least for a min-heap, under the heap's
/// ordering.
///
/// # Example
///
/// ```rust
/// use rust_array_heaps::Heap;
/// use rust_array_heaps::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::max();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek_root(), Ok(&3));
/// assert_eq!(heap.extract_root(), Ok(3));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn insert(&mut self, value: T);

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_root(&self) -> Result<&T, HeapError>;

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn extract_root(&mut self) -> Result<T, HeapError>;
}
