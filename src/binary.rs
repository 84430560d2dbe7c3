//! Array-backed binary heap
//!
//! A binary heap stored in a contiguous `Vec<T>`. The node at index `k` has
//! its children at `2k + 1` and `2k + 2` and its parent at `(k - 1) / 2`.
//! The heap keeps either the greatest ([`Variant::MaxAtRoot`]) or the least
//! ([`Variant::MinAtRoot`]) element at the root under its comparator.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity         |
//! |----------------|--------------------|
//! | `insert`       | O(log n) amortized |
//! | `extract_root` | O(log n) amortized |
//! | `peek_root`    | O(1)               |
//! | `from_vec`     | O(n)               |
//! | `iter`         | O(n) to start      |
//!
//! # Resizing
//!
//! The heap tracks a logical capacity. Inserting into a full heap doubles it.
//! After an extraction leaves the heap exactly one quarter full, the capacity
//! halves, never below the heap's minimum capacity. Shrinking at one quarter
//! rather than one half keeps alternating insert/extract traffic at a
//! boundary from reallocating on every call.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::min();
//! heap.insert(3);
//! heap.insert(1);
//! heap.insert(2);
//!
//! assert_eq!(heap.peek_root(), Ok(&1));
//! assert_eq!(heap.extract_root(), Ok(1));
//! assert_eq!(heap.extract_root(), Ok(2));
//! assert_eq!(heap.extract_root(), Ok(3));
//! assert!(heap.extract_root().is_err());
//! ```

use std::fmt;

use log::{debug, trace};

use crate::compare::{Compare, Natural, Variant};
use crate::config::HeapConfig;
use crate::snapshot::Snapshot;
use crate::traits::{Heap, HeapError};

/// Capacity used when none is requested
pub const DEFAULT_MIN_CAPACITY: usize = 1;

/// An array-backed binary heap with a pluggable comparator
///
/// `C` defaults to [`Natural`], the element type's `Ord`. Any
/// `Fn(&T, &T) -> Ordering` can be injected instead with
/// [`BinaryHeap::with_comparator`].
///
/// The heap is not internally synchronized. Share it across threads behind a
/// lock that guards every call to `insert` and `extract_root`.
#[derive(Clone)]
pub struct BinaryHeap<T, C = Natural> {
    /// Heap-ordered elements; `data[0]` is the root
    data: Vec<T>,
    /// Logical slot count; `data.len() <= capacity`
    capacity: usize,
    /// Shrinking never goes below this
    min_capacity: usize,
    variant: Variant,
    order: C,
}

impl<T: Ord> BinaryHeap<T, Natural> {
    /// Creates an empty heap ordered by `T`'s `Ord`
    pub fn new(variant: Variant) -> Self {
        Self::with_comparator(variant, Natural)
    }

    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(Variant::MaxAtRoot)
    }

    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(Variant::MinAtRoot)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Panics
    /// Panics if the allocation fails, like `Vec::with_capacity`. Use
    /// [`BinaryHeap::try_with_capacity`] to get an error instead.
    pub fn with_capacity(variant: Variant, capacity: usize) -> Self {
        Self::with_capacity_and_comparator(variant, capacity, Natural)
    }

    /// Creates an empty heap with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the capacity cannot be
    /// allocated.
    pub fn try_with_capacity(variant: Variant, capacity: usize) -> Result<Self, HeapError> {
        Self::try_with_capacity_and_comparator(variant, capacity, Natural)
    }

    /// Builds a heap from `items` in linear time
    pub fn from_vec(variant: Variant, items: Vec<T>) -> Self {
        Self::from_vec_with_comparator(variant, items, Natural)
    }

    /// Creates an empty heap sized by `config`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the configured capacity
    /// cannot be allocated.
    pub fn from_config(variant: Variant, config: &HeapConfig) -> Result<Self, HeapError> {
        Self::from_config_with_comparator(variant, config, Natural)
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `order`
    pub fn with_comparator(variant: Variant, order: C) -> Self {
        Self::with_capacity_and_comparator(variant, DEFAULT_MIN_CAPACITY, order)
    }

    /// Creates an empty heap ordered by `order` with room for `capacity`
    /// elements
    ///
    /// # Panics
    /// Panics if the allocation fails, like `Vec::with_capacity`.
    pub fn with_capacity_and_comparator(variant: Variant, capacity: usize, order: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity: capacity.max(DEFAULT_MIN_CAPACITY),
            min_capacity: DEFAULT_MIN_CAPACITY,
            variant,
            order,
        }
    }

    /// Fallible form of [`BinaryHeap::with_capacity_and_comparator`]
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the capacity cannot be
    /// allocated.
    pub fn try_with_capacity_and_comparator(
        variant: Variant,
        capacity: usize,
        order: C,
    ) -> Result<Self, HeapError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|e| HeapError::invalid(format!("capacity {capacity}: {e}")))?;
        Ok(Self {
            data,
            capacity: capacity.max(DEFAULT_MIN_CAPACITY),
            min_capacity: DEFAULT_MIN_CAPACITY,
            variant,
            order,
        })
    }

    /// Creates an empty heap ordered by `order`, sized by `config`
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if the configured capacity
    /// cannot be allocated.
    pub fn from_config_with_comparator(
        variant: Variant,
        config: &HeapConfig,
        order: C,
    ) -> Result<Self, HeapError> {
        let mut heap =
            Self::try_with_capacity_and_comparator(variant, config.initial_capacity(), order)?;
        heap.min_capacity = config.min_capacity();
        if heap.min_capacity > heap.capacity {
            heap.resize(heap.min_capacity);
        }
        Ok(heap)
    }

    /// Builds a heap ordered by `order` from `items` in linear time
    ///
    /// The items are placed into storage as-is and every internal node is
    /// sunk, from the last parent back to the root.
    pub fn from_vec_with_comparator(variant: Variant, items: Vec<T>, order: C) -> Self {
        let capacity = items.len().max(DEFAULT_MIN_CAPACITY);
        let mut heap = Self {
            data: items,
            capacity,
            min_capacity: DEFAULT_MIN_CAPACITY,
            variant,
            order,
        };
        heap.heapify();
        debug!("bulk loaded {} elements into {:?} heap", heap.len(), variant);
        heap
    }

    pub(crate) fn from_heap_ordered(variant: Variant, data: Vec<T>, order: C) -> Self {
        let capacity = data.len().max(DEFAULT_MIN_CAPACITY);
        Self {
            data,
            capacity,
            // never shrinks while draining
            min_capacity: capacity,
            variant,
            order,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold before growing
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns which extreme the root holds
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the heap's comparator
    pub fn comparator(&self) -> &C {
        &self.order
    }

    /// Inserts `value`, growing storage first if the heap is full
    pub fn insert(&mut self, value: T) {
        if self.data.len() == self.capacity {
            let grown = self.capacity.saturating_mul(2).max(self.min_capacity);
            self.resize(grown);
        }
        self.data.push(value);
        self.swim(self.data.len() - 1);
    }

    /// Returns the root element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    pub fn peek_root(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyCollection)
    }

    /// Removes and returns the root element
    ///
    /// The last element takes the root's slot and sinks into place. The
    /// storage may shrink afterwards.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyCollection`] if the heap is empty.
    pub fn extract_root(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyCollection);
        }

        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sink(0);
        }

        let len = self.data.len();
        if len > 0 && len == self.capacity / 4 && self.capacity / 2 >= self.min_capacity {
            self.resize(self.capacity / 2);
        }

        Ok(root)
    }

    /// Removes every element, keeping the current capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning its elements in extraction order
    pub fn into_ordered_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_root() {
            out.push(value);
        }
        out
    }

    /// Consumes the heap, returning its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Checks the heap property over the whole tree
    ///
    /// Walks the tree recursively from the root. Meant for tests and debug
    /// assertions.
    pub fn is_valid_heap(&self) -> bool {
        self.is_valid_at(0)
    }

    fn is_valid_at(&self, k: usize) -> bool {
        if k >= self.data.len() {
            return true;
        }
        let left = 2 * k + 1;
        let right = left + 1;
        if left < self.data.len() && self.dominates(left, k) {
            return false;
        }
        if right < self.data.len() && self.dominates(right, k) {
            return false;
        }
        self.is_valid_at(left) && self.is_valid_at(right)
    }

    /// Returns an extraction-order traversal of a private copy of the heap
    ///
    /// Later changes to this heap are not observed by the traversal, and
    /// every call starts an independent one.
    pub fn iter(&self) -> Snapshot<T, C>
    where
        T: Clone,
        C: Clone,
    {
        Snapshot::new(self)
    }

    pub(crate) fn storage(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn dominates(&self, a: usize, b: usize) -> bool {
        self.variant
            .dominates(&self.order, &self.data[a], &self.data[b])
    }

    fn heapify(&mut self) {
        for k in (0..self.data.len() / 2).rev() {
            self.sink(k);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.data.len());
        trace!(
            "resizing {:?} heap from {} to {} slots ({} live)",
            self.variant,
            self.capacity,
            capacity,
            self.data.len()
        );
        if capacity > self.data.capacity() {
            self.data.reserve_exact(capacity - self.data.len());
        } else {
            self.data.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    /// Move element at index up while it dominates its parent
    fn swim(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.dominates(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child dominates it
    fn sink(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.dominates(right, left) {
                child = right;
            }

            if self.dominates(child, index) {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, value: T) {
        BinaryHeap::insert(self, value)
    }

    fn peek_root(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek_root(self)
    }

    fn extract_root(&mut self) -> Result<T, HeapError> {
        BinaryHeap::extract_root(self)
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Clone, C: Compare<T> + Clone> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = Snapshot<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("variant", &self.variant)
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}
