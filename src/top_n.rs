//! Bounded top-N selection
//!
//! Keeps the `n` largest (or smallest) elements of a stream without sorting
//! the stream. A heap of the *opposite* variant holds the candidates: to
//! keep the largest, a min-heap, whose root is the weakest candidate and the
//! first to be evicted once more than `n` are held.
//!
//! Each streamed element costs O(log n) and the working set never exceeds
//! `n + 1` elements, against O(m log m) time and O(m) memory to sort all
//! `m` elements.
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::top_n::select_top_n;
//!
//! let stream = [5, 4, 6, 3, 7, 2, 8, 1, 9, 0];
//! assert_eq!(select_top_n(stream, 3, false), vec![0, 1, 2]);
//! assert_eq!(select_top_n(stream, 5, true), vec![9, 8, 7, 6, 5]);
//! ```

use log::debug;

use crate::binary::BinaryHeap;
use crate::compare::{Compare, Natural, Variant};

/// Upper bound on the slots reserved up front; larger selections grow on
/// demand
const MAX_PREALLOC: usize = 1024;

/// Returns the `n` most extreme elements of `stream`
///
/// With `keep_largest` the result is in descending order, otherwise
/// ascending, so the most extreme element always comes first. The result
/// holds `min(n, elements seen)` elements. The relative order of equal
/// elements is unspecified.
///
/// The stream is consumed exactly once, even when `n` is zero.
pub fn select_top_n<T, I>(stream: I, n: usize, keep_largest: bool) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    select_top_n_by(stream, n, keep_largest, Natural)
}

/// Like [`select_top_n`], ordering elements with `order`
pub fn select_top_n_by<T, I, C>(stream: I, n: usize, keep_largest: bool, order: C) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    C: Compare<T>,
{
    let mut selector = TopNSelector::with_comparator(n, keep_largest, order);
    selector.extend(stream);
    selector.into_vec()
}

/// Streaming form of [`select_top_n`]
///
/// Elements are fed one at a time with [`push`](TopNSelector::push) and the
/// kept elements are drained with [`into_vec`](TopNSelector::into_vec).
///
/// ```rust
/// use rust_array_heaps::top_n::TopNSelector;
///
/// let mut selector = TopNSelector::new(2, true);
/// for word in "the quick brown fox".split(' ') {
///     selector.push(word);
/// }
/// assert_eq!(selector.into_vec(), vec!["the", "quick"]);
/// ```
#[derive(Debug, Clone)]
pub struct TopNSelector<T, C = Natural> {
    n: usize,
    keep_largest: bool,
    seen: u64,
    heap: BinaryHeap<T, C>,
}

impl<T: Ord> TopNSelector<T, Natural> {
    /// Creates a selector keeping the `n` largest (or smallest) elements
    pub fn new(n: usize, keep_largest: bool) -> Self {
        Self::with_comparator(n, keep_largest, Natural)
    }
}

impl<T, C: Compare<T>> TopNSelector<T, C> {
    /// Creates a selector that ranks elements with `order`
    pub fn with_comparator(n: usize, keep_largest: bool, order: C) -> Self {
        let kept = if keep_largest {
            Variant::MaxAtRoot
        } else {
            Variant::MinAtRoot
        };
        // the root holds the weakest candidate
        let variant = kept.opposite();
        let prealloc = n.saturating_add(1).min(MAX_PREALLOC);
        Self {
            n,
            keep_largest,
            seen: 0,
            heap: BinaryHeap::with_capacity_and_comparator(variant, prealloc, order),
        }
    }

    /// Offers `value` to the selector
    ///
    /// If more than `n` elements are then held, the weakest one is dropped.
    pub fn push(&mut self, value: T) {
        self.seen += 1;
        self.heap.insert(value);
        if self.heap.len() > self.n {
            // len > n >= 0, so the heap cannot be empty
            let _ = self.heap.extract_root();
        }
    }

    /// Returns the target result size
    pub fn capacity(&self) -> usize {
        self.n
    }

    /// Returns the number of elements currently kept
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing is kept
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements offered so far
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Returns the weakest element kept, the next to be evicted
    pub fn threshold(&self) -> Option<&T> {
        self.heap.peek_root().ok()
    }

    /// Drains the kept elements, most extreme first
    pub fn into_vec(self) -> Vec<T> {
        let Self {
            n,
            keep_largest,
            seen,
            heap,
        } = self;
        // extraction order is weakest first
        let mut out = heap.into_ordered_vec();
        out.reverse();
        debug!(
            "top-{} selection ({}) kept {} of {} elements",
            n,
            if keep_largest { "largest" } else { "smallest" },
            out.len(),
            seen
        );
        out
    }
}

impl<T, C: Compare<T>> Extend<T> for TopNSelector<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
