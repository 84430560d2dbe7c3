//! Array-Backed Heaps for Rust
//!
//! This crate provides an array-backed binary heap priority queue and a
//! bounded top-N selector built on it.
//!
//! # Features
//!
//! - **Binary Heap**: max-at-root or min-at-root, natural or injected ordering;
//!   O(log n) amortized insert and extract, O(1) peek, O(n) bulk load
//! - **Snapshots**: extraction-order traversal of a private copy, unaffected by
//!   later changes to the heap
//! - **Top-N Selection**: the N largest or smallest elements of a stream in
//!   O(m log N) time and O(N) memory
//! - **Configuration**: heap sizing loaded from TOML (`serde` feature)
//!
//! # Example
//!
//! ```rust
//! use rust_array_heaps::binary::BinaryHeap;
//! use rust_array_heaps::top_n::select_top_n;
//! use rust_array_heaps::Variant;
//!
//! let mut heap = BinaryHeap::from_vec(Variant::MaxAtRoot, vec![4, 9, 1]);
//! heap.insert(7);
//! assert_eq!(heap.extract_root(), Ok(9));
//! assert!(heap.is_valid_heap());
//!
//! assert_eq!(select_top_n([4, 9, 1, 7], 2, false), vec![1, 4]);
//! ```

pub mod binary;
pub mod compare;
pub mod config;
pub mod snapshot;
pub mod top_n;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use compare::{Compare, Natural, Variant};
pub use config::HeapConfig;
pub use top_n::{select_top_n, select_top_n_by, TopNSelector};
pub use traits::{Heap, HeapError};
