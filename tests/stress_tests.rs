//! Extreme stress tests that really push the heaps to their limits
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases in resizing and verify correctness under load.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rust_array_heaps::binary::BinaryHeap;
use rust_array_heaps::top_n::{select_top_n, TopNSelector};
use rust_array_heaps::{HeapConfig, Variant};

/// Counts occurrences so lost or duplicated elements show up
fn multiset(values: impl IntoIterator<Item = i64>) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Test massive numbers of inserts and extractions
#[test]
fn test_massive_operations() {
    let mut heap = BinaryHeap::min();

    for i in 0..10_000 {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 10_000);
    assert!(heap.is_valid_heap());

    for i in 0..10_000 {
        assert_eq!(heap.extract_root(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Grow through several doublings, then shrink, checking every step
#[test]
fn test_resize_round_trip() {
    let mut heap = BinaryHeap::max();
    let mut capacities = vec![heap.capacity()];
    let values: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1009).collect();

    for &v in &values {
        heap.insert(v);
        assert!(heap.is_valid_heap());
        if capacities.last() != Some(&heap.capacity()) {
            capacities.push(heap.capacity());
        }
    }
    let grows = capacities.len() - 1;
    assert!(grows >= 2, "expected at least two growth events, saw {grows}");
    let peak = heap.capacity();

    let mut extracted = Vec::new();
    let mut shrinks = 0;
    while heap.len() > 10 {
        let before = heap.capacity();
        extracted.push(heap.extract_root().unwrap());
        assert!(heap.is_valid_heap());
        if heap.capacity() < before {
            assert_eq!(heap.capacity(), before / 2);
            assert_eq!(heap.len(), before / 4);
            shrinks += 1;
        }
    }
    assert!(shrinks >= 1, "expected at least one shrink event");
    assert!(heap.capacity() < peak);

    // nothing lost, nothing duplicated
    let remaining = heap.into_ordered_vec();
    assert!(extracted.windows(2).all(|w| w[0] >= w[1]));
    assert!(extracted.last() >= remaining.first());
    assert_eq!(
        multiset(extracted.into_iter().chain(remaining)),
        multiset(values)
    );
}

/// Alternating traffic right at a shrink boundary keeps the heap valid
#[test]
fn test_boundary_thrash() {
    let mut heap = BinaryHeap::min();
    heap.extend(0..64);
    for _ in 0..48 {
        heap.extract_root().unwrap();
    }
    let settled = heap.capacity();

    for i in 0..1000 {
        heap.insert(i);
        heap.extract_root().unwrap();
        assert!(heap.is_valid_heap());
        assert!(heap.capacity() >= heap.len());
    }
    assert!(heap.capacity() <= settled * 2);
}

/// Configured minimum capacity is honored through heavy churn
#[test]
fn test_configured_minimum_under_churn() {
    let config = HeapConfig::new(8, 32).unwrap();
    let mut heap = BinaryHeap::from_config(Variant::MaxAtRoot, &config).unwrap();
    assert_eq!(heap.capacity(), 32);

    for round in 0..10 {
        heap.extend((0..500).map(|i| i * round));
        while !heap.is_empty() {
            heap.extract_root().unwrap();
            assert!(heap.capacity() >= 32);
        }
    }
}

/// Test bulk loading a large input
#[test]
fn test_large_bulk_load() {
    let values: Vec<i64> = (0..50_000).map(|i| (i * 104_729) % 50_021).collect();
    let heap = BinaryHeap::from_vec(Variant::MinAtRoot, values.clone());
    assert!(heap.is_valid_heap());

    let drained = heap.into_ordered_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(multiset(drained), multiset(values));
}

/// Test top-N over a long stream
#[test]
fn test_top_n_long_stream() {
    let stream = (0..200_000i64).map(|i| (i * 7_919) % 200_003);
    let top = select_top_n(stream, 10, true);
    assert_eq!(top.len(), 10);
    assert!(top.windows(2).all(|w| w[0] >= w[1]));

    let mut all: Vec<i64> = (0..200_000i64).map(|i| (i * 7_919) % 200_003).collect();
    all.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(top, all[..10]);
}

/// Mutators serialized behind a lock keep the heap consistent
#[test]
fn test_shared_behind_mutex() {
    let heap = Arc::new(Mutex::new(BinaryHeap::max()));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let heap = Arc::clone(&heap);
            thread::spawn(move || {
                for i in 0..1000 {
                    let mut guard = heap.lock();
                    guard.insert(t * 1000 + i);
                    if i % 4 == 0 {
                        guard.extract_root().unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let heap = heap.lock();
    assert_eq!(heap.len(), 4 * 750);
    assert!(heap.is_valid_heap());
}

/// A snapshot taken under the lock drains on another thread while writers
/// continue
#[test]
fn test_snapshot_across_threads() {
    let heap = Arc::new(Mutex::new(BinaryHeap::from_vec(
        Variant::MinAtRoot,
        (0..500).collect::<Vec<i64>>(),
    )));
    let snapshot = heap.lock().iter();

    let writer = {
        let heap = Arc::clone(&heap);
        thread::spawn(move || {
            for i in 0..500 {
                let mut guard = heap.lock();
                guard.insert(-i);
                guard.extract_root().unwrap();
            }
        })
    };
    let reader = thread::spawn(move || snapshot.collect::<Vec<_>>());

    writer.join().unwrap();
    assert_eq!(reader.join().unwrap(), (0..500).collect::<Vec<i64>>());
}

/// A streaming selector fed from several producers through a lock
#[test]
fn test_selector_behind_mutex() {
    let selector = Arc::new(Mutex::new(TopNSelector::new(5, false)));

    let handles: Vec<_> = (0..4i64)
        .map(|t| {
            let selector = Arc::clone(&selector);
            thread::spawn(move || {
                for i in 0..250 {
                    selector.lock().push(t * 250 + i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let selector = Arc::try_unwrap(selector).ok().unwrap().into_inner();
    assert_eq!(selector.seen(), 1000);
    assert_eq!(selector.into_vec(), vec![0, 1, 2, 3, 4]);
}
