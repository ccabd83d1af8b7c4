//! Stress tests that push the containers through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases in the sift loops and the capacity policy.

use growable_heap::{BinaryHeap, CompareResult, Comparator, GrowableArray, HeapConfig, Polarity};

fn by_value(a: &i64, b: &i64) -> CompareResult {
    CompareResult::from(a.cmp(b))
}

/// Deterministic pseudo-random sequence (xorshift) so runs are reproducible
fn pseudo_random(seed: u64, count: usize) -> Vec<i64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 10_000) as i64
        })
        .collect()
}

fn drain_is_sorted<C: Comparator<i64>>(mut heap: BinaryHeap<i64, C>, polarity: Polarity) {
    let mut last: Option<i64> = None;
    while let Ok(value) = heap.pop() {
        if let Some(previous) = last {
            match polarity {
                Polarity::Min => assert!(previous <= value, "{previous} popped before {value}"),
                Polarity::Max => assert!(previous >= value, "{previous} popped before {value}"),
            }
        }
        last = Some(value);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_massive_operations() {
    for polarity in [Polarity::Min, Polarity::Max] {
        let mut heap = BinaryHeap::new(16, polarity, by_value).unwrap();
        for value in pseudo_random(0x9E37_79B9, 10_000) {
            heap.push(value).unwrap();
        }
        assert_eq!(heap.len(), 10_000);
        assert!(heap.is_heap_ordered());
        drain_is_sorted(heap, polarity);
    }
}

#[test]
fn test_ascending_and_descending_insertion() {
    let mut ascending = BinaryHeap::new(8, Polarity::Min, by_value).unwrap();
    let mut descending = BinaryHeap::new(8, Polarity::Min, by_value).unwrap();
    for i in 0..2_000i64 {
        ascending.push(i).unwrap();
        descending.push(1_999 - i).unwrap();
    }

    for i in 0..2_000 {
        assert_eq!(ascending.pop(), Ok(i));
        assert_eq!(descending.pop(), Ok(i));
    }
}

#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::new(4, Polarity::Max, by_value).unwrap();
    let values = pseudo_random(42, 3_000);

    for pair in values.chunks(3) {
        for &value in pair {
            heap.push(value).unwrap();
        }
        heap.pop().unwrap();
        assert!(heap.is_heap_ordered());
    }
    assert_eq!(heap.len(), 2_000);
    drain_is_sorted(heap, Polarity::Max);
}

#[test]
fn test_all_equal_elements() {
    let mut heap = BinaryHeap::new(4, Polarity::Min, by_value).unwrap();
    for _ in 0..1_000 {
        heap.push(7i64).unwrap();
    }
    for _ in 0..1_000 {
        assert_eq!(heap.pop(), Ok(7));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_capacity_returns_to_original_after_drain() {
    let config = HeapConfig::new(10, Polarity::Min).with_growth_block(3);
    let mut heap = BinaryHeap::with_config(config, by_value).unwrap();
    for value in pseudo_random(7, 5_000) {
        heap.push(value).unwrap();
    }
    assert!(heap.capacity() >= 5_000);

    while heap.pop().is_ok() {
        assert!(heap.capacity() >= 10);
    }
    assert!(heap.capacity() < 10 + 2 * 3);
}

#[test]
fn test_array_churn_at_block_boundary() {
    let mut array = GrowableArray::new(4, 4).unwrap();
    for i in 0..8 {
        array.append(i).unwrap();
    }
    let capacity = array.capacity();

    for i in 0..10_000 {
        array.pop_back().unwrap();
        array.append(i).unwrap();
        assert_eq!(array.capacity(), capacity);
    }
}
