//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify that the
//! heap and array invariants hold after every single operation, checking the
//! containers against a plain `Vec` model.

use proptest::prelude::*;

use growable_heap::{BinaryHeap, CompareResult, Error, GrowableArray, HeapConfig, Polarity};

type IntHeap = BinaryHeap<i32, fn(&i32, &i32) -> CompareResult>;

fn by_value(a: &i32, b: &i32) -> CompareResult {
    CompareResult::from(a.cmp(b))
}

fn polarity_strategy() -> impl Strategy<Value = Polarity> {
    prop_oneof![Just(Polarity::Min), Just(Polarity::Max)]
}

/// The element a heap of `polarity` must hand out next
fn most_extreme(model: &[i32], polarity: Polarity) -> Option<i32> {
    match polarity {
        Polarity::Min => model.iter().min().copied(),
        Polarity::Max => model.iter().max().copied(),
    }
}

/// Push/pop sequences keep the heap order, the size law and extremal pops
fn test_push_pop_invariant(
    polarity: Polarity,
    growth_block: usize,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let config = HeapConfig::new(4, polarity).with_growth_block(growth_block);
    let mut heap = IntHeap::with_config(config, by_value).unwrap();
    let mut model: Vec<i32> = Vec::new();
    let (mut pushes, mut pops) = (0usize, 0usize);

    for (should_pop, value) in ops {
        if should_pop {
            match heap.pop() {
                Ok(top) => {
                    prop_assert_eq!(Some(top), most_extreme(&model, polarity));
                    let pos = model.iter().position(|&v| v == top).unwrap();
                    model.swap_remove(pos);
                    pops += 1;
                }
                Err(err) => {
                    prop_assert_eq!(err, Error::OutOfBounds);
                    prop_assert!(model.is_empty());
                }
            }
        } else {
            heap.push(value).unwrap();
            model.push(value);
            pushes += 1;
        }

        prop_assert!(heap.is_heap_ordered());
        prop_assert_eq!(heap.len(), pushes - pops);
        prop_assert!(heap.capacity() >= 4);
        prop_assert_eq!(heap.peek().copied(), most_extreme(&model, polarity));
    }

    Ok(())
}

/// Pushing n elements then popping n times sorts them
fn test_heap_sort_law(polarity: Polarity, values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = IntHeap::new(1, polarity, by_value).unwrap();
    heap.extend_from(values.iter().copied()).unwrap();

    let sorted = heap.into_sorted_vec();
    let mut expected = values;
    expected.sort_unstable();
    if polarity == Polarity::Max {
        expected.reverse();
    }
    prop_assert_eq!(sorted, expected);

    Ok(())
}

/// Peek never changes size or capacity
fn test_peek_idempotent(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = IntHeap::new(2, Polarity::Max, by_value).unwrap();
    heap.extend_from(values).unwrap();

    let (len, capacity) = (heap.len(), heap.capacity());
    let first = heap.peek().copied();
    for _ in 0..3 {
        prop_assert_eq!(heap.peek().copied(), first);
        prop_assert_eq!(heap.len(), len);
        prop_assert_eq!(heap.capacity(), capacity);
    }

    Ok(())
}

/// Random append/pop sequences match a `Vec` model and respect the capacity policy
fn test_array_model(
    initial_capacity: usize,
    growth_block: usize,
    ops: Vec<(u8, i32)>,
) -> Result<(), TestCaseError> {
    let mut array = GrowableArray::new(initial_capacity, growth_block).unwrap();
    let mut model: Vec<i32> = Vec::new();

    for (op, value) in ops {
        let capacity_before = array.capacity();
        match op % 3 {
            0 => {
                let result = array.append(value);
                if model.len() == capacity_before && growth_block == 0 {
                    prop_assert_eq!(result, Err(Error::Overflow));
                    prop_assert_eq!(array.capacity(), capacity_before);
                } else {
                    prop_assert!(result.is_ok());
                    model.push(value);
                    if capacity_before == model.len() - 1 {
                        prop_assert_eq!(array.capacity(), capacity_before + growth_block);
                    }
                }
            }
            1 => {
                let expected = model.pop().ok_or(Error::Underflow);
                prop_assert_eq!(array.pop_back(), expected);
                if expected.is_ok() {
                    let shrank = capacity_before - array.capacity();
                    prop_assert!(shrank == 0 || shrank == growth_block);
                }
            }
            _ => {
                if !model.is_empty() {
                    let index = value.unsigned_abs() as usize % model.len();
                    let previous = array.set(index, value).unwrap();
                    prop_assert_eq!(previous, model[index]);
                    model[index] = value;
                }
            }
        }

        prop_assert_eq!(array.as_slice(), model.as_slice());
        prop_assert!(array.len() <= array.capacity());
        prop_assert!(array.capacity() >= initial_capacity);
    }

    Ok(())
}

proptest! {
    #[test]
    fn heap_push_pop_invariant(
        polarity in polarity_strategy(),
        growth_block in 1usize..6,
        ops in prop::collection::vec((any::<bool>(), -50i32..50), 0..200)
    ) {
        test_push_pop_invariant(polarity, growth_block, ops)?;
    }

    #[test]
    fn heap_sort_law(
        polarity in polarity_strategy(),
        values in prop::collection::vec(any::<i32>(), 0..200)
    ) {
        test_heap_sort_law(polarity, values)?;
    }

    #[test]
    fn heap_peek_idempotent(values in prop::collection::vec(-100i32..100, 0..50)) {
        test_peek_idempotent(values)?;
    }

    #[test]
    fn array_matches_vec_model(
        initial_capacity in 1usize..8,
        growth_block in 0usize..4,
        ops in prop::collection::vec((0u8..3, any::<i32>()), 0..200)
    ) {
        test_array_model(initial_capacity, growth_block, ops)?;
    }
}
