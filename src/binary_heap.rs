//! Binary Heap implementation
//!
//! A comparator-driven binary heap stored level-order in a single
//! [`GrowableArray`]: the root sits at index 0, the children of index `i` at
//! `2i + 1` and `2i + 2`, and the parent of `i > 0` at `(i - 1) / 2`. The
//! storage is always dense, so the tree is complete and its height is
//! O(log n).
//!
//! Unlike `std::collections::BinaryHeap`, the order is not taken from `Ord`
//! but from a caller-supplied [`Comparator`], and the orientation is chosen
//! at runtime with a [`Polarity`]. The heap never touches raw storage; every
//! structural change is an array `append`, `pop_back`, `set` or `swap`.
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `push`    | O(log n)       |
//! | `pop`     | O(log n)       |
//! | `peek`    | O(1)           |
//! | `len`     | O(1)           |
//!
//! # Example
//!
//! ```rust
//! use growable_heap::{BinaryHeap, CompareResult, Polarity};
//!
//! let by_value = |a: &i32, b: &i32| CompareResult::from(a.cmp(b));
//! let mut heap = BinaryHeap::new(4, Polarity::Min, by_value).unwrap();
//! for value in [5, 3, 8, 1] {
//!     heap.push(value).unwrap();
//! }
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert!(heap.pop().is_err());
//! ```

use std::fmt;
use std::slice;

use log::warn;

use crate::config::HeapConfig;
use crate::error::{Error, Result};
use crate::growable_array::GrowableArray;
use crate::traits::{CompareResult, Comparator, Polarity};

/// A binary max- or min-heap ordered by a [`Comparator`]
///
/// The heap owns its backing array. Elements themselves are handed back to
/// the caller by [`pop`](Self::pop), or at teardown through
/// [`destroy_with`](Self::destroy_with).
pub struct BinaryHeap<T, C> {
    /// Level-order storage, dense at all times
    storage: GrowableArray<T>,
    polarity: Polarity,
    comparator: C,
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    /// Creates an empty heap
    ///
    /// `capacity_hint` sizes the backing array, which grows in blocks of
    /// [`DEFAULT_HEAP_GROWTH_BLOCK`](crate::config::DEFAULT_HEAP_GROWTH_BLOCK).
    ///
    /// # Errors
    /// - [`Error::InvalidParam`] if `capacity_hint` is zero
    /// - [`Error::AllocationFailure`] if the backing array cannot be allocated
    pub fn new(capacity_hint: usize, polarity: Polarity, comparator: C) -> Result<Self> {
        Self::with_config(HeapConfig::new(capacity_hint, polarity), comparator)
    }

    /// Creates an empty heap from a [`HeapConfig`]
    ///
    /// A config with `growth_block == 0` gives a fixed-capacity heap whose
    /// [`push`](Self::push) fails with [`Error::Overflow`] once full.
    pub fn with_config(config: HeapConfig, comparator: C) -> Result<Self> {
        if config.capacity_hint == 0 {
            return Err(Error::InvalidParam);
        }

        let storage = GrowableArray::with_config(config.array_config())?;
        Ok(Self {
            storage,
            polarity: config.polarity,
            comparator,
        })
    }

    /// Element count of a heap that may be absent
    ///
    /// # Errors
    /// Returns [`Error::Uninitialized`] if `heap` is `None`.
    pub fn size_of(heap: Option<&Self>) -> Result<usize> {
        heap.map(Self::len).ok_or(Error::Uninitialized)
    }

    /// Inserts `data`, keeping the heap order
    ///
    /// # Errors
    /// - [`Error::Overflow`] if the heap is fixed-capacity and full
    /// - [`Error::AllocationFailure`] if the backing array could not grow
    ///
    /// On error the heap is unchanged.
    pub fn push(&mut self, data: T) -> Result<()> {
        self.storage.append(data)?;
        self.sift_up(self.storage.len() - 1)
    }

    /// Removes and returns the top element
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T> {
        let tail = self.storage.pop_back().map_err(|_| Error::OutOfBounds)?;
        if self.storage.is_empty() {
            // singleton heap: the tail was the root
            return Ok(tail);
        }

        let top = match self.storage.replace(0, tail) {
            Ok(top) => top,
            Err((err, tail)) => {
                warn!("root write failed during pop ({err}); restoring the tail element");
                self.storage.append(tail)?;
                return Err(err);
            }
        };

        self.sift_down(0)?;
        Ok(top)
    }

    /// Returns the top element without removing it, or `None` if the heap is empty
    pub fn peek(&self) -> Option<&T> {
        self.storage.get(0).ok()
    }

    /// Pushes every item from `items`, stopping at the first failure
    pub fn extend_from<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }

    /// Drains the heap in pop order
    ///
    /// A `Min` heap yields ascending order and a `Max` heap descending order,
    /// as ranked by the comparator.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that no child outranks its parent under the heap's polarity
    pub fn is_heap_ordered(&self) -> bool {
        let expected = self.polarity.expected();
        let items = self.storage.as_slice();
        (1..items.len()).all(|i| {
            let parent = (i - 1) / 2;
            match self.comparator.compare(&items[parent], &items[i]) {
                CompareResult::Equal => true,
                result => result == expected,
            }
        })
    }

    /// Move the element at `hole` toward the root while it outranks its parent
    fn sift_up(&mut self, mut hole: usize) -> Result<()> {
        let expected = self.polarity.expected();

        while hole > 0 {
            let parent = (hole - 1) / 2;
            let outranks = self
                .comparator
                .compare(self.storage.get(hole)?, self.storage.get(parent)?)
                == expected;
            if !outranks {
                break;
            }
            self.storage.swap(hole, parent)?;
            hole = parent;
        }

        Ok(())
    }

    /// Move the element at `index` toward the leaves while its better child outranks it
    fn sift_down(&mut self, mut index: usize) -> Result<()> {
        let expected = self.polarity.expected();

        while let Some(child) = self.better_child(index)? {
            // ties stop the walk
            let outranked = self
                .comparator
                .compare(self.storage.get(child)?, self.storage.get(index)?)
                == expected;
            if !outranked {
                break;
            }
            self.storage.swap(index, child)?;
            index = child;
        }

        Ok(())
    }

    /// The child of `index` that ranks higher under the polarity, if any.
    /// Ties go to the left child.
    fn better_child(&self, index: usize) -> Result<Option<usize>> {
        let len = self.storage.len();
        let left = match index.checked_mul(2).and_then(|i| i.checked_add(1)) {
            Some(left) if left < len => left,
            _ => return Ok(None),
        };
        let right = left + 1;
        if right >= len {
            return Ok(Some(left));
        }

        let right_wins = self
            .comparator
            .compare(self.storage.get(right)?, self.storage.get(left)?)
            == self.polarity.expected();
        Ok(Some(if right_wins { right } else { left }))
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Number of elements in the heap
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Capacity of the backing array
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over the elements in storage (level) order, not priority order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Releases the heap, dropping every element
    pub fn destroy(self) {
        self.storage.destroy();
    }

    /// Releases the heap, passing each element to `destructor` exactly once
    pub fn destroy_with<D>(self, destructor: D)
    where
        D: FnMut(T),
    {
        self.storage.destroy_with(destructor);
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("polarity", &self.polarity)
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
