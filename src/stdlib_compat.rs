//! Standard library compatibility layer
//!
//! Bridges types that implement [`Ord`] to the comparator-driven heap, so
//! that a heap of integers or strings needs no hand-written comparator.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Polarity is explicit**: `BinaryHeap` is always a max-heap; [`OrdHeap`]
//!   picks its orientation at construction via [`OrdHeap::min`] / [`OrdHeap::max`].
//! - **Fallible operations**: `push` and `pop` return [`Result`](crate::Result),
//!   since the backing array may be fixed-capacity.
//!
//! # Example
//!
//! ```rust
//! use growable_heap::stdlib_compat::OrdHeap;
//!
//! let mut heap = OrdHeap::min(8).unwrap();
//! heap.push("pear").unwrap();
//! heap.push("apple").unwrap();
//! heap.push("fig").unwrap();
//! assert_eq!(heap.peek(), Some(&"apple"));
//! assert_eq!(heap.into_sorted_vec(), vec!["apple", "fig", "pear"]);
//! ```

use crate::binary_heap::BinaryHeap;
use crate::error::Result;
use crate::traits::{CompareResult, Comparator, Polarity};

/// A [`Comparator`] that ranks elements by their [`Ord`] implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparator;

impl<T: Ord + ?Sized> Comparator<T> for OrdComparator {
    fn compare(&self, a: &T, b: &T) -> CompareResult {
        CompareResult::from(a.cmp(b))
    }
}

/// A heap of `Ord` elements
pub type OrdHeap<T> = BinaryHeap<T, OrdComparator>;

impl<T: Ord> BinaryHeap<T, OrdComparator> {
    /// Creates an empty heap that pops the smallest element first
    pub fn min(capacity_hint: usize) -> Result<Self> {
        Self::new(capacity_hint, Polarity::Min, OrdComparator)
    }

    /// Creates an empty heap that pops the largest element first
    pub fn max(capacity_hint: usize) -> Result<Self> {
        Self::new(capacity_hint, Polarity::Max, OrdComparator)
    }
}
