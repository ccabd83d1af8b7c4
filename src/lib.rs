//! Comparator-driven binary heap over a growable array
//!
//! This crate provides two strictly layered containers:
//!
//! - **[`GrowableArray`]**: contiguous, index-addressed storage that grows and
//!   shrinks in fixed-size blocks, with a 2x hysteresis band against
//!   grow/shrink thrashing. A zero growth block makes it fixed-capacity.
//! - **[`BinaryHeap`]**: a max- or min-heap over exactly one `GrowableArray`,
//!   ordered by a caller-supplied three-way [`Comparator`] rather than `Ord`.
//!
//! Both are synchronous, single-threaded structures without internal
//! locking; wrap them in a lock if they must be shared.
//!
//! # Example
//!
//! ```rust
//! use growable_heap::{BinaryHeap, CompareResult, Polarity};
//!
//! let by_value = |a: &i32, b: &i32| CompareResult::from(a.cmp(b));
//! let mut heap = BinaryHeap::new(3, Polarity::Max, by_value).unwrap();
//! heap.push(10).unwrap();
//! heap.push(20).unwrap();
//! heap.push(15).unwrap();
//!
//! assert_eq!(heap.peek(), Some(&20));
//! assert_eq!(heap.len(), 3);
//! ```

pub mod binary_heap;
pub mod config;
pub mod error;
pub mod growable_array;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary_heap::BinaryHeap;
pub use config::{ArrayConfig, HeapConfig};
pub use error::{Error, Result};
pub use growable_array::GrowableArray;
pub use traits::{CompareResult, Comparator, Polarity};
