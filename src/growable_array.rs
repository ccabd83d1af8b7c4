//! Growable Array
//!
//! Contiguous, index-addressed storage with an amortized grow/shrink policy.
//! The array knows nothing about ordering; it is the storage layer for
//! [`BinaryHeap`](crate::binary_heap::BinaryHeap).
//!
//! # Capacity policy
//!
//! Capacity is tracked logically and changes only in whole growth blocks:
//!
//! - An append into a full array grows capacity by `growth_block`. With
//!   `growth_block == 0` the array is fixed and the append fails with
//!   [`Error::Overflow`].
//! - A removal shrinks capacity by `growth_block` once the slack
//!   (`capacity - len`) reaches twice the growth block, but never below the
//!   original capacity. The 2x band keeps an array hovering at a block
//!   boundary from reallocating on every push/pop pair.
//!
//! # Time Complexity
//!
//! | Operation     | Complexity                                |
//! |---------------|-------------------------------------------|
//! | `append`      | O(1), O(n) when it grows                  |
//! | `pop_back`    | O(1), O(n) when it shrinks                |
//! | `get` / `set` | O(1)                                      |
//! | `remove_from` | O(n)                                      |
//! | `for_each`    | O(n)                                      |
//!
//! Growth is additive, so a resize happens at most once per `growth_block`
//! appends; pick the block to match the expected churn.
//!
//! # Example
//!
//! ```rust
//! use growable_heap::GrowableArray;
//!
//! let mut array = GrowableArray::new(2, 2).unwrap();
//! array.append("a").unwrap();
//! array.append("b").unwrap();
//! array.append("c").unwrap();
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.len(), 3);
//! assert_eq!(array.set(0, "z"), Ok("a"));
//! assert_eq!(array.pop_back(), Ok("c"));
//! ```

use std::mem;
use std::ops::ControlFlow;
use std::slice;

use log::{debug, trace};

use crate::config::ArrayConfig;
use crate::error::{Error, Result};

/// A growable array of `T` with block-wise capacity management
///
/// The array owns its slot storage. Whatever `T` refers to is the caller's
/// business: at teardown the array either drops the elements
/// ([`destroy`](Self::destroy)) or hands each one to a caller-supplied
/// destructor ([`destroy_with`](Self::destroy_with)).
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    /// Live elements; the backing `Vec` always has room for `capacity` of them
    slots: Vec<T>,
    /// Logical capacity, always a whole number of growth blocks away from the original
    capacity: usize,
    original_capacity: usize,
    growth_block: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an array with `initial_capacity` slots growing by `growth_block`
    ///
    /// # Errors
    /// - [`Error::InvalidParam`] if both arguments are zero
    /// - [`Error::AllocationFailure`] if the initial slots cannot be allocated
    pub fn new(initial_capacity: usize, growth_block: usize) -> Result<Self> {
        Self::with_config(ArrayConfig::growable(initial_capacity, growth_block))
    }

    /// Creates an array from an [`ArrayConfig`]
    pub fn with_config(config: ArrayConfig) -> Result<Self> {
        if config.initial_capacity == 0 && config.growth_block == 0 {
            return Err(Error::InvalidParam);
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(config.initial_capacity)?;

        Ok(Self {
            slots,
            capacity: config.initial_capacity,
            original_capacity: config.initial_capacity,
            growth_block: config.growth_block,
        })
    }

    /// Number of live elements in an array that may be absent
    ///
    /// An absent array reports 0 rather than an error value.
    pub fn size_of(array: Option<&Self>) -> usize {
        array.map_or(0, Self::len)
    }

    /// Appends `item` after the last live element
    ///
    /// # Errors
    /// - [`Error::Overflow`] if the array is full and fixed-capacity
    /// - [`Error::AllocationFailure`] if growing failed; the array keeps its
    ///   previous capacity and contents
    pub fn append(&mut self, item: T) -> Result<()> {
        if self.slots.len() == self.capacity {
            if self.growth_block == 0 {
                debug!("append rejected: fixed capacity {} reached", self.capacity);
                return Err(Error::Overflow);
            }
            if let Err(err) = self.grow() {
                debug!(
                    "append rejected: growing from capacity {} by {} failed",
                    self.capacity, self.growth_block
                );
                return Err(err);
            }
        }

        self.slots.push(item);
        Ok(())
    }

    /// Removes and returns the last live element
    ///
    /// # Errors
    /// Returns [`Error::Underflow`] if the array is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        let item = self.slots.pop().ok_or(Error::Underflow)?;
        self.shrink_if_slack();
        Ok(item)
    }

    /// Removes and returns the element at `index`, shifting later elements left
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index >= len()`.
    pub fn remove_from(&mut self, index: usize) -> Result<T> {
        if index >= self.slots.len() {
            return Err(Error::OutOfBounds);
        }
        let item = self.slots.remove(index);
        self.shrink_if_slack();
        Ok(item)
    }

    /// Returns a reference to the element at `index`
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.slots.get(index).ok_or(Error::OutOfBounds)
    }

    /// Returns a mutable reference to the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.slots.get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Replaces the element at `index`, returning the previous occupant
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.replace(index, value).map_err(|(err, _)| err)
    }

    /// Like [`set`](Self::set), but hands `value` back on failure
    pub(crate) fn replace(&mut self, index: usize, value: T) -> std::result::Result<T, (Error, T)> {
        match self.slots.get_mut(index) {
            Some(slot) => Ok(mem::replace(slot, value)),
            None => Err((Error::OutOfBounds, value)),
        }
    }

    /// Exchanges the elements at `a` and `b`
    ///
    /// # Errors
    /// Returns [`Error::OutOfBounds`] if either index is `>= len()`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.slots.len();
        if a >= len || b >= len {
            return Err(Error::OutOfBounds);
        }
        self.slots.swap(a, b);
        Ok(())
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity the array was created with; capacity never drops below it
    pub fn original_capacity(&self) -> usize {
        self.original_capacity
    }

    pub fn growth_block(&self) -> usize {
        self.growth_block
    }

    /// Returns true if the array can never grow
    pub fn is_fixed(&self) -> bool {
        self.growth_block == 0
    }

    /// Returns true if the next append needs to grow (or overflow)
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Iterates over live elements in index order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Calls `action` with each live element and its index, in index order
    ///
    /// The walk stops early when `action` returns [`ControlFlow::Break`].
    /// Returns the number of times `action` was invoked, including the
    /// invocation that stopped the walk.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use growable_heap::GrowableArray;
    ///
    /// let mut array = GrowableArray::new(4, 0).unwrap();
    /// for i in [1, 2, 3, 4] {
    ///     array.append(i).unwrap();
    /// }
    /// let visited = array.for_each(|&item, _index| {
    ///     if item == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(visited, 2);
    /// ```
    pub fn for_each<F>(&self, mut action: F) -> usize
    where
        F: FnMut(&T, usize) -> ControlFlow<()>,
    {
        let mut invoked = 0;
        for (index, item) in self.slots.iter().enumerate() {
            invoked += 1;
            if action(item, index).is_break() {
                break;
            }
        }
        invoked
    }

    /// Releases the array, dropping every live element
    pub fn destroy(self) {
        drop(self);
    }

    /// Releases the array, passing each live element to `destructor` in index order
    pub fn destroy_with<D>(self, mut destructor: D)
    where
        D: FnMut(T),
    {
        for item in self.slots {
            destructor(item);
        }
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = self
            .capacity
            .checked_add(self.growth_block)
            .ok_or(Error::AllocationFailure)?;
        self.slots
            .try_reserve_exact(new_capacity - self.slots.len())?;

        trace!("array grew: capacity {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    /// Gives back one growth block once the slack reaches two blocks.
    ///
    /// Shrinking is best effort: the removal that triggered it has already
    /// happened, so nothing here may fail the caller.
    fn shrink_if_slack(&mut self) {
        if self.growth_block == 0 {
            return;
        }

        let slack = self.capacity - self.slots.len();
        if slack < self.growth_block.saturating_mul(2) {
            return;
        }

        match self.capacity.checked_sub(self.growth_block) {
            Some(new_capacity) if new_capacity >= self.original_capacity => {
                self.slots.shrink_to(new_capacity);
                trace!("array shrank: capacity {} -> {}", self.capacity, new_capacity);
                self.capacity = new_capacity;
            }
            _ => {}
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
