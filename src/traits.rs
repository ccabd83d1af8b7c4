//! Ordering contracts consumed by the heap
//!
//! This module defines the vocabulary the heap uses to talk about order:
//!
//! - [`CompareResult`]: the three-way outcome of comparing two elements
//! - [`Comparator`]: the caller-supplied ordering over opaque elements
//! - [`Polarity`]: whether the heap keeps its most-`Bigger` or most-`Smaller`
//!   element at the root
//!
//! Any `Fn(&T, &T) -> CompareResult` closure is a [`Comparator`], so most
//! callers never implement the trait by hand. Types that already implement
//! [`Ord`] can use [`OrdComparator`](crate::stdlib_compat::OrdComparator).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Outcome of comparing `a` against `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareResult {
    /// `a` ranks above `b`
    Bigger,
    /// `a` ranks below `b`
    Smaller,
    /// `a` and `b` rank the same
    Equal,
}

impl CompareResult {
    /// Returns the result of comparing the operands the other way around
    pub fn reverse(self) -> Self {
        match self {
            CompareResult::Bigger => CompareResult::Smaller,
            CompareResult::Smaller => CompareResult::Bigger,
            CompareResult::Equal => CompareResult::Equal,
        }
    }
}

impl From<Ordering> for CompareResult {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => CompareResult::Bigger,
            Ordering::Less => CompareResult::Smaller,
            Ordering::Equal => CompareResult::Equal,
        }
    }
}

/// A three-way ordering over elements of type `T`
///
/// Implementations must be deterministic, anti-symmetric and transitive for
/// as long as a heap holds elements ordered by them. The heap does not check
/// this; an inconsistent comparator leaves the heap order undefined (but
/// never memory-unsafe).
///
/// # Example
///
/// ```rust
/// use growable_heap::{CompareResult, Comparator};
///
/// let by_len = |a: &&str, b: &&str| CompareResult::from(a.len().cmp(&b.len()));
/// assert_eq!(by_len.compare(&"abc", &"a"), CompareResult::Bigger);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> CompareResult;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> CompareResult,
{
    fn compare(&self, a: &T, b: &T) -> CompareResult {
        self(a, b)
    }
}

/// Heap orientation, fixed when the heap is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// The root is the most-`Bigger` element
    Max,
    /// The root is the most-`Smaller` element
    Min,
}

impl Polarity {
    /// The comparison result a parent must have against its child
    /// (ties aside) for the heap order to hold
    pub fn expected(self) -> CompareResult {
        match self {
            Polarity::Max => CompareResult::Bigger,
            Polarity::Min => CompareResult::Smaller,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Max => write!(f, "max"),
            Polarity::Min => write!(f, "min"),
        }
    }
}

impl FromStr for Polarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(Polarity::Max)
        } else if s.eq_ignore_ascii_case("min") {
            Ok(Polarity::Min)
        } else {
            Err(Error::InvalidParam)
        }
    }
}
