//! Construction parameters for arrays and heaps

use crate::traits::Polarity;

/// Growth block the heap gives its backing array unless told otherwise
pub const DEFAULT_HEAP_GROWTH_BLOCK: usize = 10;

/// Sizing of a [`GrowableArray`](crate::growable_array::GrowableArray)
///
/// `growth_block == 0` marks a fixed-capacity array: appends past
/// `initial_capacity` fail with [`Error::Overflow`](crate::Error::Overflow)
/// and the array never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Slots allocated up front; capacity never shrinks below this
    pub initial_capacity: usize,
    /// Capacity delta used on grow and shrink
    pub growth_block: usize,
}

impl ArrayConfig {
    /// A fixed-capacity array of `capacity` slots
    pub fn fixed(capacity: usize) -> Self {
        Self {
            initial_capacity: capacity,
            growth_block: 0,
        }
    }

    /// An array starting at `capacity` slots, growing and shrinking by `growth_block`
    pub fn growable(capacity: usize, growth_block: usize) -> Self {
        Self {
            initial_capacity: capacity,
            growth_block,
        }
    }

    /// Returns true if the array can never grow
    pub fn is_fixed(&self) -> bool {
        self.growth_block == 0
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::growable(16, 16)
    }
}

/// Sizing and orientation of a [`BinaryHeap`](crate::binary_heap::BinaryHeap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    /// Expected number of elements; becomes the backing array's initial capacity
    pub capacity_hint: usize,
    /// Growth block of the backing array (0 = fixed capacity)
    pub growth_block: usize,
    /// Heap orientation
    pub polarity: Polarity,
}

impl HeapConfig {
    pub fn new(capacity_hint: usize, polarity: Polarity) -> Self {
        Self {
            capacity_hint,
            growth_block: DEFAULT_HEAP_GROWTH_BLOCK,
            polarity,
        }
    }

    /// Overrides the backing array's growth block
    pub fn with_growth_block(mut self, growth_block: usize) -> Self {
        self.growth_block = growth_block;
        self
    }

    /// The backing array configuration this heap config implies
    pub fn array_config(&self) -> ArrayConfig {
        ArrayConfig::growable(self.capacity_hint, self.growth_block)
    }
}
