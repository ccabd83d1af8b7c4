//! Error type shared by the array and the heap
//!
//! Every fallible operation returns [`Result`]. Errors are plain values: no
//! operation panics or aborts on bad input, and a container that returned an
//! error is left exactly as the operation documents.

use std::collections::TryReserveError;

use thiserror::Error;

/// Error type for container operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A malformed argument (e.g. zero capacity together with zero growth block)
    #[error("invalid parameter")]
    InvalidParam,
    /// The operation was applied to an absent container
    #[error("container is not initialized")]
    Uninitialized,
    /// The index is beyond the live elements, or the container is empty
    #[error("index out of bounds")]
    OutOfBounds,
    /// Removal from an empty container
    #[error("container is empty")]
    Underflow,
    /// Append to a full fixed-capacity container
    #[error("fixed-capacity container is full")]
    Overflow,
    /// Growing the backing storage failed
    #[error("storage allocation failed")]
    AllocationFailure,
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailure
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
