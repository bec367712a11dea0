//! Error type shared by both containers.

use thiserror::Error;

/// Failures reported by [`crate::GrowableArray`] and [`crate::SinglyLinkedList`].
///
/// Every check runs before the container is touched, so an `Err` always means the
/// container (and any donor passed alongside it) is exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SeqError {
    /// An index argument lies outside the range valid for the operation.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The array has no single middle element.
    #[error("no middle element in a sequence of even length {len}")]
    EvenLength { len: usize },

    /// A list was asked to absorb another list while holding no nodes itself.
    #[error("cannot merge into an empty list")]
    EmptyReceiver,

    /// Array interleave needs both sides to be the same length.
    #[error("cannot interleave sequences of lengths {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Growth factors must be finite and strictly greater than 1.
    #[error("invalid growth factor {0}: must be finite and greater than 1")]
    InvalidGrowthFactor(f64),
}

impl SeqError {
    /// Returns whether this is an index range failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len { Ok(()) } else { Err(Self::OutOfRange { index, len }) }
    }

    pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
        if index <= len { Ok(()) } else { Err(Self::OutOfRange { index, len }) }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = SeqError> = core::result::Result<T, E>;
