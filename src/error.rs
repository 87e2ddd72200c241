//! Error type shared by every fallible [`Bitset`](crate::Bitset) operation.

use thiserror::Error;

/// Widest window, in bits, accepted by [`Bitset::set_val`] and
/// [`Bitset::get_val`].
///
/// [`Bitset::set_val`]: crate::Bitset::set_val
/// [`Bitset::get_val`]: crate::Bitset::get_val
pub const MAX_VALUE_BITS: usize = 32;

/// Errors returned by [`Bitset`](crate::Bitset) operations.
///
/// A failed operation never modifies the bitset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BitsetError {
    /// A bit position lies beyond the current capacity.
    #[error("bit position {position} is out of range for a bitset of {capacity} bits")]
    OutOfRange {
        /// The offending bit position
        position: usize,
        /// Capacity of the bitset in bits at the time of the call
        capacity: usize,
    },

    /// A value window is wider than [`MAX_VALUE_BITS`].
    #[error("maximum bit range allowed for get_val and set_val is {MAX_VALUE_BITS}, got {width}")]
    RangeTooWide {
        /// Requested window width in bits
        width: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = BitsetError> = core::result::Result<T, E>;
