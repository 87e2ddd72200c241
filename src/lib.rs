//! A thread-safe, dynamically resizable bit vector.
//!
//! This crate provides [`Bitset`], a byte-backed bit vector guarded by a
//! single reader-writer lock. All operations take `&self`, so one instance can
//! be shared between threads behind an [`Arc`](std::sync::Arc) to track
//! boolean state over large index spaces: free-slot maps, presence flags,
//! block allocators.
//!
//! # Features
//!
//! - **Single bits**: set, reset, test and flip individual positions
//! - **Ranges**: set, clear or flip an inclusive span of bits at byte speed
//! - **Values**: pack and unpack up to 32 contiguous bits as a `u32`
//! - **Scans**: find the next or previous set or cleared bit
//! - **Boolean ops**: AND, OR and XOR against another bitset
//! - **Serialization support** of the raw bytes via serde (optional)
//!
//! # Examples
//!
//! ```
//! use std::{sync::Arc, thread};
//! use sync_bitset::Bitset;
//!
//! // 80 bytes, 640 bits, all cleared
//! let slots = Arc::new(Bitset::new(80));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let slots = Arc::clone(&slots);
//!         thread::spawn(move || {
//!             for i in (t..640).step_by(4) {
//!                 slots.set_bit(i);
//!             }
//!         })
//!     })
//!     .collect();
//! for h in handles {
//!     h.join().unwrap();
//! }
//! assert!(slots.is_all_set());
//!
//! // Find and claim free slots
//! slots.clear_range(100, 119)?;
//! assert_eq!(slots.get_next_zero_bit(0)?, Some(100));
//! assert_eq!(slots.get_prev_zero_bit(640)?, Some(119));
//! # Ok::<(), sync_bitset::BitsetError>(())
//! ```
//!
//! # Bit Layout
//!
//! Bit 0 is the most significant bit of byte 0, bit 7 its least significant
//! bit, bit 8 the most significant bit of byte 1, and so on. This is the
//! layout returned by [`Bitset::get_bytes`] and accepted by
//! [`Bitset::from_bytes`].
//!
//! # Errors
//!
//! Out-of-range accesses and over-wide value windows are reported through
//! [`BitsetError`] and never modify the bitset. [`Bitset::set_bit`] and
//! [`Bitset::reset_bit`] instead return `false`, so callers can probe
//! positions cheaply.

#![warn(missing_docs)]

mod bitset;
mod error;
mod macros;
mod range;
mod scan;
mod set_ops;
mod tables;
mod traits;

#[cfg(feature = "serde")]
mod serde;

pub use bitset::Bitset;
pub use error::{BitsetError, MAX_VALUE_BITS, Result};
