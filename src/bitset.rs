//! `Bitset` struct and core implementation.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{BitsetError, Result},
    macros::{bitmask, bitpos},
    tables::POPCOUNT,
};

/// A thread-safe, resizable bit vector backed by bytes.
///
/// # Overview
///
/// `Bitset` owns a byte buffer guarded by a single reader-writer lock. Every
/// method takes `&self`: readers share the lock, mutators hold it exclusively
/// for the duration of the call. Share an instance between threads with
/// [`Arc`](std::sync::Arc).
///
/// # Bit Layout
///
/// Bit position `p` lives in byte `p / 8`, counted from the most significant
/// bit of that byte. Bit 0 is therefore the MSB of byte 0, and bit 9 is the
/// second-highest bit of byte 1. [`get_bytes`](Self::get_bytes) exposes this
/// layout unchanged.
///
/// # Capacity Model
///
/// The size is fixed in whole bytes and changes only through
/// [`resize`](Self::resize). Valid positions are `0..size * 8`.
///
/// # Examples
///
/// ```
/// use sync_bitset::Bitset;
///
/// let bits = Bitset::new(80);
/// assert!(bits.set_bit(9));
/// assert!(bits.is_set(9)?);
/// assert_eq!(bits.get_byte(9)?, 0x40);
///
/// // Positions past the end are rejected without touching the buffer
/// assert!(!bits.set_bit(640));
/// assert!(bits.is_set(640).is_err());
/// # Ok::<(), sync_bitset::BitsetError>(())
/// ```
pub struct Bitset {
    buf: RwLock<Vec<u8>>,
}

impl Bitset {
    /// Creates a bitset of `size` bytes with every bit cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(4);
    /// assert_eq!(bits.size(), 4);
    /// assert_eq!(bits.capacity(), 32);
    /// assert!(bits.is_all_zero());
    /// ```
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::from_bytes(vec![0; size])
    }

    /// Creates a bitset that takes ownership of `bytes` as its buffer.
    ///
    /// This is the inverse of [`get_bytes`](Self::get_bytes).
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::from_bytes(vec![0x40, 0x01]);
    /// assert!(bits.is_set(1)?);
    /// assert!(bits.is_set(15)?);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            buf: RwLock::new(bytes),
        }
    }

    /// Consumes the bitset and returns its buffer without copying.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Every mutation validates before writing, so a panicking holder never
    // leaves a half-written buffer behind and poisoning can be ignored.
    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<u8>> {
        self.buf.read().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Vec<u8>> {
        self.buf.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Buffer & Capacity
    // ========================================================================

    /// Returns the size of the bitset in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.read().len()
    }

    /// Returns the number of addressable bits (`size() * 8`).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.read().len() * 8
    }

    /// Expands or contracts the bitset to `new_size` bytes.
    ///
    /// The overlapping bytes are kept. Growing zero-extends; shrinking drops
    /// the trailing bytes for good.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(2);
    /// bits.set_bit(3);
    /// bits.set_bit(12);
    ///
    /// bits.resize(1);
    /// assert_eq!(bits.get_bytes(), vec![0x10]);
    ///
    /// bits.resize(3);
    /// assert_eq!(bits.get_bytes(), vec![0x10, 0, 0]);
    /// ```
    pub fn resize(&self, new_size: usize) {
        let mut resized = vec![0; new_size];
        let mut buf = self.write();
        let keep = buf.len().min(new_size);
        resized[..keep].copy_from_slice(&buf[..keep]);
        *buf = resized;
    }

    /// Returns a copy of the underlying buffer.
    #[must_use]
    pub fn get_bytes(&self) -> Vec<u8> {
        self.read().clone()
    }

    // ========================================================================
    // Single Bit Operations
    // ========================================================================

    /// Sets the bit at `pos`.
    ///
    /// Returns `false`, leaving the bitset untouched, if `pos` is beyond the
    /// capacity.
    pub fn set_bit(&self, pos: usize) -> bool {
        let (byte, off) = bitpos!(pos);
        let mut buf = self.write();
        match buf.get_mut(byte) {
            Some(b) => {
                *b |= bitmask!(off);
                true
            }
            None => false,
        }
    }

    /// Clears the bit at `pos`.
    ///
    /// Returns `false`, leaving the bitset untouched, if `pos` is beyond the
    /// capacity.
    pub fn reset_bit(&self, pos: usize) -> bool {
        let (byte, off) = bitpos!(pos);
        let mut buf = self.write();
        match buf.get_mut(byte) {
            Some(b) => {
                *b &= !bitmask!(off);
                true
            }
            None => false,
        }
    }

    /// Returns whether the bit at `pos` is set.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos` is beyond the capacity.
    pub fn is_set(&self, pos: usize) -> Result<bool> {
        let buf = self.read();
        let (byte, off) = locate(&buf, pos)?;
        Ok(buf[byte] & bitmask!(off) != 0)
    }

    /// Returns the byte holding the bit at `pos`.
    ///
    /// Note that `pos` is a bit position, not a byte index.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos` is beyond the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(4);
    /// bits.set_bit(9);
    /// assert_eq!(bits.get_byte(8)?, 0x40);
    /// assert_eq!(bits.get_byte(15)?, 0x40);
    /// assert_eq!(bits.get_byte(16)?, 0);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn get_byte(&self, pos: usize) -> Result<u8> {
        let buf = self.read();
        let (byte, _) = locate(&buf, pos)?;
        Ok(buf[byte])
    }

    /// Toggles the bit at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `pos` is beyond the capacity.
    pub fn flip(&self, pos: usize) -> Result<()> {
        let mut buf = self.write();
        let (byte, off) = locate(&buf, pos)?;
        buf[byte] ^= bitmask!(off);
        Ok(())
    }

    // ========================================================================
    // Bulk Operations
    // ========================================================================

    /// Clears every bit.
    pub fn clear_all(&self) {
        self.write().fill(0);
    }

    /// Sets every bit.
    pub fn set_all(&self) {
        self.write().fill(0xFF);
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_all_zero(&self) -> bool {
        self.read().iter().all(|&b| b == 0)
    }

    /// Returns `true` if every bit is set.
    #[must_use]
    pub fn is_all_set(&self) -> bool {
        self.read().iter().all(|&b| b == 0xFF)
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(80);
    /// bits.set_all();
    /// bits.flip(40)?;
    /// bits.flip(55)?;
    /// assert_eq!(bits.get_setbit_count(), 638);
    /// assert_eq!(bits.get_zerobit_count(), 2);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    #[must_use]
    pub fn get_setbit_count(&self) -> usize {
        count_ones(&self.read())
    }

    /// Returns the number of cleared bits.
    ///
    /// Computed as `capacity - set bits` from a single snapshot. Two separate
    /// calls may observe different snapshots.
    #[must_use]
    pub fn get_zerobit_count(&self) -> usize {
        let buf = self.read();
        buf.len() * 8 - count_ones(&buf)
    }
}

/// Resolves `pos` into `(byte index, offset from MSB)` against `buf`.
#[inline]
pub(crate) fn locate(buf: &[u8], pos: usize) -> Result<(usize, usize)> {
    let (byte, off) = bitpos!(pos);
    if byte >= buf.len() {
        return Err(out_of_range(buf, pos));
    }
    Ok((byte, off))
}

#[inline]
pub(crate) fn out_of_range(buf: &[u8], position: usize) -> BitsetError {
    BitsetError::OutOfRange {
        position,
        capacity: buf.len() * 8,
    }
}

fn count_ones(buf: &[u8]) -> usize {
    buf.iter().map(|&b| POPCOUNT[b as usize] as usize).sum()
}
