//! Implementations of boolean operations between two `Bitset`s.
//!
//! Only the overlapping prefix of the two buffers takes part: bytes of the
//! receiver past the end of the operand are never touched, and the receiver is
//! never resized.

use std::{
    ptr,
    sync::{RwLockReadGuard, RwLockWriteGuard},
};

use crate::Bitset;

impl Bitset {
    /// Locks `self` for writing and `other` for reading.
    ///
    /// The two locks are always taken in address order, so concurrent calls
    /// combining the same pair in opposite directions cannot deadlock.
    /// `other` must not be `self`.
    fn lock_pair<'a>(
        &'a self,
        other: &'a Self,
    ) -> (RwLockWriteGuard<'a, Vec<u8>>, RwLockReadGuard<'a, Vec<u8>>) {
        debug_assert!(!ptr::eq(self, other));
        if (self as *const Self) < (other as *const Self) {
            let dst = self.write();
            let src = other.read();
            (dst, src)
        } else {
            let src = other.read();
            let dst = self.write();
            (dst, src)
        }
    }

    fn combine(&self, other: &Self, op: impl Fn(&mut u8, u8), on_self: impl FnOnce(&mut [u8])) {
        if ptr::eq(self, other) {
            on_self(self.write().as_mut_slice());
            return;
        }
        let (mut dst, src) = self.lock_pair(other);
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            op(d, s);
        }
    }

    /// Performs a bitwise AND with `other`, in place.
    ///
    /// Only the first `min(self.size(), other.size())` bytes are updated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let a = Bitset::new(4);
    /// a.set_all();
    /// let b = Bitset::new(2);
    /// b.set_bit(0);
    ///
    /// a.and(&b);
    /// assert_eq!(a.get_bytes(), vec![0x80, 0x00, 0xFF, 0xFF]);
    /// ```
    pub fn and(&self, other: &Self) {
        self.combine(other, |d, s| *d &= s, |_| {});
    }

    /// Performs a bitwise OR with `other`, in place.
    ///
    /// Only the first `min(self.size(), other.size())` bytes are updated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let a = Bitset::new(4);
    /// let b = Bitset::new(2);
    /// b.set_all();
    ///
    /// a.or(&b);
    /// assert_eq!(a.get_bytes(), vec![0xFF, 0xFF, 0x00, 0x00]);
    /// ```
    pub fn or(&self, other: &Self) {
        self.combine(other, |d, s| *d |= s, |_| {});
    }

    /// Performs a bitwise XOR with `other`, in place.
    ///
    /// Only the first `min(self.size(), other.size())` bytes are updated.
    /// XOR-ing a bitset with itself clears it.
    pub fn xor(&self, other: &Self) {
        self.combine(other, |d, s| *d ^= s, |buf| buf.fill(0));
    }
}
