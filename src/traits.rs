//! Trait implementations for `Bitset`.

use core::{
    fmt,
    ops::{BitAndAssign, BitOrAssign, BitXorAssign},
    ptr,
};

use crate::Bitset;

impl Default for Bitset {
    /// Creates an empty bitset of zero bytes.
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Bitset {
    /// Takes a point-in-time snapshot with its own buffer and lock.
    ///
    /// The source is held under its write lock while copying so no writer can
    /// be midway through a multi-byte update.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let original = Bitset::new(100);
    /// original.set_all();
    ///
    /// let copy = original.clone();
    /// assert_eq!(copy.get_setbit_count(), 800);
    ///
    /// original.clear_all();
    /// assert_eq!(copy.get_setbit_count(), 800);
    /// ```
    fn clone(&self) -> Self {
        let snapshot = self.write().clone();
        Self::from_bytes(snapshot)
    }
}

impl From<Vec<u8>> for Bitset {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Bitset {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Bitset {
    fn from(bytes: [u8; N]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl From<Bitset> for Vec<u8> {
    fn from(bitset: Bitset) -> Self {
        bitset.into_bytes()
    }
}

impl PartialEq for Bitset {
    /// Two bitsets are equal when their buffers hold the same bytes.
    ///
    /// Only one lock is held at a time: `other` is snapshotted first.
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        let theirs = other.get_bytes();
        *self.read() == theirs
    }
}

impl Eq for Bitset {}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.read();
        f.debug_struct("Bitset")
            .field("size", &buf.len())
            .field("bytes", &format_args!("{:02x?}", &buf[..]))
            .finish()
    }
}

impl fmt::Display for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Binary for Bitset {
    /// Formats the bits in position order, bit 0 first.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    /// let bits = Bitset::new(2);
    /// bits.set_bit(0);
    /// bits.set_bit(9);
    ///
    /// assert_eq!(format!("{bits:b}"), "1000000001000000");
    /// assert_eq!(format!("{bits:#b}"), "0b1000000001000000");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.read();
        if f.alternate() {
            f.write_str("0b")?;
        }
        for b in buf.iter() {
            write!(f, "{b:08b}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl BitAndAssign<&Bitset> for Bitset {
    /// Same as [`Bitset::and`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    ///
    /// let mut a = Bitset::from([0b1100_0000]);
    /// let b = Bitset::from([0b0100_0001]);
    ///
    /// a &= &b;
    /// assert_eq!(a.get_bytes(), vec![0b0100_0000]);
    /// ```
    #[inline]
    fn bitand_assign(&mut self, rhs: &Bitset) {
        self.and(rhs);
    }
}

impl BitOrAssign<&Bitset> for Bitset {
    /// Same as [`Bitset::or`].
    #[inline]
    fn bitor_assign(&mut self, rhs: &Bitset) {
        self.or(rhs);
    }
}

impl BitXorAssign<&Bitset> for Bitset {
    /// Same as [`Bitset::xor`].
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Bitset) {
        self.xor(rhs);
    }
}
