//! Bit-scan operations.
//!
//! Forward scans start at the given position; backward scans start strictly
//! before it, so `from == capacity` is a valid starting point for them. Each
//! scan masks the byte holding the first candidate bit, then steps whole bytes
//! through the lookup tables until a qualifying bit turns up or the buffer
//! ends.

use crate::{
    Bitset,
    bitset::{locate, out_of_range},
    error::Result,
    macros::bitpos,
    tables::{LEADING_ONE, LEADING_ZERO, NONE, TRAILING_ONE, TRAILING_ZERO},
};

/// Scans `buf[byte..]`, substituting `first` for `buf[byte]`. `table` maps a
/// byte to the MSB offset of the wanted bit.
#[inline]
fn scan_forward(buf: &[u8], byte: usize, first: u8, table: &[u8; 256]) -> Option<usize> {
    let off = table[first as usize];
    if off != NONE {
        return Some(byte * 8 + off as usize);
    }
    buf[byte + 1..]
        .iter()
        .position(|&b| table[b as usize] != NONE)
        .map(|rel| {
            let i = byte + 1 + rel;
            i * 8 + table[buf[i] as usize] as usize
        })
}

/// Scans `buf[..=byte]` backwards, substituting `first` for `buf[byte]`.
/// `table` maps a byte to the LSB offset of the wanted bit.
#[inline]
fn scan_backward(buf: &[u8], byte: usize, first: u8, table: &[u8; 256]) -> Option<usize> {
    let off = table[first as usize];
    if off != NONE {
        return Some(byte * 8 + 7 - off as usize);
    }
    buf[..byte]
        .iter()
        .rposition(|&b| table[b as usize] != NONE)
        .map(|i| i * 8 + 7 - table[buf[i] as usize] as usize)
}

/// Locates the bit just before `from`, which must be non-zero. Accepts
/// `from == capacity`.
#[inline]
fn locate_before(buf: &[u8], from: usize) -> Result<(usize, usize)> {
    let (byte, off) = bitpos!(from - 1);
    if byte >= buf.len() {
        return Err(out_of_range(buf, from));
    }
    Ok((byte, off))
}

impl Bitset {
    /// Returns the position of the first set bit at or after `from`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`](crate::BitsetError::OutOfRange) if
    /// `from` is beyond the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(80);
    /// bits.set_bit(16);
    /// bits.set_bit(20);
    ///
    /// assert_eq!(bits.get_next_set_bit(0)?, Some(16));
    /// assert_eq!(bits.get_next_set_bit(16)?, Some(16));
    /// assert_eq!(bits.get_next_set_bit(17)?, Some(20));
    /// assert_eq!(bits.get_next_set_bit(21)?, None);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn get_next_set_bit(&self, from: usize) -> Result<Option<usize>> {
        let buf = self.read();
        let (byte, off) = locate(&buf, from)?;
        let first = buf[byte] & (0xFFu8 >> off);
        Ok(scan_forward(&buf, byte, first, &LEADING_ONE))
    }

    /// Returns the position of the first cleared bit at or after `from`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`](crate::BitsetError::OutOfRange) if
    /// `from` is beyond the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(80);
    /// bits.set_all();
    /// bits.reset_bit(80);
    ///
    /// assert_eq!(bits.get_next_zero_bit(0)?, Some(80));
    /// assert_eq!(bits.get_next_zero_bit(81)?, None);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn get_next_zero_bit(&self, from: usize) -> Result<Option<usize>> {
        let buf = self.read();
        let (byte, off) = locate(&buf, from)?;
        let first = buf[byte] | !(0xFFu8 >> off);
        Ok(scan_forward(&buf, byte, first, &LEADING_ZERO))
    }

    /// Returns the position of the last set bit strictly before `from`.
    ///
    /// Always `None` when `from` is 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`](crate::BitsetError::OutOfRange) if
    /// `from` is greater than the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sync_bitset::Bitset;
    /// let bits = Bitset::new(80);
    /// bits.set_bit(639);
    /// assert_eq!(bits.get_prev_set_bit(640)?, Some(639));
    /// bits.reset_bit(639);
    ///
    /// bits.set_bit(99);
    /// bits.set_bit(100);
    ///
    /// assert_eq!(bits.get_prev_set_bit(600)?, Some(100));
    /// assert_eq!(bits.get_prev_set_bit(100)?, Some(99));
    /// assert_eq!(bits.get_prev_set_bit(99)?, None);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn get_prev_set_bit(&self, from: usize) -> Result<Option<usize>> {
        if from == 0 {
            return Ok(None);
        }
        let buf = self.read();
        let (byte, off) = locate_before(&buf, from)?;
        let first = buf[byte] & (0xFFu8 << (7 - off));
        Ok(scan_backward(&buf, byte, first, &TRAILING_ONE))
    }

    /// Returns the position of the last cleared bit strictly before `from`.
    ///
    /// Always `None` when `from` is 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`](crate::BitsetError::OutOfRange) if
    /// `from` is greater than the capacity.
    pub fn get_prev_zero_bit(&self, from: usize) -> Result<Option<usize>> {
        if from == 0 {
            return Ok(None);
        }
        let buf = self.read();
        let (byte, off) = locate_before(&buf, from)?;
        let first = buf[byte] | !(0xFFu8 << (7 - off));
        Ok(scan_backward(&buf, byte, first, &TRAILING_ZERO))
    }
}
