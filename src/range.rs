//! Multi-bit operations over inclusive bit ranges.
//!
//! Ranges are inclusive on both ends and normalized so that `start <= end`.
//! Only the two boundary bytes of a range are masked partially; every byte in
//! between is handled whole.

use crate::{
    Bitset,
    bitset::out_of_range,
    error::{BitsetError, MAX_VALUE_BITS, Result},
    macros::bitpos,
};

/// Mask of the bits of byte `i` covered by the range `[beg, end]`, both given
/// as `(byte index, offset from MSB)`.
#[inline(always)]
fn range_mask(
    i: usize,
    (beg_byte, beg_off): (usize, usize),
    (end_byte, end_off): (usize, usize),
) -> u8 {
    let mut mask = 0xFFu8;
    if i == beg_byte {
        mask &= 0xFFu8 >> beg_off;
    }
    if i == end_byte {
        mask &= 0xFFu8 << (7 - end_off);
    }
    mask
}

#[inline(always)]
const fn normalize(start: usize, end: usize) -> (usize, usize) {
    if start > end { (end, start) } else { (start, end) }
}

/// Rejects value windows wider than [`MAX_VALUE_BITS`].
#[inline]
fn check_width(start: usize, end: usize) -> Result<usize> {
    let width = (end - start).saturating_add(1);
    if width > MAX_VALUE_BITS {
        return Err(BitsetError::RangeTooWide { width });
    }
    Ok(width)
}

impl Bitset {
    fn apply_range(&self, start: usize, end: usize, op: impl Fn(&mut u8, u8)) -> Result<()> {
        let (start, end) = normalize(start, end);
        let beg = bitpos!(start);
        let fin = bitpos!(end);

        let mut buf = self.write();
        if fin.0 >= buf.len() {
            return Err(out_of_range(&buf, end));
        }
        for (i, b) in (beg.0..).zip(&mut buf[beg.0..=fin.0]) {
            op(b, range_mask(i, beg, fin));
        }
        Ok(())
    }

    /// Sets every bit in `[start, end]`.
    ///
    /// The bounds are swapped if `start > end`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `end` is beyond the capacity;
    /// the bitset is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    ///
    /// let bits = Bitset::new(80);
    /// bits.set_range(20, 40)?;
    /// assert_eq!(bits.get_byte(20)?, 0x0F);
    /// assert_eq!(bits.get_byte(24)?, 0xFF);
    /// assert_eq!(bits.get_byte(32)?, 0xFF);
    /// assert_eq!(bits.get_byte(40)?, 0x80);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn set_range(&self, start: usize, end: usize) -> Result<()> {
        self.apply_range(start, end, |b, mask| *b |= mask)
    }

    /// Clears every bit in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `end` is beyond the capacity;
    /// the bitset is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    ///
    /// let bits = Bitset::new(80);
    /// bits.set_all();
    /// bits.clear_range(40, 20)?;
    /// assert_eq!(bits.get_byte(20)?, 0xF0);
    /// assert_eq!(bits.get_byte(32)?, 0x00);
    /// assert_eq!(bits.get_byte(40)?, 0x7F);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn clear_range(&self, start: usize, end: usize) -> Result<()> {
        self.apply_range(start, end, |b, mask| *b &= !mask)
    }

    /// Toggles every bit in `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`BitsetError::OutOfRange`] if `end` is beyond the capacity;
    /// the bitset is left unchanged.
    pub fn flip_range(&self, start: usize, end: usize) -> Result<()> {
        self.apply_range(start, end, |b, mask| *b ^= mask)
    }

    /// Writes the low `end - start + 1` bits of `value` into `[start, end]`.
    ///
    /// The value is right aligned: its least significant bit lands on `end`.
    /// Bits of the boundary bytes outside the range are preserved.
    ///
    /// # Errors
    ///
    /// - [`BitsetError::RangeTooWide`] if the range spans more than 32 bits.
    /// - [`BitsetError::OutOfRange`] if `end` is beyond the capacity.
    ///
    /// Nothing is written on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    ///
    /// let bits = Bitset::new(80);
    /// bits.set_val(1, 10, 511)?;
    /// assert_eq!(bits.get_byte(0)?, 0b0011_1111);
    /// assert_eq!(bits.get_byte(9)?, 0b1110_0000);
    /// assert_eq!(bits.get_val(1, 10)?, 511);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn set_val(&self, start: usize, end: usize, value: u32) -> Result<()> {
        let (start, end) = normalize(start, end);
        let width = check_width(start, end)?;
        let (beg_byte, beg_off) = bitpos!(start);
        let (end_byte, end_off) = bitpos!(end);

        // Up to 39 bits once aligned to the end byte, hence u64.
        let mut packed = (u64::from(value) & ((1u64 << width) - 1)) << (7 - end_off);

        let mut buf = self.write();
        if end_byte >= buf.len() {
            return Err(out_of_range(&buf, end));
        }
        for i in (beg_byte..=end_byte).rev() {
            let mut keep = 0u8;
            if i == beg_byte {
                keep |= !(0xFFu8 >> beg_off);
            }
            if i == end_byte {
                keep |= !(0xFFu8 << (7 - end_off));
            }
            buf[i] = (packed as u8 & !keep) | (buf[i] & keep);
            packed >>= 8;
        }
        Ok(())
    }

    /// Packs the bits of `[start, end]` into a right-aligned `u32`.
    ///
    /// The bit at `end` becomes bit 0 of the result.
    ///
    /// # Errors
    ///
    /// - [`BitsetError::RangeTooWide`] if the range spans more than 32 bits.
    /// - [`BitsetError::OutOfRange`] if `end` is beyond the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use sync_bitset::Bitset;
    ///
    /// let bits = Bitset::new(8);
    /// bits.set_range(0, 8)?;
    /// assert_eq!(bits.get_val(0, 8)?, 511);
    /// assert_eq!(bits.get_val(7, 8)?, 3);
    /// assert_eq!(bits.get_val(8, 39)?, 1 << 31);
    /// # Ok::<(), sync_bitset::BitsetError>(())
    /// ```
    pub fn get_val(&self, start: usize, end: usize) -> Result<u32> {
        let (start, end) = normalize(start, end);
        check_width(start, end)?;
        let (beg_byte, beg_off) = bitpos!(start);
        let (end_byte, end_off) = bitpos!(end);

        let buf = self.read();
        if end_byte >= buf.len() {
            return Err(out_of_range(&buf, end));
        }

        // Gather at most four whole bytes starting at the first one.
        let mut ret = u32::from(buf[beg_byte] & (0xFFu8 >> beg_off));
        let mut i = beg_byte;
        while i != end_byte && i - beg_byte < 3 {
            i += 1;
            ret = (ret << 8) | u32::from(buf[i]);
        }

        if i != end_byte {
            // An unaligned 32-bit window reaches into a fifth byte.
            ret = (ret << (end_off + 1)) | u32::from(buf[end_byte] >> (7 - end_off));
        } else {
            ret >>= 7 - end_off;
        }
        Ok(ret)
    }
}
