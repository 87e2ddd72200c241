//! Byte lookup tables shared by every bitset.
//!
//! All tables are indexed by a byte value and computed at compile time. The
//! scan tables use [`NONE`] for "no such bit in this byte".

/// Sentinel stored in the scan tables when the byte has no qualifying bit.
pub(crate) const NONE: u8 = 8;

/// Number of set bits in each byte value.
pub(crate) static POPCOUNT: [u8; 256] = build_popcount();

/// Offset from the most significant bit of the first set bit.
pub(crate) static LEADING_ONE: [u8; 256] = build_leading(true);

/// Offset from the most significant bit of the first zero bit.
pub(crate) static LEADING_ZERO: [u8; 256] = build_leading(false);

/// Offset from the least significant bit of the first set bit.
pub(crate) static TRAILING_ONE: [u8; 256] = build_trailing(true);

/// Offset from the least significant bit of the first zero bit.
pub(crate) static TRAILING_ZERO: [u8; 256] = build_trailing(false);

const fn build_popcount() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = (i & 1) as u8 + table[i >> 1];
        i += 1;
    }
    table
}

const fn build_leading(one: bool) -> [u8; 256] {
    let mut table = [NONE; 256];
    let mut i = 0;
    while i < 256 {
        let b = if one { i as u8 } else { !(i as u8) };
        let mut off = 0;
        while off < 8 {
            if b & (0x80u8 >> off) != 0 {
                table[i] = off;
                break;
            }
            off += 1;
        }
        i += 1;
    }
    table
}

const fn build_trailing(one: bool) -> [u8; 256] {
    let mut table = [NONE; 256];
    let mut i = 0;
    while i < 256 {
        let b = if one { i as u8 } else { !(i as u8) };
        let mut off = 0;
        while off < 8 {
            if b & (1u8 << off) != 0 {
                table[i] = off;
                break;
            }
            off += 1;
        }
        i += 1;
    }
    table
}
