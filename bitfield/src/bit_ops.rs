//! Field extraction and insertion on a 64-bit buffer.
//!
//! Fields are addressed MSB-first (bit 0 is the top bit of the buffer) while
//! the field value itself is a plain right-justified unsigned integer.

use crate::{BitFieldError, BitRange};

type Result<T> = core::result::Result<T, BitFieldError>;

/// Reverses the byte order of `word`.
#[inline]
pub const fn swap_bytes(word: u64) -> u64 {
    word.swap_bytes()
}

/// Brings `word` into big-endian byte layout.
///
/// `big_endian == false` means the buffer holds its bytes in little-endian
/// order and must be swapped before MSB-first addressing applies.
#[inline]
pub const fn normalize(word: u64, big_endian: bool) -> u64 {
    if big_endian { word } else { swap_bytes(word) }
}

/// Reads the `width`-bit field starting at MSB-first bit `start`.
///
/// ```rust
/// use bitfield::get_bit_field;
///
/// // 42 (0b101010) sitting at bits 14..20
/// let data = 42u64 << (64 - 14 - 6);
/// assert_eq!(get_bit_field(data, 14, 6, true), Ok(42));
///
/// // same buffer handed over with its bytes reversed
/// assert_eq!(get_bit_field(data.swap_bytes(), 14, 6, false), Ok(42));
/// ```
pub fn get_bit_field(data: u64, start: usize, width: usize, big_endian: bool) -> Result<u64> {
    let range = BitRange::new(start, width)?;
    Ok(range.extract(normalize(data, big_endian)))
}

/// Writes the low `width` bits of `value` into the field at `start`.
///
/// The buffer is taken in the orientation the caller wants written; there is
/// no endianness flag. Callers producing little-endian output swap around the
/// call. `data` is not touched when the range is rejected.
pub fn set_bit_field(data: &mut u64, value: u64, start: usize, width: usize) -> Result<()> {
    let range = BitRange::new(start, width)?;
    range.insert(data, value);
    Ok(())
}

/// Byte `byte_num` of `source`, counting from the most significant byte.
///
/// Computed arithmetically, so the result does not depend on how the host
/// lays out `source` in memory.
#[inline]
pub fn nth_byte(source: u64, byte_num: usize) -> Result<u8> {
    if byte_num > 7 {
        return Err(BitFieldError::InvalidByteIndex(byte_num));
    }
    Ok((source >> (8 * (7 - byte_num))) as u8)
}
