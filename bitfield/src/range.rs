//! Validated `(start, width)` field descriptors.
//!
//! Bits are numbered MSB-first: bit 0 is the most significant bit of the
//! 64-bit word, bit 63 the least significant.
//!
//! ```rust
//! use bitfield::BitRange;
//!
//! let range = BitRange::new(14, 6).unwrap();
//! assert_eq!(range.shift(), 44);
//! assert_eq!(range.mask(), 0b11_1111);
//!
//! let mut word = 0u64;
//! range.insert(&mut word, 42);
//! assert_eq!(range.extract(word), 42);
//! ```

use crate::BitFieldError;

/// Width of the buffer every field lives in.
pub const WORD_BITS: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitRange {
    start: u8,
    width: u8,
}

impl BitRange {
    /// The whole word.
    pub const FULL: BitRange = BitRange {
        start: 0,
        width: WORD_BITS as u8,
    };

    /// Builds a descriptor, rejecting zero-width fields, fields wider than 64
    /// bits and fields that end past the last bit of the word.
    pub const fn new(start: usize, width: usize) -> Result<Self, BitFieldError> {
        if width == 0 || width > WORD_BITS {
            return Err(BitFieldError::InvalidBitFieldRange { start, width });
        }
        match start.checked_add(width) {
            Some(end) if end <= WORD_BITS => Ok(Self {
                start: start as u8,
                width: width as u8,
            }),
            _ => Err(BitFieldError::InvalidBitFieldRange { start, width }),
        }
    }

    #[inline]
    pub const fn start(self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn width(self) -> usize {
        self.width as usize
    }

    /// One past the last bit of the field.
    #[inline]
    pub const fn end(self) -> usize {
        self.start() + self.width()
    }

    /// Distance between the field's least significant bit and bit 63.
    #[inline]
    pub const fn shift(self) -> u32 {
        (WORD_BITS - self.end()) as u32
    }

    /// Right-justified mask of `width` ones.
    #[inline]
    pub const fn mask(self) -> u64 {
        // width == 64 would overflow the shift
        u64::MAX >> (WORD_BITS - self.width())
    }

    /// `mask()` moved into the field's position inside the word.
    #[inline]
    pub const fn positioned_mask(self) -> u64 {
        self.mask() << self.shift()
    }

    /// Reads the field out of an already-normalized word.
    #[inline]
    pub const fn extract(self, word: u64) -> u64 {
        (word >> self.shift()) & self.mask()
    }

    /// Overwrites the field in `word` with the low `width` bits of `value`.
    ///
    /// Bits of `value` above the field width are dropped; bits of `word`
    /// outside the field are preserved.
    #[inline]
    pub fn insert(self, word: &mut u64, value: u64) {
        let positioned = (value & self.mask()) << self.shift();
        *word = (*word & !self.positioned_mask()) | positioned;
    }

    /// True when MSB-first bit `bit` lies inside the field.
    #[inline]
    pub const fn contains(self, bit: usize) -> bool {
        bit >= self.start() && bit < self.end()
    }
}

impl TryFrom<(usize, usize)> for BitRange {
    type Error = BitFieldError;

    fn try_from((start, width): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(start, width)
    }
}
