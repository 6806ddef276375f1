//! Signal descriptors: one row of a frame's signal definition table.
//!
//! A signal is a named bit field inside the payload together with the byte
//! order its bytes are transmitted in. Values are raw unsigned integers; any
//! scaling into engineering units happens further up.
//!
//! # Examples
//!
//! ```rust
//! use can_frame::{Endianness, Payload, SignalSpec};
//!
//! let speed = SignalSpec::new("vehicle_speed", 16, 16, Endianness::Big).unwrap();
//! let mut payload = Payload::new();
//!
//! speed.encode(&mut payload, 0x1234);
//! assert_eq!(payload.as_bytes()[2..4], [0x12, 0x34]);
//! assert_eq!(speed.decode(&payload), 0x1234);
//! ```

use bitfield::{BitFieldError, BitRange, normalize, swap_bytes};

use crate::Payload;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Endianness {
    #[default]
    Big,
    Little,
}

impl Endianness {
    #[inline]
    pub const fn is_big(self) -> bool {
        matches!(self, Endianness::Big)
    }
}

impl From<bool> for Endianness {
    /// `true` selects big-endian, matching the codec's `big_endian` flag.
    fn from(big_endian: bool) -> Self {
        if big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignalSpec {
    name: &'static str,
    range: BitRange,
    endianness: Endianness,
}

impl SignalSpec {
    /// Describes a signal of `width` bits at MSB-first bit `start`.
    ///
    /// Usable in `const` tables:
    ///
    /// ```
    /// use can_frame::{Endianness, SignalSpec};
    ///
    /// const GEAR: SignalSpec = match SignalSpec::new("gear", 14, 6, Endianness::Big) {
    ///     Ok(s) => s,
    ///     Err(_) => panic!("gear does not fit"),
    /// };
    /// assert_eq!(GEAR.range().start(), 14);
    /// ```
    pub const fn new(
        name: &'static str,
        start: usize,
        width: usize,
        endianness: Endianness,
    ) -> Result<Self, BitFieldError> {
        match BitRange::new(start, width) {
            Ok(range) => Ok(Self::from_range(name, range, endianness)),
            Err(e) => Err(e),
        }
    }

    pub const fn from_range(name: &'static str, range: BitRange, endianness: Endianness) -> Self {
        Self {
            name,
            range,
            endianness,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn range(&self) -> BitRange {
        self.range
    }

    #[inline]
    pub const fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Raw value of the signal in `payload`.
    ///
    /// Little-endian signals are read from the byte-swapped payload word, the
    /// same normalization `bitfield::get_bit_field` applies for
    /// `big_endian == false`.
    pub fn decode(&self, payload: &Payload) -> u64 {
        let word = normalize(payload.word(), self.endianness.is_big());
        let value = self.range.extract(word);
        log::trace!("decode {} {:?} -> {:#x}", self.name, self.range, value);
        value
    }

    /// Stores the low `width` bits of `value` into `payload`.
    ///
    /// The codec's insert has no byte-order flag, so little-endian signals are
    /// written by swapping the word, inserting, and swapping back.
    pub fn encode(&self, payload: &mut Payload, value: u64) {
        let mut word = normalize(payload.word(), self.endianness.is_big());
        self.range.insert(&mut word, value);
        if !self.endianness.is_big() {
            word = swap_bytes(word);
        }
        log::trace!("encode {} {:?} <- {:#x}", self.name, self.range, value);
        payload.set_word(word);
    }
}

/// Looks a signal up by name in a definition table.
pub fn find_signal<'a>(table: &'a [SignalSpec], name: &str) -> Option<&'a SignalSpec> {
    table.iter().find(|s| s.name == name)
}
