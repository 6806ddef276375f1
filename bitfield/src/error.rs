#[cfg(feature = "std")]
use thiserror::Error;

/// Errors returned by the bit-field codec.
///
/// Every variant describes a caller mistake (a bad field descriptor or byte
/// index), never a property of the data being decoded.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitFieldError {
    /// `width` is outside `1..=64` or the field runs past bit 63.
    #[cfg_attr(
        feature = "std",
        error("invalid bit field range: start {start}, width {width} (need 1..=64 bits ending at or before bit 64)")
    )]
    InvalidBitFieldRange { start: usize, width: usize },

    #[cfg_attr(feature = "std", error("byte index {0} is out of range 0..=7"))]
    InvalidByteIndex(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitFieldError::InvalidBitFieldRange { start, width } => write!(
                f,
                "invalid bit field range: start {}, width {} (need 1..=64 bits ending at or before bit 64)",
                start, width
            ),
            BitFieldError::InvalidByteIndex(n) => {
                write!(f, "byte index {} is out of range 0..=7", n)
            }
        }
    }
}
