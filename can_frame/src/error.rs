use bitfield::BitFieldError;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[cfg_attr(feature = "std", error("payload of {0} bytes exceeds the 8-byte frame"))]
    PayloadTooLong(usize),

    #[cfg_attr(feature = "std", error("bit field error: {0}"))]
    BitField(#[cfg_attr(feature = "std", from)] BitFieldError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::PayloadTooLong(n) => {
                write!(f, "payload of {} bytes exceeds the 8-byte frame", n)
            }
            FrameError::BitField(e) => write!(f, "bit field error: {}", e),
        }
    }
}

#[cfg(not(feature = "std"))]
impl From<BitFieldError> for FrameError {
    fn from(err: BitFieldError) -> Self {
        FrameError::BitField(err)
    }
}
