//! Fixed 8-byte frame payloads.
//!
//! Bytes are kept in wire order: byte 0 is the first byte received on the
//! bus and the most significant byte of [`Payload::word`].

use bitfield::nth_byte;
use bytemuck_derive::{Pod, Zeroable};

use crate::FrameError;

/// Number of data bytes in a classic CAN frame.
pub const PAYLOAD_LEN: usize = 8;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Payload([u8; PAYLOAD_LEN]);

impl Payload {
    /// All-zero payload.
    pub const fn new() -> Self {
        Self([0; PAYLOAD_LEN])
    }

    pub const fn from_bytes(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a payload from fewer than eight received bytes, zero-filling the
    /// tail.
    ///
    /// ```
    /// use can_frame::Payload;
    ///
    /// let p = Payload::from_slice(&[0xAA, 0xBB]).unwrap();
    /// assert_eq!(p.word(), 0xAABB_0000_0000_0000);
    /// assert!(Payload::from_slice(&[0; 9]).is_err());
    /// ```
    pub fn from_slice(data: &[u8]) -> Result<Self, FrameError> {
        if data.len() > PAYLOAD_LEN {
            return Err(FrameError::PayloadTooLong(data.len()));
        }
        let mut bytes = [0u8; PAYLOAD_LEN];
        bytes[..data.len()].copy_from_slice(data);
        Ok(Self(bytes))
    }

    /// Payload whose wire bytes are the big-endian bytes of `word`.
    pub const fn from_word(word: u64) -> Self {
        Self(word.to_be_bytes())
    }

    /// Reinterprets a word exactly as it sits in host memory.
    ///
    /// This is the inverse of [`Payload::native_word`] and matches a driver
    /// that copies the receive buffer into a `u64`.
    pub fn from_native_word(word: u64) -> Self {
        bytemuck::cast(word)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8; PAYLOAD_LEN] {
        &mut self.0
    }

    /// The payload as a word with byte 0 in the most significant position.
    #[inline]
    pub const fn word(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// The payload bytes reinterpreted in host byte order.
    ///
    /// On little-endian hosts this equals `word().swap_bytes()`, which is why
    /// such buffers are decoded with `big_endian == false`.
    #[inline]
    pub fn native_word(&self) -> u64 {
        bytemuck::cast(self.0)
    }

    /// Replaces every byte with the big-endian bytes of `word`.
    #[inline]
    pub fn set_word(&mut self, word: u64) {
        self.0 = word.to_be_bytes();
    }

    /// Byte `n` in wire order.
    pub fn byte(&self, n: usize) -> Result<u8, FrameError> {
        Ok(nth_byte(self.word(), n)?)
    }
}

impl From<[u8; PAYLOAD_LEN]> for Payload {
    fn from(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Payload> for [u8; PAYLOAD_LEN] {
    fn from(p: Payload) -> Self {
        p.0
    }
}
