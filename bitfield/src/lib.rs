//! # bitfield
//!
//! A `no_std` compatible codec for arbitrary-width fields inside a fixed
//! 64-bit buffer.
//!
//! Fields are positioned with big-endian bit numbering (bit 0 is the most
//! significant bit of the buffer) and their value is read back as a plain,
//! right-justified unsigned integer.
//!
//! ```rust
//! use bitfield::{get_bit_field, nth_byte, set_bit_field};
//!
//! let mut payload = 0u64;
//! set_bit_field(&mut payload, 42, 14, 6).unwrap();
//! assert_eq!(get_bit_field(payload, 14, 6, true), Ok(42));
//!
//! assert_eq!(nth_byte(0x0102_0304_0506_0708, 0), Ok(0x01));
//! ```
//!
//! ## Little-endian buffers
//!
//! A buffer whose bytes arrive least significant first is byte-swapped
//! before extraction when `big_endian` is `false`:
//!
//! ```rust
//! use bitfield::get_bit_field;
//!
//! let wire = u64::from_le_bytes([0x11, 0x22, 0, 0, 0, 0, 0, 0]);
//! assert_eq!(get_bit_field(wire, 0, 16, false), Ok(0x1122));
//! ```
//!
//! Invalid descriptors are reported as [`BitFieldError`] instead of shifting
//! past the word.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitFieldError;

pub mod range;
pub use range::{BitRange, WORD_BITS};

mod bit_ops;
pub use bit_ops::{get_bit_field, normalize, nth_byte, set_bit_field, swap_bytes};
