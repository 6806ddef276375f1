//! can_frame: frame payloads and named signals on top of the `bitfield` codec.
//!
//! This crate provides:
//! - `Payload`: the 8-byte data field of a frame, `bytemuck::Pod` so drivers can
//!   hand it over as raw bytes
//! - `SignalSpec`: a named bit field with its own byte order
//! - `CanMessage`, `ReceiveFlag`, `FrameSource` and `poll`: the receive path
//!   between an interrupt handler and the task that decodes frames
//!
//! ## Features
//! - `std` (default): `thiserror`-derived errors; without it the crate is `no_std`
//!
//! ```rust
//! use can_frame::{CanMessage, Endianness, SignalSpec};
//!
//! const SIGNALS: [SignalSpec; 2] = [
//!     match SignalSpec::new("ignition", 0, 1, Endianness::Big) {
//!         Ok(s) => s,
//!         Err(_) => panic!(),
//!     },
//!     match SignalSpec::new("odometer", 8, 24, Endianness::Big) {
//!         Ok(s) => s,
//!         Err(_) => panic!(),
//!     },
//! ];
//!
//! let msg = CanMessage::from_parts(0x3E9, &[0x80, 0x01, 0x86, 0xA0]).unwrap();
//! assert_eq!(msg.signal(&SIGNALS[0]), 1);
//! assert_eq!(msg.signal(&SIGNALS[1]), 100_000);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export the codec for convenience
pub use bitfield;
pub use bytemuck;

pub mod error;
pub use error::FrameError;

pub mod payload;
pub use payload::{PAYLOAD_LEN, Payload};

pub mod signal;
pub use signal::{Endianness, SignalSpec, find_signal};

pub mod rx;
pub use rx::{CanMessage, FrameSource, ReceiveFlag, poll};
