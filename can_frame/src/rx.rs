//! Receive path: received messages and the interrupt-to-task hand-off.
//!
//! The bus controller driver lives outside this crate. It implements
//! [`FrameSource`], and its interrupt handler calls [`ReceiveFlag::notify`]
//! on a flag it shares with the task that calls [`poll`].
//!
//! ```rust
//! use can_frame::{CanMessage, FrameSource, Payload, ReceiveFlag, poll};
//!
//! static CAN1_RX: ReceiveFlag = ReceiveFlag::new();
//!
//! struct OneShot(Option<CanMessage>);
//!
//! impl FrameSource for OneShot {
//!     fn receive(&mut self) -> Option<CanMessage> {
//!         self.0.take()
//!     }
//! }
//!
//! let mut bus = OneShot(Some(CanMessage::new(0x101, Payload::from_word(7))));
//! assert!(poll(&mut bus, &CAN1_RX).is_none());
//!
//! CAN1_RX.notify(); // from the interrupt handler
//! assert_eq!(poll(&mut bus, &CAN1_RX).map(|m| m.id), Some(0x101));
//! ```

use core::sync::atomic::{AtomicBool, Ordering};

use crate::{FrameError, Payload, SignalSpec};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CanMessage {
    /// Standard (11-bit) or extended (29-bit) identifier.
    pub id: u32,
    pub payload: Payload,
}

impl CanMessage {
    pub const fn new(id: u32, payload: Payload) -> Self {
        Self { id, payload }
    }

    /// Builds a message from the id and data bytes a controller reports.
    pub fn from_parts(id: u32, data: &[u8]) -> Result<Self, FrameError> {
        Ok(Self {
            id,
            payload: Payload::from_slice(data)?,
        })
    }

    #[inline]
    pub fn signal(&self, spec: &SignalSpec) -> u64 {
        spec.decode(&self.payload)
    }

    /// Decodes every signal of `table`, in table order.
    pub fn decode_all<'a>(
        &'a self,
        table: &'a [SignalSpec],
    ) -> impl Iterator<Item = (&'static str, u64)> + 'a {
        table.iter().map(move |s| (s.name(), s.decode(&self.payload)))
    }
}

/// "Message received" flag set from interrupt context and consumed by the
/// driver task.
///
/// One flag per bus. `notify` may race with `take`; a notification that
/// lands after `take` stays pending for the next poll.
#[derive(Debug, Default)]
pub struct ReceiveFlag {
    pending: AtomicBool,
}

impl ReceiveFlag {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Marks a message as waiting. Safe to call from an interrupt handler.
    #[inline]
    pub fn notify(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Clears the flag, returning whether it was set.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Hardware side of the receive path.
pub trait FrameSource {
    /// Pops the next received message, if the controller holds one.
    fn receive(&mut self) -> Option<CanMessage>;
}

/// Reads one message from `source` if `flag` reports one is waiting.
///
/// The flag is cleared before the controller is read, so a message arriving
/// during the read re-arms it.
pub fn poll<S: FrameSource + ?Sized>(source: &mut S, flag: &ReceiveFlag) -> Option<CanMessage> {
    if !flag.take() {
        return None;
    }
    let message = source.receive();
    match &message {
        Some(m) => log::debug!("received frame {:#x}: {:02x?}", m.id, m.payload.as_bytes()),
        None => log::debug!("receive flag was set but the controller had no frame"),
    }
    message
}
