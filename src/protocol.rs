//! Sun keyboard serial protocol vocabulary.
//!
//! Codes follow the Linux `sunkbd` driver.  Inbound bytes are either one of
//! three status codes or a key event (bit 7 = release, bits 6..0 = key
//! number).  Outbound commands are a single byte, `SetLed` carries one
//! extra mask byte.

use crate::config::LEGACY_TX_QUEUE_LEN;
use crate::error::Error;
use heapless::Vec;

/// Keyboard reports that no keys are held.
pub const RET_ALL_UP: u8 = 0x7F;
/// Keyboard finished a reset; one more byte (the self-test result) follows.
pub const RET_RESET: u8 = 0xFF;
/// Layout response header; the layout id follows.
pub const RET_LAYOUT: u8 = 0xFE;

/// Release flag on a key event byte.
pub const RELEASE: u8 = 0x80;
/// Key number bits of a key event byte.
pub const KEY_MASK: u8 = 0x7F;

/// Layout id bit set on Type 5 keyboards.
pub const LAYOUT_TYPE5_MASK: u8 = 0x20;

/// Commands the host side may send to the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    Reset,
    BellOn,
    BellOff,
    ClickOn,
    ClickOff,
    /// Set the four indicator LEDs (bit 0 = num, 1 = compose, 2 = scroll, 3 = caps).
    SetLed(u8),
    RequestLayout,
}

impl Command {
    /// Serialise into `buf`.  Returns the number of bytes written, or 0 if
    /// `buf` is too small.
    pub fn encode(&self, buf: &mut [u8]) -> usize {
        let (opcode, param) = match *self {
            Command::Reset => (0x01, None),
            Command::BellOn => (0x02, None),
            Command::BellOff => (0x03, None),
            Command::ClickOn => (0x0A, None),
            Command::ClickOff => (0x0B, None),
            Command::SetLed(mask) => (0x0E, Some(mask)),
            Command::RequestLayout => (0x0F, None),
        };
        let len = 1 + param.is_some() as usize;
        if buf.len() < len {
            return 0;
        }
        buf[0] = opcode;
        if let Some(p) = param {
            buf[1] = p;
        }
        len
    }

    pub fn click(enabled: bool) -> Self {
        if enabled {
            Command::ClickOn
        } else {
            Command::ClickOff
        }
    }
}

/// Outbound side of the legacy link.
///
/// The link has no acknowledgement, so sending cannot fail from the
/// caller's point of view.
pub trait LegacyPort {
    fn send(&mut self, command: Command);
}

/// Byte queue implementing [`LegacyPort`]; drained by whoever owns the UART.
#[derive(Default)]
pub struct TxQueue {
    bytes: Vec<u8, LEGACY_TX_QUEUE_LEN>,
}

impl TxQueue {
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Queue a command, all bytes or none.
    pub fn push(&mut self, command: Command) -> Result<(), Error> {
        let mut buf = [0u8; 2];
        let n = command.encode(&mut buf);
        if self.bytes.len() + n > self.bytes.capacity() {
            return Err(Error::QueueFull);
        }
        // Capacity checked above.
        let _ = self.bytes.extend_from_slice(&buf[..n]);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl LegacyPort for TxQueue {
    fn send(&mut self, command: Command) {
        if let Err(e) = self.push(command) {
            crate::log::warn!("legacy tx: dropping {:?}: {:?}", command, e);
        }
    }
}
