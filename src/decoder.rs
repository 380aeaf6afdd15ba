//! Legacy serial byte stream decoder.
//!
//! A three-state machine.  Two of the keyboard's status codes announce a
//! trailing byte (the reset self-test result and the layout id); every
//! other byte stands alone.
//!
//! ```text
//!            RET_RESET                    any byte
//!   Normal ───────────▶ ExpectingReset ───────────▶ Normal
//!            RET_LAYOUT                   layout id
//!   Normal ───────────▶ ExpectingLayout ──────────▶ Normal
//! ```
//!
//! The decoder only classifies bytes; [`crate::bridge::Bridge`] applies
//! the resulting events to the pressed-key set and device state.

use crate::keyset::RawKeyCode;
use crate::protocol::{KEY_MASK, RELEASE, RET_ALL_UP, RET_LAYOUT, RET_RESET};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecoderState {
    #[default]
    Normal,
    ExpectingReset,
    ExpectingLayout,
}

/// One decoded legacy event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Key pressed.
    Make(RawKeyCode),
    /// Key released (release flag already stripped).
    Break(RawKeyCode),
    /// No keys are held.
    AllUp,
    /// Reset acknowledgement; the next byte is its status.
    ResetAck,
    /// Trailing status byte of a reset acknowledgement (discarded).
    ResetComplete(u8),
    /// Layout response header; the next byte is the layout id.
    LayoutAck,
    /// Layout id reported by the keyboard.
    Layout(u8),
}

#[derive(Clone, Debug, Default)]
pub struct Decoder {
    state: DecoderState,
}

impl Decoder {
    pub const fn new() -> Self {
        Self {
            state: DecoderState::Normal,
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Classify one received byte.
    pub fn decode(&mut self, byte: u8) -> Event {
        match self.state {
            DecoderState::ExpectingReset => {
                self.state = DecoderState::Normal;
                Event::ResetComplete(byte)
            }
            DecoderState::ExpectingLayout => {
                self.state = DecoderState::Normal;
                Event::Layout(byte)
            }
            DecoderState::Normal => match byte {
                RET_ALL_UP => Event::AllUp,
                RET_RESET => {
                    self.state = DecoderState::ExpectingReset;
                    Event::ResetAck
                }
                RET_LAYOUT => {
                    self.state = DecoderState::ExpectingLayout;
                    Event::LayoutAck
                }
                b if b & RELEASE != 0 => Event::Break(b & KEY_MASK),
                b => Event::Make(b),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_bytes_are_key_events() {
        let mut d = Decoder::new();
        assert_eq!(d.decode(0x4D), Event::Make(0x4D));
        assert_eq!(d.decode(0xCD), Event::Break(0x4D));
        assert_eq!(d.state(), DecoderState::Normal);
    }

    #[test]
    fn all_up_is_recognised_before_make() {
        let mut d = Decoder::new();
        assert_eq!(d.decode(0x7F), Event::AllUp);
    }

    #[test]
    fn reset_consumes_one_trailing_byte() {
        let mut d = Decoder::new();
        assert_eq!(d.decode(0xFF), Event::ResetAck);
        assert_eq!(d.state(), DecoderState::ExpectingReset);
        // Even a status code is swallowed as the trailing byte.
        assert_eq!(d.decode(0x7F), Event::ResetComplete(0x7F));
        assert_eq!(d.state(), DecoderState::Normal);
        assert_eq!(d.decode(0x4D), Event::Make(0x4D));
    }

    #[test]
    fn layout_response_carries_id() {
        let mut d = Decoder::new();
        assert_eq!(d.decode(0xFE), Event::LayoutAck);
        assert_eq!(d.state(), DecoderState::ExpectingLayout);
        assert_eq!(d.decode(0xFE), Event::Layout(0xFE));
        assert_eq!(d.state(), DecoderState::Normal);
    }

    #[test]
    fn release_of_key_zero() {
        let mut d = Decoder::new();
        assert_eq!(d.decode(0x80), Event::Break(0x00));
    }
}
