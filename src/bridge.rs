//! The adapter's mutable state, bundled.
//!
//! [`Bridge`] is owned by the firmware's bridge loop and only ever touched
//! from there.  Each loop iteration performs exactly one step (a legacy
//! byte, a host request, or a tick) and then reads the settled reports
//! back out.

use crate::decoder::{Decoder, DecoderState, Event};
use crate::device::{ByteStore, DeviceConfigState};
use crate::hid::{FeatureReport, HostRequest, KeyboardReport, ReportBuilder};
use crate::keyset::PressedKeySet;
use crate::log::{debug, info, warn};
use crate::protocol::LegacyPort;

#[derive(Clone, Debug)]
pub struct Bridge {
    decoder: Decoder,
    keys: PressedKeySet,
    config: DeviceConfigState,
    key_down: bool,
}

impl Bridge {
    /// Fresh session: no keys, layout unresolved, click loaded from `store`.
    pub fn boot(store: &mut impl ByteStore) -> Self {
        Self {
            decoder: Decoder::new(),
            keys: PressedKeySet::new(),
            config: DeviceConfigState::load(store),
            key_down: false,
        }
    }

    /// Process one byte from the keyboard.
    pub fn feed(&mut self, byte: u8) -> Event {
        let event = self.decoder.decode(byte);
        match event {
            Event::Make(code) => {
                if let Err(err) = self.keys.insert(code) {
                    warn!("dropping make {:#x}: {:?}", code, err);
                }
            }
            Event::Break(code) => {
                self.keys.remove(code);
            }
            Event::AllUp => self.keys.clear(),
            Event::ResetAck => {
                self.keys.clear();
                info!("keyboard reset");
            }
            Event::ResetComplete(status) => debug!("reset status {:#x}", status),
            Event::LayoutAck => {}
            Event::Layout(layout) => {
                self.config.resolve_layout(layout);
            }
        }
        self.key_down = !self.keys.is_empty();
        event
    }

    /// Advance the clock by `ticks` milliseconds.
    pub fn tick(&mut self, ticks: u16, port: &mut impl LegacyPort) {
        self.config.maybe_request_layout(ticks, port);
    }

    /// Apply a SET_REPORT from the USB host.
    pub fn handle_host_request(
        &mut self,
        request: HostRequest,
        port: &mut impl LegacyPort,
        store: &mut impl ByteStore,
    ) {
        match request {
            HostRequest::SetLeds(leds) => self.config.apply_led(leds, port),
            HostRequest::SetClick(enabled) => self.config.write_click(enabled, port, store),
        }
    }

    /// Boot keyboard report for the keys currently held.
    pub fn input_report(&self) -> KeyboardReport {
        ReportBuilder::build(&self.keys, self.config.layout())
    }

    pub fn feature_report(&self) -> FeatureReport {
        self.config.read_config()
    }

    /// Any key held; drives the status LED.
    pub fn key_down(&self) -> bool {
        self.key_down
    }

    pub fn keys(&self) -> &PressedKeySet {
        &self.keys
    }

    pub fn config(&self) -> &DeviceConfigState {
        &self.config
    }

    pub fn decoder_state(&self) -> DecoderState {
        self.decoder.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Command;

    struct Null;

    impl LegacyPort for Null {
        fn send(&mut self, _command: Command) {}
    }

    impl ByteStore for Null {
        fn read_byte(&mut self) -> u8 {
            0
        }
        fn write_byte(&mut self, _value: u8) {}
    }

    #[test]
    fn key_down_tracks_the_set() {
        let mut bridge = Bridge::boot(&mut Null);
        assert!(!bridge.key_down());
        bridge.feed(0x4D);
        assert!(bridge.key_down());
        bridge.feed(0xCD);
        assert!(!bridge.key_down());
    }

    #[test]
    fn reset_ack_clears_keys() {
        let mut bridge = Bridge::boot(&mut Null);
        bridge.feed(0x4D);
        bridge.feed(0x63);
        assert_eq!(bridge.feed(0xFF), Event::ResetAck);
        assert!(bridge.keys().is_empty());
        assert_eq!(bridge.decoder_state(), DecoderState::ExpectingReset);
        // Status byte is swallowed, even one that looks like a make.
        assert_eq!(bridge.feed(0x04), Event::ResetComplete(0x04));
        assert!(bridge.keys().is_empty());
    }

    #[test]
    fn layout_byte_after_ack_is_not_a_key() {
        let mut bridge = Bridge::boot(&mut Null);
        bridge.feed(0xFE);
        bridge.feed(0x22);
        assert!(bridge.keys().is_empty());
        assert_eq!(bridge.feature_report().layout, 0x22);
    }

    #[test]
    fn host_requests_reach_config() {
        let mut bridge = Bridge::boot(&mut Null);
        bridge.handle_host_request(HostRequest::SetClick(true), &mut Null, &mut Null);
        assert!(bridge.feature_report().click_enabled);
        bridge.handle_host_request(
            HostRequest::SetLeds(crate::hid::LedMask::from_hid(0x01)),
            &mut Null,
            &mut Null,
        );
        assert!(bridge.config().leds().num_lock);
    }

    // With defmt enabled the records go over RTT instead.
    #[cfg(not(feature = "defmt"))]
    #[test]
    fn dropped_make_is_logged() {
        use crate::config::MAX_KEYS_DOWN;

        crate::testlog::setup();
        let mut bridge = Bridge::boot(&mut Null);
        for code in 0x36..0x36 + MAX_KEYS_DOWN as u8 + 1 {
            bridge.feed(code);
        }
        let records = crate::testlog::take();
        assert!(records.iter().any(|(level, msg)| {
            *level == ::log::Level::Warn && msg == "dropping make 0x46: KeySetFull"
        }));
    }
}
