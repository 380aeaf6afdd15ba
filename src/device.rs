//! Device configuration: layout discovery, key click and LED mirroring.
//!
//! This is the state the USB host can see (through the feature report) or
//! change (through the feature and output reports).  Every change is
//! pushed to the keyboard through a [`LegacyPort`]; the click setting is
//! also persisted through a [`ByteStore`].

use crate::config::LAYOUT_QUERY_DELAY_TICKS;
use crate::hid::{FeatureReport, LedMask};
use crate::layout::{LayoutId, LAYOUT_UNRESOLVED};
use crate::log::{debug, info, warn};
use crate::protocol::{Command, LegacyPort};

/// Value of an erased (never written) store byte.
pub const STORE_ERASED: u8 = 0xFF;

/// One persisted byte holding the click setting.
///
/// Writes are fire-and-forget from the core's point of view; the
/// firmware caches them and flushes to flash outside the core.
pub trait ByteStore {
    fn read_byte(&mut self) -> u8;
    fn write_byte(&mut self, value: u8);
}

/// Result of looking the click byte up in persistent storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoredByte {
    Found(u8),
    /// Never written.
    Missing,
    /// The lookup failed.
    Unreadable,
}

impl StoredByte {
    /// The byte a [`ByteStore`] should hand to [`DeviceConfigState::load`].
    ///
    /// Only a missing item reads as erased.  A failed read reads as 0
    /// (click off) and must not be written back.
    pub fn cached(self) -> u8 {
        match self {
            StoredByte::Found(value) => value,
            StoredByte::Missing => STORE_ERASED,
            StoredByte::Unreadable => 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DeviceConfigState {
    layout: LayoutId,
    click_enabled: bool,
    leds: LedMask,
    /// Ticks left before the layout is requested.
    countdown: u16,
    layout_requested: bool,
}

impl Default for DeviceConfigState {
    fn default() -> Self {
        Self {
            layout: LAYOUT_UNRESOLVED,
            click_enabled: false,
            leds: LedMask::default(),
            countdown: LAYOUT_QUERY_DELAY_TICKS,
            layout_requested: false,
        }
    }
}

impl DeviceConfigState {
    /// Boot-time state with the click setting loaded from `store`.
    ///
    /// An erased byte means first use: it reads as disabled and is
    /// written back as 0.
    pub fn load(store: &mut impl ByteStore) -> Self {
        let stored = store.read_byte();
        let click_enabled = if stored == STORE_ERASED {
            info!("click setting not initialised, defaulting to off");
            store.write_byte(0);
            false
        } else {
            stored != 0
        };
        Self {
            click_enabled,
            ..Self::default()
        }
    }

    pub fn layout(&self) -> LayoutId {
        self.layout
    }

    pub fn click_enabled(&self) -> bool {
        self.click_enabled
    }

    /// Last LED state sent to the keyboard.
    pub fn leds(&self) -> LedMask {
        self.leds
    }

    pub fn layout_resolved(&self) -> bool {
        self.layout != LAYOUT_UNRESOLVED
    }

    /// Answer a feature GET_REPORT.
    pub fn read_config(&self) -> FeatureReport {
        FeatureReport {
            layout: self.layout,
            click_enabled: self.click_enabled,
        }
    }

    /// Switch key click on or off.  Not deduplicated: the command is sent
    /// and the value stored on every call.
    pub fn write_click(
        &mut self,
        enabled: bool,
        port: &mut impl LegacyPort,
        store: &mut impl ByteStore,
    ) {
        port.send(Command::click(enabled));
        store.write_byte(enabled as u8);
        self.click_enabled = enabled;
        debug!("click {}", enabled);
    }

    /// Mirror the host's LED state onto the keyboard.
    pub fn apply_led(&mut self, leds: LedMask, port: &mut impl LegacyPort) {
        self.leds = leds;
        port.send(Command::SetLed(leds.to_sun()));
    }

    /// Count down `ticks` and request the layout once the quiet period is
    /// over.  Click-on is re-sent right after, since the keyboard boots
    /// with click off.
    pub fn maybe_request_layout(&mut self, ticks: u16, port: &mut impl LegacyPort) {
        if self.layout_requested || self.layout_resolved() {
            return;
        }
        self.countdown = self.countdown.saturating_sub(ticks);
        if self.countdown > 0 {
            return;
        }
        self.layout_requested = true;
        port.send(Command::RequestLayout);
        if self.click_enabled {
            port.send(Command::ClickOn);
        }
        debug!("layout requested");
    }

    /// Apply a layout response.  Returns `false` if one was already
    /// applied this session; such late responses are ignored.
    pub fn resolve_layout(&mut self, layout: LayoutId) -> bool {
        if self.layout_resolved() {
            warn!("ignoring extra layout response {:#x}", layout);
            return false;
        }
        self.layout = layout;
        info!("layout {:#x}", layout);
        true
    }
}
