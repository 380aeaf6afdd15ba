//! Keyboard LED state: HID output report bits ↔ Sun `SetLed` mask.

/// HID LED page bit positions in the output report.
pub const HID_LED_NUM_LOCK: u8 = 0x01;
pub const HID_LED_CAPS_LOCK: u8 = 0x02;
pub const HID_LED_SCROLL_LOCK: u8 = 0x04;
pub const HID_LED_COMPOSE: u8 = 0x08;

/// Sun `SetLed` mask bit positions.
pub const SUN_LED_NUM_LOCK: u8 = 1 << 0;
pub const SUN_LED_COMPOSE: u8 = 1 << 1;
pub const SUN_LED_SCROLL_LOCK: u8 = 1 << 2;
pub const SUN_LED_CAPS_LOCK: u8 = 1 << 3;

/// The four indicators a Sun keyboard has.  Kana is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask {
    pub num_lock: bool,
    pub compose: bool,
    pub scroll_lock: bool,
    pub caps_lock: bool,
}

impl LedMask {
    pub fn from_hid(bits: u8) -> Self {
        Self {
            num_lock: bits & HID_LED_NUM_LOCK != 0,
            compose: bits & HID_LED_COMPOSE != 0,
            scroll_lock: bits & HID_LED_SCROLL_LOCK != 0,
            caps_lock: bits & HID_LED_CAPS_LOCK != 0,
        }
    }

    /// Mask byte for the Sun `SetLed` command.
    pub fn to_sun(self) -> u8 {
        let mut mask = 0;
        if self.num_lock {
            mask |= SUN_LED_NUM_LOCK;
        }
        if self.compose {
            mask |= SUN_LED_COMPOSE;
        }
        if self.scroll_lock {
            mask |= SUN_LED_SCROLL_LOCK;
        }
        if self.caps_lock {
            mask |= SUN_LED_CAPS_LOCK;
        }
        mask
    }
}
