//! HID Keyboard/Keypad page (0x07) usage ids used by the Sun key map.
//!
//! Only the usages the translation table, the layout override and the
//! diagnostic path actually emit are listed.

/// 8-bit HID usage identifier. 0 means "unmapped".
pub type UsageId = u8;

pub const NONE: UsageId = 0x00;
pub const ERROR_ROLLOVER: UsageId = 0x01;

pub const A: UsageId = 0x04;
pub const B: UsageId = 0x05;
pub const C: UsageId = 0x06;
pub const D: UsageId = 0x07;
pub const E: UsageId = 0x08;
pub const F: UsageId = 0x09;
pub const G: UsageId = 0x0A;
pub const H: UsageId = 0x0B;
pub const I: UsageId = 0x0C;
pub const J: UsageId = 0x0D;
pub const K: UsageId = 0x0E;
pub const L: UsageId = 0x0F;
pub const M: UsageId = 0x10;
pub const N: UsageId = 0x11;
pub const O: UsageId = 0x12;
pub const P: UsageId = 0x13;
pub const Q: UsageId = 0x14;
pub const R: UsageId = 0x15;
pub const S: UsageId = 0x16;
pub const T: UsageId = 0x17;
pub const U: UsageId = 0x18;
pub const V: UsageId = 0x19;
pub const W: UsageId = 0x1A;
pub const X: UsageId = 0x1B;
pub const Y: UsageId = 0x1C;
pub const Z: UsageId = 0x1D;

pub const N1: UsageId = 0x1E;
pub const N2: UsageId = 0x1F;
pub const N3: UsageId = 0x20;
pub const N4: UsageId = 0x21;
pub const N5: UsageId = 0x22;
pub const N6: UsageId = 0x23;
pub const N7: UsageId = 0x24;
pub const N8: UsageId = 0x25;
pub const N9: UsageId = 0x26;
pub const N0: UsageId = 0x27;

pub const ENTER: UsageId = 0x28;
pub const ESCAPE: UsageId = 0x29;
pub const BACKSPACE: UsageId = 0x2A;
pub const TAB: UsageId = 0x2B;
pub const SPACE: UsageId = 0x2C;
pub const MINUS: UsageId = 0x2D;
pub const EQUAL: UsageId = 0x2E;
pub const LEFT_BRACKET: UsageId = 0x2F;
pub const RIGHT_BRACKET: UsageId = 0x30;
pub const BACKSLASH: UsageId = 0x31;
pub const SEMICOLON: UsageId = 0x33;
pub const APOSTROPHE: UsageId = 0x34;
pub const GRAVE: UsageId = 0x35;
pub const COMMA: UsageId = 0x36;
pub const DOT: UsageId = 0x37;
pub const SLASH: UsageId = 0x38;
pub const CAPS_LOCK: UsageId = 0x39;

pub const F1: UsageId = 0x3A;
pub const F2: UsageId = 0x3B;
pub const F3: UsageId = 0x3C;
pub const F4: UsageId = 0x3D;
pub const F5: UsageId = 0x3E;
pub const F6: UsageId = 0x3F;
pub const F7: UsageId = 0x40;
pub const F8: UsageId = 0x41;
pub const F9: UsageId = 0x42;
pub const F10: UsageId = 0x43;
pub const F11: UsageId = 0x44;
pub const F12: UsageId = 0x45;

pub const PRINT_SCREEN: UsageId = 0x46;
pub const SCROLL_LOCK: UsageId = 0x47;
pub const PAUSE: UsageId = 0x48;
pub const INSERT: UsageId = 0x49;
pub const HOME: UsageId = 0x4A;
pub const PAGE_UP: UsageId = 0x4B;
pub const DELETE: UsageId = 0x4C;
pub const END: UsageId = 0x4D;
pub const PAGE_DOWN: UsageId = 0x4E;
pub const RIGHT_ARROW: UsageId = 0x4F;
pub const LEFT_ARROW: UsageId = 0x50;
pub const DOWN_ARROW: UsageId = 0x51;
pub const UP_ARROW: UsageId = 0x52;

pub const NUM_LOCK: UsageId = 0x53;
pub const KEYPAD_SLASH: UsageId = 0x54;
pub const KEYPAD_ASTERISK: UsageId = 0x55;
pub const KEYPAD_MINUS: UsageId = 0x56;
pub const KEYPAD_PLUS: UsageId = 0x57;
pub const KEYPAD_ENTER: UsageId = 0x58;
pub const KEYPAD_1: UsageId = 0x59;
pub const KEYPAD_2: UsageId = 0x5A;
pub const KEYPAD_3: UsageId = 0x5B;
pub const KEYPAD_4: UsageId = 0x5C;
pub const KEYPAD_5: UsageId = 0x5D;
pub const KEYPAD_6: UsageId = 0x5E;
pub const KEYPAD_7: UsageId = 0x5F;
pub const KEYPAD_8: UsageId = 0x60;
pub const KEYPAD_9: UsageId = 0x61;
pub const KEYPAD_0: UsageId = 0x62;
pub const KEYPAD_DOT: UsageId = 0x63;
pub const NON_US_BACKSLASH: UsageId = 0x64;
pub const APPLICATION: UsageId = 0x65;
pub const POWER: UsageId = 0x66;
pub const KEYPAD_EQUAL: UsageId = 0x67;
pub const F13: UsageId = 0x68;
pub const F14: UsageId = 0x69;

pub const EXECUTE: UsageId = 0x74;
pub const HELP: UsageId = 0x75;
pub const MENU: UsageId = 0x76;
pub const SELECT: UsageId = 0x77;
pub const STOP: UsageId = 0x78;
pub const AGAIN: UsageId = 0x79;
pub const UNDO: UsageId = 0x7A;
pub const CUT: UsageId = 0x7B;
pub const COPY: UsageId = 0x7C;
pub const PASTE: UsageId = 0x7D;
pub const FIND: UsageId = 0x7E;
pub const MUTE: UsageId = 0x7F;
pub const VOLUME_UP: UsageId = 0x80;
pub const VOLUME_DOWN: UsageId = 0x81;

pub const LEFT_CTRL: UsageId = 0xE0;
pub const LEFT_SHIFT: UsageId = 0xE1;
pub const LEFT_ALT: UsageId = 0xE2;
pub const LEFT_GUI: UsageId = 0xE3;
pub const RIGHT_CTRL: UsageId = 0xE4;
pub const RIGHT_SHIFT: UsageId = 0xE5;
pub const RIGHT_ALT: UsageId = 0xE6;
pub const RIGHT_GUI: UsageId = 0xE7;

/// Modifier bit for a usage, if it is one of the eight modifier keys.
///
/// The modifier usages are contiguous (0xE0..=0xE7) and map onto the
/// boot report's modifier byte in the same order, left ctrl first.
pub const fn modifier_bit(usage: UsageId) -> Option<u8> {
    match usage {
        LEFT_CTRL..=RIGHT_GUI => Some(1 << (usage - LEFT_CTRL)),
        _ => None,
    }
}
