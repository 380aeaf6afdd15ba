//! Sun key number → HID usage translation.
//!
//! The base table matches the Linux `sunkbd` driver's keycodes correlated
//! with the HID usage table.  Type 4 keyboards reuse one key position that
//! Type 5 assigns differently; that case is handled by a small exception
//! table consulted after the base lookup.

use crate::keyset::RawKeyCode;
use crate::layout::LayoutId;
use crate::protocol::{KEY_MASK, LAYOUT_TYPE5_MASK};
use crate::usage::{self as u, UsageId};

/// Base key map, indexed by raw key number.  0 = no HID usage.
#[rustfmt::skip]
pub const KEY_MAP: [UsageId; 128] = [
    // 0x00
    u::NONE,          u::STOP,           u::VOLUME_DOWN,   u::AGAIN,
    u::VOLUME_UP,     u::F1,             u::F2,            u::F10,
    // 0x08
    u::F3,            u::F11,            u::F4,            u::F12,
    u::F5,            u::RIGHT_ALT,      u::F6,
    u::F13,           // unlabeled key between Help and F1 (no HID macro usage)
    // 0x10
    u::F7,            u::F8,             u::F9,            u::LEFT_ALT,
    u::UP_ARROW,      u::PAUSE,          u::PRINT_SCREEN,  u::SCROLL_LOCK,
    // 0x18
    u::LEFT_ARROW,    u::MENU,           u::UNDO,          u::DOWN_ARROW,
    u::RIGHT_ARROW,   u::ESCAPE,         u::N1,            u::N2,
    // 0x20
    u::N3,            u::N4,             u::N5,            u::N6,
    u::N7,            u::N8,             u::N9,            u::N0,
    // 0x28
    u::MINUS,         u::EQUAL,          u::GRAVE,         u::BACKSPACE,
    u::INSERT,        u::MUTE,           u::KEYPAD_SLASH,  u::KEYPAD_ASTERISK,
    // 0x30
    u::POWER,         u::SELECT,         u::KEYPAD_DOT,    u::COPY,
    u::HOME,          u::TAB,            u::Q,             u::W,
    // 0x38
    u::E,             u::R,              u::T,             u::Y,
    u::U,             u::I,              u::O,             u::P,
    // 0x40
    u::LEFT_BRACKET,  u::RIGHT_BRACKET,  u::DELETE,        u::APPLICATION,
    u::KEYPAD_7,      u::KEYPAD_8,       u::KEYPAD_9,      u::KEYPAD_MINUS,
    // 0x48
    u::EXECUTE,       u::PASTE,          u::END,           u::NONE,
    u::LEFT_CTRL,     u::A,              u::S,             u::D,
    // 0x50
    u::F,             u::G,              u::H,             u::J,
    u::K,             u::L,              u::SEMICOLON,     u::APOSTROPHE,
    // 0x58
    u::BACKSLASH,     u::ENTER,          u::KEYPAD_ENTER,  u::KEYPAD_4,
    u::KEYPAD_5,      u::KEYPAD_6,       u::KEYPAD_0,      u::FIND,
    // 0x60
    u::PAGE_UP,       u::CUT,            u::NUM_LOCK,      u::LEFT_SHIFT,
    u::Z,             u::X,              u::C,             u::V,
    // 0x68
    u::B,             u::N,              u::M,             u::COMMA,
    u::DOT,           u::SLASH,          u::RIGHT_SHIFT,
    u::F14,           // Line Feed (no HID usage of its own)
    // 0x70
    u::KEYPAD_1,      u::KEYPAD_2,       u::KEYPAD_3,      u::NONE,
    u::NONE,          u::NONE,           u::HELP,          u::CAPS_LOCK,
    // 0x78
    u::LEFT_GUI,      u::SPACE,          u::RIGHT_GUI,     u::PAGE_DOWN,
    u::NON_US_BACKSLASH, u::KEYPAD_PLUS, u::NONE,          u::NONE,
];

/// A usage substituted when the keyboard lacks the Type 5 layout bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Override {
    pub from: UsageId,
    pub to: UsageId,
}

/// Usages reused on Type 4 keyboards.  Position 0x2D is Mute on a Type 5
/// but the keypad `=` on a Type 4.
pub const TYPE4_OVERRIDES: &[Override] = &[Override {
    from: u::MUTE,
    to: u::KEYPAD_EQUAL,
}];

/// Base lookup only.  The release bit, if present, is ignored.
pub const fn base_usage(code: RawKeyCode) -> UsageId {
    KEY_MAP[(code & KEY_MASK) as usize]
}

/// Apply the layout-dependent exception table to a base usage.
pub fn apply_overrides(usage: UsageId, layout: LayoutId) -> UsageId {
    if layout & LAYOUT_TYPE5_MASK != 0 {
        return usage;
    }
    TYPE4_OVERRIDES
        .iter()
        .find(|o| o.from == usage)
        .map_or(usage, |o| o.to)
}

/// Translate a raw key number for the given layout.
pub fn translate(code: RawKeyCode, layout: LayoutId) -> UsageId {
    apply_overrides(base_usage(code), layout)
}
