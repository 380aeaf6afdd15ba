//! Keyboard layout ids reported by the Sun keyboard.
//!
//! Two views of the same byte are kept apart on purpose:
//!
//! - [`layout_name`]: the per-country table from Sun's "Changing Between
//!   Keyboards on SPARC Systems" documentation.
//! - [`KeyboardType::from_layout`]: the coarse hardware generation,
//!   derived from the Type 5 bit alone.
//!
//! They do not always agree (e.g. 0x3x ids are Type 5 in both, but the
//! name table has gaps and a duplicated entry), so callers pick one.

use crate::protocol::LAYOUT_TYPE5_MASK;

/// Layout byte as reported by the keyboard.
pub type LayoutId = u8;

/// Layout not yet reported.
pub const LAYOUT_UNRESOLVED: LayoutId = 0xFF;

/// Hardware generation implied by the layout byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardType {
    Type4,
    Type5,
}

impl KeyboardType {
    /// `None` while the layout is unresolved.
    pub fn from_layout(layout: LayoutId) -> Option<Self> {
        match layout {
            LAYOUT_UNRESOLVED => None,
            l if l & LAYOUT_TYPE5_MASK != 0 => Some(KeyboardType::Type5),
            _ => Some(KeyboardType::Type4),
        }
    }
}

/// Human-readable layout name.  Unlisted ids are `"Unknown"`.
pub fn layout_name(layout: LayoutId) -> &'static str {
    match layout {
        0x00 | 0x01 => "Type 4 / United States",
        0x02 => "Type 4 / Belgium / French",
        0x03 => "Type 4 / Canada / French",
        0x04 => "Type 4 / Denmark",
        0x05 => "Type 4 / Germany",
        0x06 => "Type 4 / Italy",
        0x07 => "Type 4 / Netherlands",
        0x08 => "Type 4 / Norway",
        0x09 => "Type 4 / Portugal",
        0x0A => "Type 4 / America / Spanish",
        0x0B => "Type 4 / Sweden, Finland",
        0x0C => "Type 4 / Switzerland / French",
        0x0D => "Type 4 / Switzerland / German",
        0x0E => "Type 4 / Great Britain",
        0x10 => "Type 4 / Korea",
        0x11 => "Type 4 / Taiwan",
        0x17 => "Type 4 / Russia",
        0x21 => "Type 5 / United States",
        0x22 => "Type 5 / United States / UNIX",
        0x23 => "Type 5 / France",
        0x24 => "Type 5 / Denmark",
        0x25 => "Type 5 / Germany",
        0x26 => "Type 5 / Italy",
        0x27 => "Type 5 / Netherlands",
        0x28 => "Type 5 / Norway",
        0x29 => "Type 5 / Portugal",
        0x2A => "Type 5 / Spain",
        0x2B => "Type 5 / Sweden",
        0x2C => "Type 5 / Switzerland / French",
        0x2D => "Type 5 / Switzerland / German",
        0x2E => "Type 5 / Great Britain",
        0x2F => "Type 5 / Korea",
        0x30 => "Type 5 / Taiwan",
        0x31 => "Type 5 / Japan",
        0x32 => "Type 5 / Canada / French",
        0x33 => "Type 5 / Hungary",
        0x34 => "Type 5 / Poland",
        0x35 => "Type 5 / Czech",
        0x36 => "Type 5 / Russia",
        0x37 => "Type 5 / Latvia",
        0x38 => "Type 5 / Turkey",
        0x39 => "Type 5 / Greece",
        0x3A => "Type 5 / Arabic",
        0x3B => "Type 5 / Lithuania",
        0x3C => "Type 5 / Belgium",
        // Listed twice in Sun's table; kept as published.
        0x3E => "Type 5 / Canada / French",
        _ => "Unknown",
    }
}
