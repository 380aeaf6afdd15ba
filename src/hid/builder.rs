//! Pressed keys → boot keyboard report.
//!
//! Each held key is translated, then sorted into one of three bins:
//! unmapped (dropped), modifier (a bit in byte 0) or ordinary key (a slot).
//! A report never carries a partial key list: once more ordinary keys are
//! held than there are slots, every slot reads `ERROR_ROLLOVER`.

use heapless::Vec;

use super::keyboard::{KeyboardReport, KEY_SLOTS};
use crate::error::Error;
use crate::keymap;
use crate::keyset::{PressedKeySet, RawKeyCode};
use crate::layout::LayoutId;
use crate::usage::{self, UsageId};

/// Where a translated key ends up in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Classified {
    /// Bit to OR into the modifier byte.
    Modifier(u8),
    /// Usage occupying one key slot.
    Key(UsageId),
}

/// Translate `code` for `layout` and decide where it goes.
pub fn classify(code: RawKeyCode, layout: LayoutId) -> Result<Classified, Error> {
    let usage = keymap::translate(code, layout);
    if usage == usage::NONE {
        return Err(Error::UnmappedKey(code));
    }
    Ok(match usage::modifier_bit(usage) {
        Some(bit) => Classified::Modifier(bit),
        None => Classified::Key(usage),
    })
}

/// Accumulates one report's worth of keys.
#[derive(Clone, Debug, Default)]
pub struct ReportBuilder {
    layout: LayoutId,
    modifier: u8,
    keys: Vec<UsageId, KEY_SLOTS>,
    overflow: bool,
}

impl ReportBuilder {
    pub fn new(layout: LayoutId) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Build the report for everything currently held, in press order.
    pub fn build(keys: &PressedKeySet, layout: LayoutId) -> KeyboardReport {
        let mut builder = Self::new(layout);
        for code in keys.iter() {
            builder.push(code);
        }
        builder.finish()
    }

    /// Add one held key.
    pub fn push(&mut self, code: RawKeyCode) {
        match classify(code, self.layout) {
            Ok(Classified::Modifier(bit)) => self.modifier |= bit,
            Ok(Classified::Key(usage)) => self.push_slot(usage),
            Err(err) => self.unmapped(code, err),
        }
    }

    fn push_slot(&mut self, usage: UsageId) {
        if self.keys.push(usage).is_err() {
            self.overflow = true;
        }
    }

    #[cfg(not(feature = "debug-unmapped"))]
    fn unmapped(&mut self, _code: RawKeyCode, err: Error) {
        crate::log::debug!("dropping key: {:?}", err);
    }

    /// Spell the raw code out as `X`, high nibble `G..V`, low nibble hex,
    /// when all three fit.
    #[cfg(feature = "debug-unmapped")]
    fn unmapped(&mut self, code: RawKeyCode, err: Error) {
        crate::log::debug!("spelling out key: {:?}", err);
        if self.keys.len() + 3 > KEY_SLOTS {
            return;
        }
        for usage in debug_spelling(code) {
            self.push_slot(usage);
        }
    }

    pub fn modifier(&self) -> u8 {
        self.modifier
    }

    /// Key slots as they will be reported, or `Error::Rollover` when too
    /// many ordinary keys are held.
    pub fn key_slots(&self) -> Result<[UsageId; KEY_SLOTS], Error> {
        if self.overflow {
            return Err(Error::Rollover);
        }
        let mut slots = [usage::NONE; KEY_SLOTS];
        slots[..self.keys.len()].copy_from_slice(&self.keys);
        Ok(slots)
    }

    pub fn finish(self) -> KeyboardReport {
        let keycodes = self
            .key_slots()
            .unwrap_or([usage::ERROR_ROLLOVER; KEY_SLOTS]);
        KeyboardReport {
            modifier: self.modifier,
            reserved: 0,
            keycodes,
        }
    }
}

#[cfg(feature = "debug-unmapped")]
fn debug_spelling(code: RawKeyCode) -> [UsageId; 3] {
    const HIGH: [UsageId; 16] = [
        usage::G, usage::H, usage::I, usage::J, usage::K, usage::L, usage::M, usage::N,
        usage::O, usage::P, usage::Q, usage::R, usage::S, usage::T, usage::U, usage::V,
    ];
    // Older firmware matched 0x10 here instead of 0x01, so a low nibble of
    // 1 came out as no usage at all.  This table spells it as `1`.
    const LOW: [UsageId; 16] = [
        usage::N0, usage::N1, usage::N2, usage::N3, usage::N4, usage::N5, usage::N6, usage::N7,
        usage::N8, usage::N9, usage::A, usage::B, usage::C, usage::D, usage::E, usage::F,
    ];
    [
        usage::X,
        HIGH[(code >> 4) as usize & 0x0F],
        LOW[(code & 0x0F) as usize],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LAYOUT_UNRESOLVED;

    const KEY_A: RawKeyCode = 0x4D;
    const KEY_LSHIFT: RawKeyCode = 0x63;
    const KEY_HOLE: RawKeyCode = 0x4B;

    #[test]
    fn classify_splits_modifiers_from_keys() {
        assert_eq!(
            classify(KEY_LSHIFT, LAYOUT_UNRESOLVED),
            Ok(Classified::Modifier(0x02))
        );
        assert_eq!(
            classify(KEY_A, LAYOUT_UNRESOLVED),
            Ok(Classified::Key(usage::A))
        );
        assert_eq!(
            classify(KEY_HOLE, LAYOUT_UNRESOLVED),
            Err(Error::UnmappedKey(KEY_HOLE))
        );
    }

    #[test]
    fn classify_applies_type4_override() {
        assert_eq!(classify(0x2D, 0x00), Ok(Classified::Key(usage::KEYPAD_EQUAL)));
        assert_eq!(classify(0x2D, 0x22), Ok(Classified::Key(usage::MUTE)));
    }

    #[test]
    fn six_keys_fit_seventh_rolls_over() {
        let mut b = ReportBuilder::new(0x22);
        for code in 0x36..0x3C {
            b.push(code);
        }
        assert!(b.key_slots().is_ok());
        b.push(0x3C);
        assert_eq!(b.key_slots(), Err(Error::Rollover));
        assert!(b.finish().is_rollover());
    }

    #[test]
    fn modifier_survives_rollover() {
        let mut b = ReportBuilder::new(0x22);
        b.push(KEY_LSHIFT);
        for code in 0x36..0x3D {
            b.push(code);
        }
        let report = b.finish();
        assert_eq!(report.modifier, 0x02);
        assert!(report.is_rollover());
    }

    #[cfg(not(feature = "debug-unmapped"))]
    #[test]
    fn unmapped_key_is_dropped() {
        let mut b = ReportBuilder::new(0x22);
        b.push(KEY_HOLE);
        b.push(KEY_A);
        let report = b.finish();
        assert_eq!(report.keycodes, [usage::A, 0, 0, 0, 0, 0]);
    }

    #[cfg(feature = "debug-unmapped")]
    #[test]
    fn unmapped_key_is_spelled_out() {
        let mut b = ReportBuilder::new(0x22);
        b.push(KEY_HOLE);
        let report = b.finish();
        // 0x4B -> X, K (high nibble 4), B (low nibble 0xB)
        assert_eq!(report.keycodes, [usage::X, usage::K, usage::B, 0, 0, 0]);
    }

    #[cfg(feature = "debug-unmapped")]
    #[test]
    fn spelling_low_nibble_one_is_digit_one() {
        // Low nibble 1 spells as a digit, not as an empty slot.
        assert_eq!(debug_spelling(0x01), [usage::X, usage::G, usage::N1]);
        assert_eq!(debug_spelling(0x7F), [usage::X, usage::N, usage::F]);
    }

    #[cfg(feature = "debug-unmapped")]
    #[test]
    fn spelling_skipped_when_it_does_not_fit() {
        let mut b = ReportBuilder::new(0x22);
        for code in 0x36..0x3A {
            b.push(code);
        }
        b.push(KEY_HOLE);
        let report = b.finish();
        assert!(!report.is_rollover());
        assert_eq!(report.keys().count(), 4);
    }
}
