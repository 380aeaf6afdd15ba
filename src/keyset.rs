//! Ordered set of the raw key numbers currently held down.
//!
//! Order of insertion is the order keys appear in the HID report, so
//! removal shifts later entries left instead of swapping.

use crate::config::MAX_KEYS_DOWN;
use crate::error::Error;
use heapless::Vec;

/// 7-bit Sun key number (index into the key map).
pub type RawKeyCode = u8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressedKeySet {
    keys: Vec<RawKeyCode, MAX_KEYS_DOWN>,
}

impl PressedKeySet {
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Record a make event.
    ///
    /// A key already held is left where it is.  When the set is full the
    /// key is not recorded and nothing is evicted.
    pub fn insert(&mut self, code: RawKeyCode) -> Result<(), Error> {
        if self.contains(code) {
            return Ok(());
        }
        self.keys.push(code).map_err(|_| Error::KeySetFull)
    }

    /// Record a break event.  Returns `false` if the key was not held.
    pub fn remove(&mut self, code: RawKeyCode) -> bool {
        match self.keys.iter().position(|&k| k == code) {
            Some(i) => {
                self.keys.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, code: RawKeyCode) -> bool {
        self.keys.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    /// Keys in press order.
    pub fn iter(&self) -> impl Iterator<Item = RawKeyCode> + '_ {
        self.keys.iter().copied()
    }

    pub fn as_slice(&self) -> &[RawKeyCode] {
        &self.keys
    }
}
