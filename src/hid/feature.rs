//! Configuration feature report shared by the firmware and `sunkbd-mode`.
//!
//! Device side (2 bytes, no report id):
//! ```text
//! Byte 0: Layout id (0xFF while unresolved) - read only
//! Byte 1: Key click (0 = off, 1 = on)
//! ```
//!
//! Through hidraw the host sees the same payload behind a leading report
//! id byte (always 0), so its buffer is 3 bytes.

use crate::layout::{LayoutId, LAYOUT_UNRESOLVED};

/// Feature report size on the wire, device side.
pub const FEATURE_REPORT_SIZE: usize = 2;

/// Feature buffer size on the host side (report id + payload).
pub const HOST_FEATURE_BUFFER_SIZE: usize = FEATURE_REPORT_SIZE + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FeatureReport {
    pub layout: LayoutId,
    pub click_enabled: bool,
}

impl Default for FeatureReport {
    fn default() -> Self {
        Self {
            layout: LAYOUT_UNRESOLVED,
            click_enabled: false,
        }
    }
}

impl FeatureReport {
    /// Serialise the device-side payload.  Returns bytes written (2), or 0
    /// if `buf` is too small.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < FEATURE_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.layout;
        buf[1] = self.click_enabled as u8;
        FEATURE_REPORT_SIZE
    }

    /// Parse a host-side buffer (`[report id, layout, click]`).
    pub fn from_host_buffer(buf: &[u8]) -> Option<Self> {
        if buf.len() < HOST_FEATURE_BUFFER_SIZE {
            return None;
        }
        Some(Self {
            layout: buf[1],
            click_enabled: buf[2] != 0,
        })
    }

    /// Host-side buffer asking the device to change the click setting.
    /// The layout byte is echoed back but ignored by the firmware.
    pub fn to_host_buffer(&self) -> [u8; HOST_FEATURE_BUFFER_SIZE] {
        [0, self.layout, self.click_enabled as u8]
    }
}

/// Click setting carried by a feature SET_REPORT payload.
///
/// Byte 0 (layout) is read only and ignored; payloads without byte 1 are
/// dropped.
pub fn click_from_set_report(data: &[u8]) -> Option<bool> {
    data.get(1).map(|&b| b != 0)
}
