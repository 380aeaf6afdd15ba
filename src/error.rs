//! Unified error type for sun2usb.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Nothing in the translation core is fatal: callers log these and carry
//! on.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Translation core
    /// A make event arrived while the pressed-key set was full.
    KeySetFull,

    /// More non-modifier keys are down than the report has slots.
    Rollover,

    /// The raw code has no HID usage.
    UnmappedKey(u8),

    /// The outbound legacy command queue is full.
    QueueFull,

    // Hardware adapters
    /// UART read or write failed.
    Serial,

    /// USB endpoint write failed.
    Usb,

    /// Flash read/write/erase failed.
    Storage,
}
