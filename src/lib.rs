//! Sun keyboard to USB HID translation core.
//!
//! This library holds all the pure logic of the adapter so it can be
//! tested on the host (no embedded hardware required):
//!
//! - [`decoder`]: legacy serial byte stream → events
//! - [`keyset`]: ordered set of keys currently held
//! - [`keymap`]: raw key number → HID usage, with layout overrides
//! - [`hid`]: boot keyboard report synthesis and the host config protocol
//! - [`device`]: layout discovery, key click and LED state
//! - [`bridge`]: the device-state bundle the firmware loop owns
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary (main.rs) links this library and adds the
//! nRF52840 UART, flash and USB adapters on top.

#![cfg_attr(not(test), no_std)]

pub mod bridge;
pub mod config;
pub mod decoder;
pub mod device;
pub mod error;
pub mod hid;
pub mod keymap;
pub mod keyset;
pub mod layout;
pub mod protocol;
pub mod usage;

#[cfg(test)]
mod testlog;

pub use bridge::Bridge;
pub use error::Error;

#[cfg(feature = "defmt")]
pub(crate) mod log {
    pub(crate) use defmt::{debug, info, warn};
}

#[cfg(not(feature = "defmt"))]
pub(crate) mod log {
    pub(crate) use ::log::{debug, info, warn};
}
