//! USB Device subsystem - presents a boot keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`.  A single HID interface, declared with the boot
//! keyboard subclass and protocol, carries:
//!
//! - Input:   8-byte boot keyboard report (interrupt endpoint, and
//!            GET_REPORT on the control pipe)
//! - Output:  LED bitmap (SET_REPORT on the control pipe)
//! - Feature: `[layout, click]` configuration (GET/SET_REPORT)
//!
//! The bridge loop writes input reports; the USB task only answers
//! control requests.

pub mod boot_keyboard;
pub mod hid_device;
