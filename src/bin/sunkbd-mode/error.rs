//! Host utility error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Keyboard not found")]
    DeviceNotFound,

    #[error("Found {0} keyboards, need to specify one with --device")]
    AmbiguousDevice(usize),

    #[error("Incorrect feature report: expected {expected} bytes, got {actual}")]
    FeatureReportSize { expected: usize, actual: usize },

    #[error("Invalid device path: {0}")]
    InvalidDevicePath(String),

    #[error("HID error: {0}")]
    Hid(#[from] hidapi::HidError),
}
