//! HID class requests on the keyboard interface.
//!
//! The firmware's USB handler forwards the interface's class control
//! requests here, so protocol/idle bookkeeping and GET/SET_REPORT
//! dispatch can be tested without a USB stack.
//!
//! ```text
//! bRequest  wValue (hi / lo)        request
//! 0x01      type / id               GET_REPORT
//! 0x02      0 / id                  GET_IDLE
//! 0x03      0                       GET_PROTOCOL
//! 0x09      type / id               SET_REPORT
//! 0x0A      duration / id           SET_IDLE
//! 0x0B      0 = boot, 1 = report    SET_PROTOCOL
//! ```

use super::{FeatureReport, HostRequest, KeyboardReport};
use crate::layout::LAYOUT_UNRESOLVED;

/// Interface class, subclass and protocol of a boot keyboard.
pub const USB_CLASS_HID: u8 = 0x03;
pub const SUBCLASS_BOOT: u8 = 0x01;
pub const PROTOCOL_KEYBOARD: u8 = 0x01;

/// Class descriptor types.
pub const DESCRIPTOR_HID: u8 = 0x21;
pub const DESCRIPTOR_REPORT: u8 = 0x22;

pub const GET_REPORT: u8 = 0x01;
pub const GET_IDLE: u8 = 0x02;
pub const GET_PROTOCOL: u8 = 0x03;
pub const SET_REPORT: u8 = 0x09;
pub const SET_IDLE: u8 = 0x0A;
pub const SET_PROTOCOL: u8 = 0x0B;

const HID_VERSION_1_11: [u8; 2] = [0x11, 0x01];
const COUNTRY_NOT_SUPPORTED: u8 = 0x00;

/// HID descriptor, length and type bytes included.
pub const fn hid_descriptor(report_descriptor_len: usize) -> [u8; 9] {
    [
        9,
        DESCRIPTOR_HID,
        HID_VERSION_1_11[0],
        HID_VERSION_1_11[1],
        COUNTRY_NOT_SUPPORTED,
        1, // one class descriptor follows
        DESCRIPTOR_REPORT,
        (report_descriptor_len & 0xFF) as u8,
        (report_descriptor_len >> 8 & 0xFF) as u8,
    ]
}

/// Report type in the high byte of a GET/SET_REPORT `wValue`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportType {
    Input,
    Output,
    Feature,
}

impl ReportType {
    pub fn from_value(value: u16) -> Option<Self> {
        match value >> 8 {
            1 => Some(ReportType::Input),
            2 => Some(ReportType::Output),
            3 => Some(ReportType::Feature),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Protocol {
    Boot = 0,
    #[default]
    Report = 1,
}

/// Reports as of the last settled bridge step, for GET_REPORT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReportSnapshot {
    pub input: KeyboardReport,
    pub feature: FeatureReport,
}

impl ReportSnapshot {
    pub const fn new() -> Self {
        Self {
            input: KeyboardReport::empty(),
            feature: FeatureReport {
                layout: LAYOUT_UNRESOLVED,
                click_enabled: false,
            },
        }
    }
}

impl Default for ReportSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

/// Answer to a class OUT request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutResult {
    /// Acknowledge, handing over whatever the host asked the bridge to do.
    Accepted(Option<HostRequest>),
    Rejected,
}

/// Protocol and idle rate of the interface.  Both return to their
/// defaults on bus reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClassState {
    protocol: Protocol,
    /// In 4 ms units; 0 means report only on change.
    idle: u8,
}

impl ClassState {
    pub const fn new() -> Self {
        Self {
            protocol: Protocol::Report,
            idle: 0,
        }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn idle(&self) -> u8 {
        self.idle
    }

    /// Handle a host-to-device class request with payload `data`.
    pub fn control_out(&mut self, request: u8, value: u16, data: &[u8]) -> OutResult {
        match request {
            SET_REPORT => match ReportType::from_value(value) {
                Some(ReportType::Output) => OutResult::Accepted(HostRequest::from_output_report(data)),
                Some(ReportType::Feature) => OutResult::Accepted(HostRequest::from_feature_report(data)),
                _ => OutResult::Rejected,
            },
            SET_IDLE => {
                self.idle = (value >> 8) as u8;
                OutResult::Accepted(None)
            }
            // The input report has no report id, so both protocols share
            // one format.
            SET_PROTOCOL => match value {
                0 => {
                    self.protocol = Protocol::Boot;
                    OutResult::Accepted(None)
                }
                1 => {
                    self.protocol = Protocol::Report;
                    OutResult::Accepted(None)
                }
                _ => OutResult::Rejected,
            },
            _ => OutResult::Rejected,
        }
    }

    /// Handle a device-to-host class request, filling `buf`.  Returns the
    /// number of bytes to send, or `None` to stall.
    pub fn control_in(
        &self,
        request: u8,
        value: u16,
        snapshot: &ReportSnapshot,
        buf: &mut [u8],
    ) -> Option<usize> {
        match request {
            GET_REPORT => {
                let n = match ReportType::from_value(value)? {
                    ReportType::Input => snapshot.input.serialize(buf),
                    ReportType::Feature => snapshot.feature.serialize(buf),
                    ReportType::Output => 0,
                };
                (n > 0).then_some(n)
            }
            GET_IDLE => {
                *buf.first_mut()? = self.idle;
                Some(1)
            }
            GET_PROTOCOL => {
                *buf.first_mut()? = self.protocol as u8;
                Some(1)
            }
            _ => None,
        }
    }
}
