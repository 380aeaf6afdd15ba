//! HID side of the bridge: boot keyboard input reports, the LED output
//! report, the configuration feature report and the class requests that
//! carry them over the control pipe.

pub mod builder;
pub mod class;
pub mod feature;
pub mod keyboard;
pub mod led;

#[cfg(test)]
mod tests;

pub use builder::ReportBuilder;
pub use class::{ClassState, ReportSnapshot};
pub use feature::FeatureReport;
pub use keyboard::KeyboardReport;
pub use led::LedMask;

/// A report the USB host wrote to us, decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostRequest {
    /// Output report: new LED state.
    SetLeds(LedMask),
    /// Feature SET_REPORT: new key click setting.
    SetClick(bool),
}

impl HostRequest {
    /// Decode an output (LED) report.  Empty payloads are ignored.
    pub fn from_output_report(data: &[u8]) -> Option<Self> {
        data.first()
            .map(|&bits| HostRequest::SetLeds(LedMask::from_hid(bits)))
    }

    /// Decode a feature SET_REPORT.  Only the click byte is honoured.
    pub fn from_feature_report(data: &[u8]) -> Option<Self> {
        feature::click_from_set_report(data).map(HostRequest::SetClick)
    }
}
