//! Locate the adapter among attached HID devices.

use std::ffi::CString;

use hidapi::HidApi;
use sun2usb::config::{USB_PID, USB_VID};
use tracing::debug;

use crate::error::ToolError;

/// Exactly one candidate, or an error naming how many there were.
pub fn select_single<T>(mut candidates: Vec<T>) -> Result<T, ToolError> {
    match candidates.len() {
        0 => Err(ToolError::DeviceNotFound),
        1 => candidates.pop().ok_or(ToolError::DeviceNotFound),
        n => Err(ToolError::AmbiguousDevice(n)),
    }
}

/// hidraw path of the single attached adapter.
pub fn find_adapter(api: &HidApi) -> Result<CString, ToolError> {
    let candidates: Vec<CString> = api
        .device_list()
        .filter(|info| info.vendor_id() == USB_VID && info.product_id() == USB_PID)
        .inspect(|info| debug!("Found adapter at {:?}", info.path()))
        .map(|info| info.path().to_owned())
        .collect();
    select_single(candidates)
}

pub fn to_c_path(path: &str) -> Result<CString, ToolError> {
    CString::new(path).map_err(|_| ToolError::InvalidDevicePath(path.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_candidates_is_not_found() {
        let err = select_single(Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, ToolError::DeviceNotFound));
    }

    #[test]
    fn one_candidate_is_selected() {
        assert_eq!(select_single(vec!["/dev/hidraw1"]).unwrap(), "/dev/hidraw1");
    }

    #[test]
    fn several_candidates_are_ambiguous() {
        let err = select_single(vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, ToolError::AmbiguousDevice(3)));
    }

    #[test]
    fn embedded_nul_is_rejected() {
        assert!(matches!(
            to_c_path("/dev/hid\0raw"),
            Err(ToolError::InvalidDevicePath(_))
        ));
        assert!(to_c_path("/dev/hidraw0").is_ok());
    }
}
