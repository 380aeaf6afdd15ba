//! Unit tests for HID report synthesis and host request decoding.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of report building, parsing, and serialization.

use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR};
use super::class::{self, ClassState, OutResult, Protocol, ReportSnapshot};
use super::{FeatureReport, HostRequest, LedMask, ReportBuilder};
use crate::keyset::PressedKeySet;
use crate::usage;

const TYPE5_US: u8 = 0x21;
const TYPE4_US: u8 = 0x00;

fn held(codes: &[u8]) -> PressedKeySet {
    let mut keys = PressedKeySet::new();
    for &code in codes {
        keys.insert(code).unwrap();
    }
    keys
}

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert!(!report.is_rollover());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0; 6]);
}

#[test]
fn keyboard_report_from_valid_bytes() {
    // Modifier: Left Shift (0x02), Reserved: 0, Keys: 'A' (0x04)
    let data = [0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00];
    let report = KeyboardReport::from_bytes(&data).unwrap();

    assert_eq!(report.modifier, 0x02);
    assert_eq!(report.reserved, 0x00);
    assert_eq!(report.keycodes[0], 0x04);
    assert!(!report.is_empty());
}

#[test]
fn keyboard_report_from_short_bytes_fails() {
    let data = [0x02, 0x00, 0x04]; // Only 3 bytes - too short
    assert!(KeyboardReport::from_bytes(&data).is_none());
}

#[test]
fn keyboard_report_serialize() {
    let report = KeyboardReport {
        modifier: 0x05,
        reserved: 0x00,
        keycodes: [0x04, 0x05, 0x06, 0x00, 0x00, 0x00],
    };

    let mut buf = [0u8; 8];
    assert_eq!(report.serialize(&mut buf), 8);
    assert_eq!(buf, [0x05, 0x00, 0x04, 0x05, 0x06, 0x00, 0x00, 0x00]);
    assert_eq!(KeyboardReport::from_bytes(&buf), Some(report));
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0u8; 4];
    assert_eq!(report.serialize(&mut small_buf), 0); // Should fail gracefully
}

#[test]
fn descriptor_is_a_closed_keyboard_collection() {
    assert_eq!(&KEYBOARD_REPORT_DESCRIPTOR[..4], &[0x05, 0x01, 0x09, 0x06]);
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR.last(), Some(&0xC0));
    // Feature main item present for the configuration bytes.
    assert!(KEYBOARD_REPORT_DESCRIPTOR
        .windows(2)
        .any(|w| w == [0xB1, 0x02]));
}

// ═══════════════════════════════════════════════════════════════════════════
// Report Builder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn nothing_held_is_empty_report() {
    let report = ReportBuilder::build(&PressedKeySet::new(), TYPE5_US);
    assert_eq!(report, KeyboardReport::empty());
}

#[test]
fn shift_a_in_either_order() {
    // 0x63 = Left Shift, 0x4D = 'a'
    for codes in [[0x63, 0x4D], [0x4D, 0x63]] {
        let report = ReportBuilder::build(&held(&codes), TYPE5_US);
        assert_eq!(report.modifier, 0x02);
        assert_eq!(report.keycodes, [usage::A, 0, 0, 0, 0, 0]);
    }
}

#[test]
fn all_modifiers_occupy_no_slots() {
    // L-Ctrl, L-Shift, L-Alt, R-Shift, R-Alt
    let report = ReportBuilder::build(&held(&[0x4C, 0x63, 0x13, 0x6E, 0x0D]), TYPE5_US);
    assert_eq!(report.modifier, 0x01 | 0x02 | 0x04 | 0x20 | 0x40);
    assert!(report.keycodes.iter().all(|&k| k == 0));
}

#[test]
fn slots_follow_press_order() {
    // W, Q, E
    let report = ReportBuilder::build(&held(&[0x37, 0x36, 0x38]), TYPE5_US);
    assert_eq!(report.keycodes, [usage::W, usage::Q, usage::E, 0, 0, 0]);
}

#[test]
fn exactly_six_keys_are_reported() {
    let report = ReportBuilder::build(&held(&[0x36, 0x37, 0x38, 0x39, 0x3A, 0x3B]), TYPE5_US);
    assert!(!report.is_rollover());
    assert_eq!(report.keys().count(), 6);
}

#[test]
fn more_than_six_keys_is_full_rollover() {
    let report = ReportBuilder::build(
        &held(&[0x63, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x3B, 0x3C]),
        TYPE5_US,
    );
    assert_eq!(report.keycodes, [usage::ERROR_ROLLOVER; 6]);
    assert_eq!(report.modifier, 0x02);
}

#[test]
fn mute_position_depends_on_layout() {
    let keys = held(&[0x2D]);
    assert_eq!(
        ReportBuilder::build(&keys, TYPE4_US).keycodes[0],
        usage::KEYPAD_EQUAL
    );
    assert_eq!(ReportBuilder::build(&keys, TYPE5_US).keycodes[0], usage::MUTE);
}

// ═══════════════════════════════════════════════════════════════════════════
// Host Request Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn output_report_carries_leds() {
    assert_eq!(
        HostRequest::from_output_report(&[0x02]),
        Some(HostRequest::SetLeds(LedMask {
            caps_lock: true,
            ..LedMask::default()
        }))
    );
    assert_eq!(HostRequest::from_output_report(&[]), None);
}

#[test]
fn feature_report_carries_click() {
    assert_eq!(
        HostRequest::from_feature_report(&[0x22, 0x01]),
        Some(HostRequest::SetClick(true))
    );
    assert_eq!(
        HostRequest::from_feature_report(&[0x22, 0x00]),
        Some(HostRequest::SetClick(false))
    );
    assert_eq!(HostRequest::from_feature_report(&[0x22]), None);
}

// ═══════════════════════════════════════════════════════════════════════════
// Class Request Tests
// ═══════════════════════════════════════════════════════════════════════════

const INPUT: u16 = 0x0100;
const OUTPUT: u16 = 0x0200;
const FEATURE: u16 = 0x0300;

fn snapshot_with_shift_a() -> ReportSnapshot {
    ReportSnapshot {
        input: ReportBuilder::build(&held(&[0x63, 0x4D]), TYPE5_US),
        feature: FeatureReport {
            layout: 0x22,
            click_enabled: true,
        },
    }
}

#[test]
fn interface_declares_boot_keyboard() {
    assert_eq!(
        (class::USB_CLASS_HID, class::SUBCLASS_BOOT, class::PROTOCOL_KEYBOARD),
        (0x03, 0x01, 0x01)
    );
}

#[test]
fn hid_descriptor_points_at_report_descriptor() {
    let desc = class::hid_descriptor(KEYBOARD_REPORT_DESCRIPTOR.len());
    assert_eq!(desc[0], 9);
    assert_eq!(desc[1], class::DESCRIPTOR_HID);
    assert_eq!(desc[6], class::DESCRIPTOR_REPORT);
    assert_eq!(
        u16::from_le_bytes([desc[7], desc[8]]) as usize,
        KEYBOARD_REPORT_DESCRIPTOR.len()
    );
}

#[test]
fn get_report_input_returns_current_keys() {
    let state = ClassState::new();
    let mut buf = [0u8; 64];
    let n = state
        .control_in(class::GET_REPORT, INPUT, &snapshot_with_shift_a(), &mut buf)
        .unwrap();
    assert_eq!(&buf[..n], &[0x02, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test]
fn get_report_input_before_any_key_is_empty() {
    let state = ClassState::new();
    let mut buf = [0xAAu8; 64];
    let n = state
        .control_in(class::GET_REPORT, INPUT, &ReportSnapshot::new(), &mut buf)
        .unwrap();
    assert_eq!(&buf[..n], &[0u8; 8]);
}

#[test]
fn get_report_feature_returns_layout_and_click() {
    let state = ClassState::new();
    let mut buf = [0u8; 64];
    let n = state
        .control_in(class::GET_REPORT, FEATURE, &snapshot_with_shift_a(), &mut buf)
        .unwrap();
    assert_eq!(&buf[..n], &[0x22, 0x01]);
}

#[test]
fn get_report_output_and_unknown_type_stall() {
    let state = ClassState::new();
    let mut buf = [0u8; 64];
    let snapshot = ReportSnapshot::new();
    assert_eq!(state.control_in(class::GET_REPORT, OUTPUT, &snapshot, &mut buf), None);
    assert_eq!(state.control_in(class::GET_REPORT, 0x0400, &snapshot, &mut buf), None);
}

#[test]
fn get_report_with_short_buffer_stalls() {
    let state = ClassState::new();
    let mut buf = [0u8; 4];
    assert_eq!(
        state.control_in(class::GET_REPORT, INPUT, &snapshot_with_shift_a(), &mut buf),
        None
    );
}

#[test]
fn boot_protocol_is_accepted_and_reported() {
    let mut state = ClassState::new();
    let mut buf = [0u8; 64];
    let snapshot = ReportSnapshot::new();
    assert_eq!(state.protocol(), Protocol::Report);

    assert_eq!(
        state.control_out(class::SET_PROTOCOL, 0, &[]),
        OutResult::Accepted(None)
    );
    assert_eq!(state.protocol(), Protocol::Boot);
    assert_eq!(state.control_in(class::GET_PROTOCOL, 0, &snapshot, &mut buf), Some(1));
    assert_eq!(buf[0], 0);

    assert_eq!(
        state.control_out(class::SET_PROTOCOL, 1, &[]),
        OutResult::Accepted(None)
    );
    assert_eq!(state.protocol(), Protocol::Report);
    assert_eq!(state.control_out(class::SET_PROTOCOL, 2, &[]), OutResult::Rejected);
}

#[test]
fn idle_rate_round_trips() {
    let mut state = ClassState::new();
    let mut buf = [0u8; 64];
    // 500 ms = 125 * 4 ms
    assert_eq!(
        state.control_out(class::SET_IDLE, 125 << 8, &[]),
        OutResult::Accepted(None)
    );
    assert_eq!(
        state.control_in(class::GET_IDLE, 0, &ReportSnapshot::new(), &mut buf),
        Some(1)
    );
    assert_eq!(buf[0], 125);
}

#[test]
fn set_report_is_decoded_into_host_requests() {
    let mut state = ClassState::new();
    assert_eq!(
        state.control_out(class::SET_REPORT, OUTPUT, &[0x01]),
        OutResult::Accepted(Some(HostRequest::SetLeds(LedMask {
            num_lock: true,
            ..LedMask::default()
        })))
    );
    assert_eq!(
        state.control_out(class::SET_REPORT, FEATURE, &[0x22, 0x01]),
        OutResult::Accepted(Some(HostRequest::SetClick(true)))
    );
    // Short feature payload: acknowledged, nothing to do.
    assert_eq!(
        state.control_out(class::SET_REPORT, FEATURE, &[0x22]),
        OutResult::Accepted(None)
    );
    assert_eq!(state.control_out(class::SET_REPORT, INPUT, &[0; 8]), OutResult::Rejected);
}

#[test]
fn unknown_class_request_is_rejected() {
    let mut state = ClassState::new();
    let mut buf = [0u8; 64];
    assert_eq!(state.control_out(0x7F, 0, &[]), OutResult::Rejected);
    assert_eq!(
        state.control_in(0x7F, 0, &ReportSnapshot::new(), &mut buf),
        None
    );
}
