//! Unit tests for the keyboard report and its descriptor.
//!
//! These tests run on the host (not embedded) and verify the wire
//! layout the host's boot keyboard driver expects.

use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.reserved, 0);
    assert_eq!(report.keycodes, [0; 6]);
    assert_eq!(report, KeyboardReport::default());
}

#[test]
fn keyboard_report_serialize_layout() {
    let report = KeyboardReport {
        modifier: 0x05,
        reserved: 0x00,
        keycodes: [0x04, 0x05, 0x06, 0x00, 0x00, 0x00],
    };

    let mut buf = [0u8; 8];
    let written = report.serialize(&mut buf);

    assert_eq!(written, KEYBOARD_REPORT_SIZE);
    assert_eq!(buf, [0x05, 0x00, 0x04, 0x05, 0x06, 0x00, 0x00, 0x00]);
    assert_eq!(report.to_bytes(), buf);
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0xAAu8; 4];
    let written = report.serialize(&mut small_buf);
    assert_eq!(written, 0); // Should fail gracefully
    assert_eq!(small_buf, [0xAA; 4]);
}

#[test]
fn keyboard_report_serialize_into_larger_buffer() {
    let report = KeyboardReport {
        modifier: 0x02,
        reserved: 0,
        keycodes: [0x04, 0, 0, 0, 0, 0],
    };
    let mut buf = [0xFFu8; 10];
    assert_eq!(report.serialize(&mut buf), 8);
    assert_eq!(&buf[..8], &[0x02, 0x00, 0x04, 0, 0, 0, 0, 0]);
    assert_eq!(&buf[8..], &[0xFF, 0xFF]);
}

#[test]
fn keyboard_report_modifier_only_is_not_empty() {
    let mut report = KeyboardReport::empty();
    report.modifier = 0x01; // Left Ctrl
    assert!(!report.is_empty());
    assert!(report.pressed().is_empty());
}

#[test]
fn keyboard_report_pressed_prefix() {
    let report = KeyboardReport {
        modifier: 0,
        reserved: 0,
        keycodes: [0x04, 0x05, 0x00, 0x00, 0x00, 0x00],
    };
    assert_eq!(report.pressed(), &[0x04, 0x05]);

    let full = KeyboardReport {
        modifier: 0,
        reserved: 0,
        keycodes: [0x04, 0x05, 0x06, 0x07, 0x08, 0x09],
    };
    assert_eq!(full.pressed().len(), 6);
}

// ═══════════════════════════════════════════════════════════════════════════
// Descriptor Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn descriptor_is_a_single_keyboard_collection() {
    assert_eq!(&KEYBOARD_REPORT_DESCRIPTOR[..6], &[0x05, 0x01, 0x09, 0x06, 0xA1, 0x01]);
    assert_eq!(KEYBOARD_REPORT_DESCRIPTOR.last(), Some(&0xC0));
}

#[test]
fn descriptor_declares_six_key_array() {
    // Report Count (6), Report Size (8), Input (Data, Array)
    let needle = [0x95, 0x06, 0x75, 0x08, 0x81, 0x00];
    assert!(KEYBOARD_REPORT_DESCRIPTOR
        .windows(needle.len())
        .any(|w| w == needle));
}
