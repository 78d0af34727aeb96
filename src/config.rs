//! Application-wide constants and compile-time configuration.
//!
//! Input count, report capacity, scan timing, and USB identity live
//! here so they can be tuned in one place.

// Keypad

/// Number of physical inputs scanned every cycle.
pub const INPUTS: usize = 12;

/// Regular (non-modifier) keycode slots in a boot keyboard report.
pub const INPUT_KEYCODES: usize = 6;

/// Consecutive identical raw samples required before a debouncer
/// accepts a transition. At a 1 ms scan interval this is a 5 ms window.
pub const DEBOUNCE_SAMPLES: u8 = 5;

/// Interval between scan cycles (ms).
pub const SCAN_INTERVAL_MS: u64 = 1;

/// Depth of the queue between the scan loop and the USB writer task.
pub const REPORT_QUEUE_DEPTH: usize = 4;

const _: () = assert!(DEBOUNCE_SAMPLES > 0, "Debounce window must be at least one sample");
const _: () = assert!(INPUTS <= u8::MAX as usize, "Input indices must fit in a byte");

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "ezkey";
pub const USB_PRODUCT: &str = "EZKey 12-key Keypad";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms). 1 ms = 1000 Hz for lowest latency.
pub const USB_HID_POLL_MS: u8 = 1;

/// Bus power drawn by the keypad (mA).
pub const USB_MAX_POWER_MA: u16 = 100;

// GPIO pin assignments (nRF52840-DK defaults)
//
// The input pins are selected in `main.rs`; all are wired active-low
// against the internal pull-up.
//
//   Input 0..3   → P0.02 P0.03 P0.04 P0.05
//   Input 4..7   → P0.28 P0.29 P0.30 P0.31
//   Input 8..11  → P1.01 P1.02 P1.03 P1.04
