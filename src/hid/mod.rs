//! HID report types and keyboard usage codes.

pub mod keyboard;
pub mod usage;

#[cfg(test)]
mod tests;

pub use keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
