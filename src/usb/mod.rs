//! USB Device subsystem - presents a boot-protocol HID keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb` with a single HID interface. The scan loop pushes
//! finished reports into a channel; the writer task drains it onto the
//! IN endpoint.

pub mod hid_device;
