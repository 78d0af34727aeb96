//! Scan engine and HID report logic for the ezkey keypad.
//!
//! Everything here is plain `no_std` logic that runs on the host as well
//! as on the nRF52840, so it can be tested without hardware.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary lives in main.rs (`--features embedded`) and
//! adds the Embassy USB stack and GPIO wiring on top of this crate.
//!
//! Per scan cycle:
//! ```text
//! InputSampler → Debouncer ×12 → KeyStateTracker → build_report → ChangeGate → ReportTransmitter
//! ```

#![cfg_attr(not(test), no_std)]

pub mod log;

pub mod config;
pub mod debounce;
pub mod error;
pub mod hid;
pub mod keymap;
pub mod report;
pub mod sampler;
pub mod scan;
pub mod time;
pub mod tracker;

pub use error::{ConfigError, Error, SampleError, TransmitError};
pub use hid::KeyboardReport;
pub use keymap::{KeycodeEntry, KeycodeTable, DEFAULT_KEYMAP};
pub use scan::{CycleOutcome, InputSampler, Keypad, ReportTransmitter};
pub use time::Instant;
