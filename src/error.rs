//! Unified error type for ezkey.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The keymap or debounce configuration is unusable. Fatal at init.
    Config(ConfigError),

    /// The input pins could not be read this cycle.
    Sample(SampleError),

    /// A finished report could not be handed to the USB stack.
    Transmit(TransmitError),
}

/// Configuration problems detected before the scan loop starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input index outside `0..INPUTS`.
    InputOutOfRange(usize),
    /// Keycode is a HID error code (0x01..=0x03) or in the reserved
    /// range above Right GUI.
    ReservedKeycode { input: u8, keycode: u8 },
    /// Two inputs map to the same regular keycode.
    DuplicateKeycode { input: u8, keycode: u8 },
    /// An assigned input has no display name.
    MissingName(u8),
    /// Debounce window of zero samples.
    DebounceWindow,
}

/// Transient failure reading the raw input states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// At least one input pin returned a read error.
    Unavailable,
}

/// Failure handing a report to the USB side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitError {
    /// The report queue towards the USB writer is full.
    QueueFull,
}

// Convenience conversions

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SampleError> for Error {
    fn from(e: SampleError) -> Self {
        Error::Sample(e)
    }
}

impl From<TransmitError> for Error {
    fn from(e: TransmitError) -> Self {
        Error::Transmit(e)
    }
}
