//! Input-to-keycode table.
//!
//! The table is flat, read-only data fixed at build/flash time: one
//! [`KeycodeEntry`] per physical input, indexed `0..INPUTS`. There is no
//! mutation API; a different layout means a different table.

use crate::config::INPUTS;
use crate::error::ConfigError;
use crate::hid::usage::{self, is_modifier, is_reserved, NO_KEY};

/// One physical input's binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeycodeEntry {
    /// HID keyboard-page usage code. `0x00` leaves the input unassigned.
    pub keycode: u8,
    /// Display label. Never transmitted.
    pub name: &'static str,
}

impl KeycodeEntry {
    pub const fn new(keycode: u8, name: &'static str) -> Self {
        Self { keycode, name }
    }

    /// An input that never contributes to a report.
    pub const fn unassigned() -> Self {
        Self {
            keycode: NO_KEY,
            name: "",
        }
    }

    pub const fn is_assigned(&self) -> bool {
        self.keycode != NO_KEY
    }

    pub const fn is_modifier(&self) -> bool {
        is_modifier(self.keycode)
    }
}

/// Fixed-size table of bindings for all inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeycodeTable {
    entries: [KeycodeEntry; INPUTS],
}

impl KeycodeTable {
    pub const fn new(entries: [KeycodeEntry; INPUTS]) -> Self {
        Self { entries }
    }

    /// Binding of input `index`.
    ///
    /// An out-of-range index is a programming error in the caller; it is
    /// reported rather than panicking so the caller decides how fatal it is.
    pub fn lookup(&self, index: usize) -> Result<KeycodeEntry, ConfigError> {
        self.entries
            .get(index)
            .copied()
            .ok_or(ConfigError::InputOutOfRange(index))
    }

    /// All bindings in input-index order.
    pub fn entries(&self) -> &[KeycodeEntry; INPUTS] {
        &self.entries
    }

    /// Check the table before the scan loop is allowed to use it.
    ///
    /// Rejects HID error/reserved codes, assigned inputs without a name,
    /// and regular keycodes bound to more than one input (a report must
    /// not carry the same keycode twice). Modifiers may repeat since they
    /// only set a bit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.entries.iter().enumerate() {
            let input = i as u8;
            if !entry.is_assigned() {
                continue;
            }
            if is_reserved(entry.keycode) {
                return Err(ConfigError::ReservedKeycode {
                    input,
                    keycode: entry.keycode,
                });
            }
            if entry.name.is_empty() {
                return Err(ConfigError::MissingName(input));
            }
            if !entry.is_modifier()
                && self.entries[..i].iter().any(|e| e.keycode == entry.keycode)
            {
                return Err(ConfigError::DuplicateKeycode {
                    input,
                    keycode: entry.keycode,
                });
            }
        }
        Ok(())
    }
}

/// Layout flashed by default: a 3×4 macro pad with letters, editing keys
/// and two modifiers.
pub static DEFAULT_KEYMAP: KeycodeTable = KeycodeTable::new([
    KeycodeEntry::new(usage::KEY_A, "A"),
    KeycodeEntry::new(usage::KEY_B, "B"),
    KeycodeEntry::new(usage::KEY_C, "C"),
    KeycodeEntry::new(usage::KEY_LEFT_SHIFT, "LShift"),
    KeycodeEntry::new(usage::KEY_D, "D"),
    KeycodeEntry::new(usage::KEY_E, "E"),
    KeycodeEntry::new(usage::KEY_F, "F"),
    KeycodeEntry::new(usage::KEY_LEFT_CTRL, "LCtrl"),
    KeycodeEntry::new(usage::KEY_ESCAPE, "Esc"),
    KeycodeEntry::new(usage::KEY_TAB, "Tab"),
    KeycodeEntry::new(usage::KEY_SPACE, "Space"),
    KeycodeEntry::new(usage::KEY_ENTER, "Enter"),
]);
