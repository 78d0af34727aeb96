//! Report assembly and change detection.

use crate::hid::keyboard::KeyboardReport;
use crate::hid::usage::modifier_bit;
use crate::tracker::ActiveKeySet;

/// Project an active key set onto a boot keyboard report.
///
/// The modifier byte is the OR of every active modifier's bit; the
/// retained regular keycodes fill the array from slot 0 in input-index
/// order and the rest stay zero.
pub fn build_report(active: &ActiveKeySet) -> KeyboardReport {
    let mut report = KeyboardReport::empty();

    for key in &active.modifiers {
        report.modifier |= modifier_bit(key.keycode).unwrap_or(0);
    }
    for (slot, key) in report.keycodes.iter_mut().zip(&active.regular) {
        *slot = key.keycode;
    }

    report
}

/// Remembers the last report handed to the host and only lets changed
/// reports through.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChangeGate {
    last_sent: KeyboardReport,
}

impl ChangeGate {
    /// Starts from the all-released report, so an idle keypad sends
    /// nothing at boot.
    pub const fn new() -> Self {
        Self {
            last_sent: KeyboardReport::empty(),
        }
    }

    /// `true` if `current` differs from the last sent report in any byte.
    pub fn should_send(&self, current: &KeyboardReport) -> bool {
        current.to_bytes() != self.last_sent.to_bytes()
    }

    /// Record `report` as delivered.
    pub fn commit(&mut self, report: KeyboardReport) {
        self.last_sent = report;
    }

    pub fn last_sent(&self) -> &KeyboardReport {
        &self.last_sent
    }
}
