//! The scan cycle: sample → debounce → track → build → gate → transmit.
//!
//! [`Keypad`] owns every piece of per-cycle state and runs one cycle per
//! [`Keypad::scan`] call. Calls are strictly sequential, so `last_sent`
//! and the debounce state are only ever touched from the scan context and
//! need no locking.

use crate::config::INPUTS;
use crate::debounce::{Debouncer, InputState, KeyState, Transition};
use crate::error::{ConfigError, Error, SampleError, TransmitError};
use crate::hid::keyboard::KeyboardReport;
use crate::keymap::KeycodeTable;
use crate::report::{build_report, ChangeGate};
use crate::time::Instant;
use crate::tracker::KeyStateTracker;
use crate::{kp_debug, kp_info, kp_trace, kp_warn};

/// Source of raw per-input "pressed" levels. Must return in bounded time.
pub trait InputSampler {
    fn sample(&mut self) -> Result<[bool; INPUTS], SampleError>;
}

/// Hands a finished report to the USB side. Failures are not retried
/// by the keypad.
pub trait ReportTransmitter {
    fn transmit(&mut self, report: &KeyboardReport) -> Result<(), TransmitError>;
}

/// Result of a cycle that ran to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// The report matches the last one sent; nothing was transmitted.
    Unchanged,
    /// A changed report was transmitted and is now `last_sent`.
    Sent(KeyboardReport),
}

pub struct Keypad<'t, S, T> {
    tracker: KeyStateTracker<'t>,
    debouncers: [Debouncer; INPUTS],
    gate: ChangeGate,
    sampler: S,
    transmitter: T,
}

impl<'t, S: InputSampler, T: ReportTransmitter> Keypad<'t, S, T> {
    /// Validate the configuration and build an idle keypad.
    ///
    /// A bad table or debounce window is returned as
    /// [`Error::Config`]; the scan loop must not start in that case.
    pub fn new(
        table: &'t KeycodeTable,
        debounce_window: u8,
        sampler: S,
        transmitter: T,
    ) -> Result<Self, Error> {
        table.validate()?;
        let debouncer = Debouncer::new(debounce_window)?;

        kp_info!("Keypad ready: {} inputs, debounce window {}", INPUTS, debounce_window);

        Ok(Self {
            tracker: KeyStateTracker::new(table),
            debouncers: [debouncer; INPUTS],
            gate: ChangeGate::new(),
            sampler,
            transmitter,
        })
    }

    /// Run one scan cycle.
    ///
    /// - [`Error::Sample`]: the inputs could not be read. Debounce state is
    ///   untouched and no report is built, as if nothing changed.
    /// - [`Error::Transmit`]: the report was built but not accepted.
    ///   `last_sent` keeps its old value, so the report is offered again by
    ///   the next cycle that still sees the difference.
    pub fn scan(&mut self, now: Instant) -> Result<CycleOutcome, Error> {
        let raw = match self.sampler.sample() {
            Ok(raw) => raw,
            Err(e) => {
                kp_warn!("Scan skipped: {}", e);
                return Err(e.into());
            }
        };

        for (i, (debouncer, &pressed)) in self.debouncers.iter_mut().zip(&raw).enumerate() {
            let pressed_at = debouncer.state().last_transition;
            match debouncer.sample(pressed, now) {
                Some(Transition::Pressed) => {
                    kp_trace!("Input {} pressed", i);
                }
                Some(Transition::Released) => {
                    let held = now.saturating_duration_since(pressed_at);
                    kp_trace!("Input {} released after {} ms", i, held.as_millis() as u64);
                }
                None => {}
            }
        }

        let active = self.tracker.update(&self.stable_states());
        let report = build_report(&active);

        if !self.gate.should_send(&report) {
            return Ok(CycleOutcome::Unchanged);
        }

        if active.overflowed() {
            kp_debug!("Rollover: {} key(s) held but not reported", active.dropped.len());
        }

        match self.transmitter.transmit(&report) {
            Ok(()) => {
                self.gate.commit(report);
                Ok(CycleOutcome::Sent(report))
            }
            Err(e) => {
                kp_warn!("Report not transmitted: {}", e);
                Err(e.into())
            }
        }
    }

    /// Debounced state of every input.
    pub fn stable_states(&self) -> [KeyState; INPUTS] {
        let mut states = [KeyState::Released; INPUTS];
        for (state, debouncer) in states.iter_mut().zip(&self.debouncers) {
            *state = debouncer.stable();
        }
        states
    }

    /// Debounce bookkeeping of input `index`.
    pub fn input_state(&self, index: usize) -> Result<&InputState, ConfigError> {
        self.debouncers
            .get(index)
            .map(Debouncer::state)
            .ok_or(ConfigError::InputOutOfRange(index))
    }

    pub fn last_sent(&self) -> &KeyboardReport {
        self.gate.last_sent()
    }

    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }
}
