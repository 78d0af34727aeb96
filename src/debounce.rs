//! Per-input debouncing.
//!
//! Each physical input gets its own [`Debouncer`]. A raw sample that
//! disagrees with the stable state bumps a small saturating counter; a
//! sample that agrees resets it. Only when the counter reaches the
//! configured window is the new level accepted and a [`Transition`]
//! emitted. Counting samples rather than comparing clock readings keeps
//! the filter monotonic regardless of what the clock does.
//!
//! Consequences worth knowing:
//!   - an input that bounces faster than the window never changes state;
//!   - a complete press + release shorter than the window is swallowed
//!     and produces no transition at all.

use crate::error::ConfigError;
use crate::time::Instant;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    #[default]
    Released = 0,
    Pressed = 1,
}

impl KeyState {
    pub const fn from_bool(value: bool) -> KeyState {
        match value {
            true => KeyState::Pressed,
            false => KeyState::Released,
        }
    }

    pub const fn is_pressed(self) -> bool {
        matches!(self, KeyState::Pressed)
    }
}

/// A stable state change accepted by the debouncer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    Pressed,
    Released,
}

/// Debounce bookkeeping for one input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState {
    /// Last accepted (stable) level.
    pub stable: KeyState,
    /// Consecutive raw samples that disagreed with `stable`.
    pub pending: u8,
    /// When `stable` last changed.
    pub last_transition: Instant,
}

#[derive(Copy, Clone, Debug)]
pub struct Debouncer {
    window: u8,
    state: InputState,
}

impl Debouncer {
    /// A released input that needs `window` consecutive disagreeing
    /// samples to change state.
    pub const fn new(window: u8) -> Result<Self, ConfigError> {
        if window == 0 {
            return Err(ConfigError::DebounceWindow);
        }
        Ok(Self {
            window,
            state: InputState {
                stable: KeyState::Released,
                pending: 0,
                last_transition: Instant::ZERO,
            },
        })
    }

    /// Feed one raw sample taken at `now`.
    pub fn sample(&mut self, raw_pressed: bool, now: Instant) -> Option<Transition> {
        let raw = KeyState::from_bool(raw_pressed);
        if raw == self.state.stable {
            self.state.pending = 0;
            return None;
        }

        self.state.pending = self.state.pending.saturating_add(1);
        if self.state.pending < self.window {
            return None;
        }

        self.state.stable = raw;
        self.state.pending = 0;
        self.state.last_transition = now;
        Some(match raw {
            KeyState::Pressed => Transition::Pressed,
            KeyState::Released => Transition::Released,
        })
    }

    pub fn stable(&self) -> KeyState {
        self.state.stable
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn zero_window_rejected() {
        assert_eq!(Debouncer::new(0).err(), Some(ConfigError::DebounceWindow));
    }

    #[test]
    fn starts_released() {
        let d = Debouncer::new(3).unwrap();
        assert_eq!(d.stable(), KeyState::Released);
        assert_eq!(d.state().pending, 0);
    }

    #[test]
    fn press_accepted_after_window() {
        let mut d = Debouncer::new(3).unwrap();
        assert_eq!(d.sample(true, at(1)), None);
        assert_eq!(d.sample(true, at(2)), None);
        assert_eq!(d.sample(true, at(3)), Some(Transition::Pressed));
        assert_eq!(d.stable(), KeyState::Pressed);
        assert_eq!(d.state().last_transition, at(3));

        // Holding produces nothing further.
        assert_eq!(d.sample(true, at(4)), None);
        assert_eq!(d.sample(true, at(5)), None);
    }

    #[test]
    fn release_accepted_after_window() {
        let mut d = Debouncer::new(2).unwrap();
        d.sample(true, at(0));
        assert_eq!(d.sample(true, at(1)), Some(Transition::Pressed));
        assert_eq!(d.sample(false, at(2)), None);
        assert_eq!(d.sample(false, at(3)), Some(Transition::Released));
        assert_eq!(d.stable(), KeyState::Released);
        assert_eq!(d.state().last_transition, at(3));
    }

    #[test]
    fn window_of_one_is_immediate() {
        let mut d = Debouncer::new(1).unwrap();
        assert_eq!(d.sample(true, at(7)), Some(Transition::Pressed));
        assert_eq!(d.sample(false, at(8)), Some(Transition::Released));
    }

    #[test]
    fn bouncing_faster_than_window_never_transitions() {
        let mut d = Debouncer::new(3).unwrap();
        for ms in 0..100 {
            // Two "pressed" reads then one "released" read, forever.
            let raw = ms % 3 != 2;
            assert_eq!(d.sample(raw, at(ms)), None);
        }
        assert_eq!(d.stable(), KeyState::Released);
        assert_eq!(d.state().last_transition, Instant::ZERO);
    }

    #[test]
    fn bouncing_keeps_pressed_state_too() {
        let mut d = Debouncer::new(2).unwrap();
        d.sample(true, at(0));
        d.sample(true, at(1));
        assert_eq!(d.stable(), KeyState::Pressed);
        for ms in 2..50 {
            assert_eq!(d.sample(ms % 2 == 0, at(ms)), None);
        }
        assert_eq!(d.stable(), KeyState::Pressed);
    }

    #[test]
    fn short_tap_is_coalesced() {
        let mut d = Debouncer::new(4).unwrap();
        // Pressed for fewer samples than the window, then released.
        assert_eq!(d.sample(true, at(0)), None);
        assert_eq!(d.sample(true, at(1)), None);
        assert_eq!(d.sample(false, at(2)), None);
        assert_eq!(d.sample(false, at(3)), None);
        assert_eq!(d.stable(), KeyState::Released);
    }

    #[test]
    fn counter_saturates_with_max_window() {
        let mut d = Debouncer::new(u8::MAX).unwrap();
        for ms in 0..(u8::MAX as u64 - 1) {
            assert_eq!(d.sample(true, at(ms)), None);
        }
        assert_eq!(d.sample(true, at(300)), Some(Transition::Pressed));
    }
}
