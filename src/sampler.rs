//! Raw input sampling from GPIO pins.
//!
//! Generic over `embedded_hal::digital::InputPin` so the firmware can
//! hand in HAL pins and tests can hand in fakes. Pins are read from the
//! scan loop itself, never from an interrupt, so one sample array is
//! always a single consistent snapshot.

use embedded_hal::digital::InputPin;

use crate::config::INPUTS;
use crate::error::SampleError;
use crate::scan::InputSampler;

/// Electrical level that means "pressed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Switch pulls the pin to ground against a pull-up.
    Low,
    /// Switch pulls the pin to VCC against a pull-down.
    High,
}

pub struct GpioSampler<P> {
    pins: [P; INPUTS],
    active: ActiveLevel,
}

impl<P: InputPin> GpioSampler<P> {
    pub fn new(pins: [P; INPUTS], active: ActiveLevel) -> Self {
        Self { pins, active }
    }
}

impl<P: InputPin> InputSampler for GpioSampler<P> {
    fn sample(&mut self) -> Result<[bool; INPUTS], SampleError> {
        let mut pressed = [false; INPUTS];
        for (out, pin) in pressed.iter_mut().zip(self.pins.iter_mut()) {
            let level = match self.active {
                ActiveLevel::Low => pin.is_low(),
                ActiveLevel::High => pin.is_high(),
            };
            *out = level.map_err(|_| SampleError::Unavailable)?;
        }
        Ok(pressed)
    }
}
