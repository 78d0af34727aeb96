use core::time::Duration;

/// Monotonic timestamp in milliseconds since boot.
///
/// The firmware fills this from the Embassy time driver; host tests
/// build it directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant {
    millis: u64,
}

impl Instant {
    pub const ZERO: Instant = Instant { millis: 0 };

    pub const fn from_millis(millis: u64) -> Self {
        Instant { millis }
    }

    pub const fn as_millis(self) -> u64 {
        self.millis
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is
    /// actually later.
    pub fn saturating_duration_since(self, earlier: Instant) -> Duration {
        Duration::from_millis(self.millis.saturating_sub(earlier.millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_between_instants() {
        let pressed = Instant::from_millis(120);
        let released = Instant::from_millis(185);
        assert_eq!(
            released.saturating_duration_since(pressed),
            Duration::from_millis(65)
        );
    }

    #[test]
    fn clock_going_backwards_saturates() {
        let later = Instant::from_millis(50);
        assert_eq!(
            Instant::ZERO.saturating_duration_since(later),
            Duration::ZERO
        );
        assert!(Instant::ZERO < later);
        assert_eq!(later.as_millis(), 50);
    }
}
