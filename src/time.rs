//! Time abstraction traits for platform-agnostic timing.
//!
//! The timer and the color wheel only ever ask "what time is it" and "how
//! long since then", so any monotonic counter (SysTick millis, an RTC, an
//! `embassy_time::Instant`, `std::time::Instant`) can drive them.

/// Trait for abstracting monotonic time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
///
/// Durations are unsigned, so a negative interval cannot be expressed.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Wrapping counters should use wrapping subtraction here so that
    /// intervals shorter than the wrap period stay correct.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

#[cfg(feature = "std")]
mod std_clock {
    use super::{TimeDuration, TimeInstant, TimeSource};

    impl TimeDuration for std::time::Duration {
        const ZERO: Self = std::time::Duration::ZERO;

        fn as_millis(&self) -> u64 {
            u64::try_from(std::time::Duration::as_millis(self)).unwrap_or(u64::MAX)
        }

        fn from_millis(millis: u64) -> Self {
            std::time::Duration::from_millis(millis)
        }

        fn saturating_sub(self, other: Self) -> Self {
            std::time::Duration::saturating_sub(self, other)
        }
    }

    impl TimeInstant for std::time::Instant {
        type Duration = std::time::Duration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            self.saturating_duration_since(earlier)
        }

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            std::time::Instant::checked_add(&self, duration)
        }
    }

    /// Monotonic time source backed by [`std::time::Instant`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct StdClock;

    impl StdClock {
        /// Creates a clock reading `std::time::Instant::now()`.
        pub fn new() -> Self {
            Self
        }
    }

    impl TimeSource<std::time::Instant> for StdClock {
        fn now(&self) -> std::time::Instant {
            std::time::Instant::now()
        }
    }
}

#[cfg(feature = "std")]
pub use std_clock::StdClock;

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock::new();
        let earlier = clock.now();
        let later = clock.now();
        assert!(later.duration_since(earlier) >= std::time::Duration::ZERO);
        assert_eq!(earlier.duration_since(later), std::time::Duration::ZERO);
    }

    #[test]
    fn std_duration_millis_round_trip() {
        let d = <std::time::Duration as TimeDuration>::from_millis(10);
        assert_eq!(TimeDuration::as_millis(&d), 10);
        assert_eq!(
            TimeDuration::saturating_sub(d, std::time::Duration::from_millis(20)),
            std::time::Duration::ZERO
        );
    }
}
