//! Non-blocking interval timer.
//!
//! [`IntervalTimer`] records when it was armed and for how long, and answers
//! "has the interval elapsed?" against a borrowed [`TimeSource`]. It never
//! sleeps, never re-arms itself and has no cancellation: arming again simply
//! overwrites the previous deadline.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// A rearmable one-shot deadline measured against a monotonic clock.
///
/// A new timer is unarmed, and an unarmed timer reports itself as expired,
/// so the first poll of a freshly created timer fires immediately.
///
/// Expiry is derived from the time elapsed since arming rather than by
/// comparing instants, so instant types backed by a wrapping hardware
/// counter work across a counter wrap.
///
/// With a wrapping counter the elapsed time is only known modulo the wrap
/// period. Both the armed interval and the gap between arming and the last
/// poll must stay under that period: once a full period has passed, an
/// expired timer reads as unexpired again.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct IntervalTimer<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    armed_at: Option<I>,
    duration: I::Duration,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> IntervalTimer<'t, I, T> {
    /// Creates an unarmed (already expired) timer.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            armed_at: None,
            duration: I::Duration::ZERO,
        }
    }

    /// Arms the timer so that it expires `duration` from now.
    pub fn arm(&mut self, duration: I::Duration) {
        self.armed_at = Some(self.time_source.now());
        self.duration = duration;
    }

    /// Arms the timer with a duration given in milliseconds.
    #[inline]
    pub fn arm_millis(&mut self, millis: u64) {
        self.arm(I::Duration::from_millis(millis));
    }

    /// Returns true once the current time has reached the deadline.
    ///
    /// Does not re-arm. An unarmed timer is always expired. Stays true until
    /// re-armed, provided it is polled within one counter wrap period of
    /// arming (see the type docs).
    pub fn is_expired(&self) -> bool {
        match self.armed_at {
            None => true,
            Some(armed_at) => self.time_source.now().duration_since(armed_at) >= self.duration,
        }
    }

    /// Returns the time left until expiry, or zero if already expired.
    pub fn remaining(&self) -> I::Duration {
        match self.armed_at {
            None => I::Duration::ZERO,
            Some(armed_at) => {
                let elapsed = self.time_source.now().duration_since(armed_at);
                self.duration.saturating_sub(elapsed)
            }
        }
    }

    /// Returns the instant the timer expires at.
    ///
    /// `None` when the timer was never armed, or when the deadline cannot be
    /// represented by the instant type.
    pub fn deadline(&self) -> Option<I> {
        self.armed_at?.checked_add(self.duration)
    }

    /// Returns the most recently configured interval.
    pub fn duration(&self) -> I::Duration {
        self.duration
    }

    /// Returns true if the timer has been armed at least once.
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }
}
