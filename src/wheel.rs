//! Hue sweep driver.
//!
//! Provides [`ColorWheel`], which walks a [`ColorSink`] around the HSB hue
//! wheel one step per timer expiry. It is meant to be polled from a
//! cooperative main loop: call [`ColorWheel::service`] as often as you like
//! and it only does work when the step interval has elapsed.

use crate::fmt::{debug, trace};
use crate::hsb::{BLACK, DeviceColor};
use crate::sink::ColorSink;
use crate::time::{TimeInstant, TimeSource};
use crate::timer::IntervalTimer;
use crate::types::WheelConfig;

/// The current state of a color wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WheelState {
    /// Not sweeping. Sink is off.
    Stopped,
    /// Sweeping through the hue wheel.
    Running,
}

/// Timing information returned by service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// A new color was pushed. The next one is due after this interval.
    Updated(D),

    /// Nothing to do yet. Service again after this delay.
    Delay(D),
}

impl<D: Copy> ServiceTiming<D> {
    /// Returns how long the caller may sleep before servicing again.
    pub fn next_in(&self) -> D {
        match self {
            ServiceTiming::Updated(d) | ServiceTiming::Delay(d) => *d,
        }
    }

    /// Returns true if this call pushed a color to the sink.
    pub fn is_update(&self) -> bool {
        matches!(self, ServiceTiming::Updated(_))
    }
}

/// Errors that can occur during wheel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WheelError {
    /// Operation called from an invalid state.
    InvalidState {
        /// State the operation requires
        expected: WheelState,
        /// The actual current state
        actual: WheelState,
    },
}

impl core::fmt::Display for WheelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WheelError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but wheel is {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WheelError {}

/// Sweeps a single color sink through the hue wheel at a fixed rate.
///
/// Each expiry of the internal [`IntervalTimer`] pushes the color for the
/// current hue, advances the hue by the configured step (wrapping at 256)
/// and re-arms the timer.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Color sink implementation type
/// * `T` - Time source implementation type
pub struct ColorWheel<'t, I: TimeInstant, S: ColorSink, T: TimeSource<I>> {
    sink: S,
    time_source: &'t T,
    timer: IntervalTimer<'t, I, T>,
    config: WheelConfig<I::Duration>,
    state: WheelState,
    hue: u8,
    current_color: DeviceColor,
}

impl<'t, I: TimeInstant, S: ColorSink, T: TimeSource<I>> ColorWheel<'t, I, S, T> {
    /// Creates a stopped wheel and turns the sink off.
    pub fn new(mut sink: S, time_source: &'t T, config: WheelConfig<I::Duration>) -> Self {
        sink.set_color(BLACK);

        Self {
            sink,
            time_source,
            timer: IntervalTimer::new(time_source),
            hue: config.start_hue(),
            config,
            state: WheelState::Stopped,
            current_color: BLACK,
        }
    }

    /// Starts sweeping from the current hue.
    ///
    /// The first color is pushed immediately. Must be called from `Stopped`.
    pub fn start(&mut self) -> Result<ServiceTiming<I::Duration>, WheelError> {
        if self.state != WheelState::Stopped {
            return Err(WheelError::InvalidState {
                expected: WheelState::Stopped,
                actual: self.state,
            });
        }

        // Fresh timer is already expired
        self.timer = IntervalTimer::new(self.time_source);
        self.state = WheelState::Running;
        debug!("color wheel started at hue {}", self.hue);

        self.service()
    }

    /// Polls the step timer, pushing the next color if it has expired.
    ///
    /// Must be called from `Running`.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Updated(interval))` - Color pushed, next step due after `interval`
    /// - `Ok(ServiceTiming::Delay(remaining))` - Not due yet
    /// - `Err` - Invalid state
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, WheelError> {
        if self.state != WheelState::Running {
            return Err(WheelError::InvalidState {
                expected: WheelState::Running,
                actual: self.state,
            });
        }

        if !self.timer.is_expired() {
            return Ok(ServiceTiming::Delay(self.timer.remaining()));
        }

        let color = self.config.color_at(self.hue).to_device_color();
        self.sink.set_color(color);
        self.current_color = color;
        trace!(
            "hue {} -> rgb({}, {}, {})",
            self.hue, color.red, color.green, color.blue
        );

        self.hue = self.hue.wrapping_add(self.config.hue_step());

        let interval = self.config.step_interval();
        self.timer.arm(interval);
        Ok(ServiceTiming::Updated(interval))
    }

    /// Stops sweeping and turns the sink off.
    ///
    /// The hue is kept, so a later [`start`](Self::start) continues where
    /// the sweep left off. Must be called from `Running`.
    pub fn stop(&mut self) -> Result<(), WheelError> {
        if self.state != WheelState::Running {
            return Err(WheelError::InvalidState {
                expected: WheelState::Running,
                actual: self.state,
            });
        }

        self.state = WheelState::Stopped;
        self.sink.set_color(BLACK);
        self.current_color = BLACK;
        debug!("color wheel stopped at hue {}", self.hue);

        Ok(())
    }

    /// Sets the hue displayed by the next update.
    pub fn set_hue(&mut self, hue: u8) {
        self.hue = hue;
    }

    /// Returns the hue displayed by the next update.
    pub fn hue(&self) -> u8 {
        self.hue
    }

    /// Returns the current state of the wheel.
    pub fn state(&self) -> WheelState {
        self.state
    }

    /// Returns the color last pushed to the sink.
    pub fn current_color(&self) -> DeviceColor {
        self.current_color
    }

    /// Returns the configuration the wheel was built with.
    pub fn config(&self) -> &WheelConfig<I::Duration> {
        &self.config
    }

    /// Returns a reference to the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the wheel and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
