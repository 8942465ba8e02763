#![no_std]
#![no_main]

use cortex_m_rt::entry;
use hsb_colorwheel::{
    ColorSink, ColorWheel, DeviceColor, IntervalTimer, TimeDuration, TimeInstant, TimeSource,
    WheelConfig, pack_rgb555,
};
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(u32::try_from(millis).unwrap_or(u32::MAX))
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration32(self.0.saturating_sub(other.0))
    }
}

/// Minimal 32-bit millisecond instant, wrapping after ~49.7 days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.wrapping_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(Instant32)
    }
}

// ============================================================================
// Minimal Sink Implementation
// ============================================================================

/// Sink that packs to the 15-bit tile format and discards the result
pub struct MinimalSink;

impl ColorSink for MinimalSink {
    fn set_color(&mut self, color: DeviceColor) {
        core::hint::black_box(pack_rgb555(color));
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_library() {
    let time_source = MinimalTimeSource;

    let mut timer = IntervalTimer::<Instant32, _>::new(&time_source);
    timer.arm(Duration32(10));
    core::hint::black_box(timer.is_expired());

    let mut wheel =
        ColorWheel::<Instant32, _, _>::new(MinimalSink, &time_source, WheelConfig::default());
    let _ = wheel.start();
    let _ = wheel.service();
    let _ = wheel.stop();
    core::hint::black_box(wheel);
}

#[entry]
fn main() -> ! {
    exercise_library();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
