#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Hsb`**: An 8-bit hue, saturation and brightness triple
//! - **`to_device_color`**: Pure HSB to 8-bit RGB conversion
//! - **`DeviceColor`**: The converter's output, a `palette::Srgb<u8>`
//! - **`IntervalTimer`**: Non-blocking, rearmable deadline on a monotonic clock
//! - **`ColorWheel`**: Polling driver that sweeps a sink around the hue wheel
//! - **`WheelConfig`**: Step interval, hue step, saturation and brightness for a wheel
//! - **`ColorSink`**: Trait to implement for your LED hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Hue is cyclic and 8-bit: incrementing past 255 wraps to 0.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub(crate) mod fmt;

pub mod time;
pub mod timer;
pub mod hsb;
pub mod sink;
pub mod types;
pub mod wheel;

pub use hsb::{BLACK, DeviceColor, Hsb, pack_rgb555, pack_rgb888, to_device_color};
pub use sink::ColorSink;
pub use time::{TimeDuration, TimeInstant, TimeSource};
#[cfg(feature = "std")]
pub use time::StdClock;
pub use timer::IntervalTimer;
pub use types::{ConfigError, DEFAULT_STEP_MILLIS, WheelBuilder, WheelConfig};
pub use wheel::{ColorWheel, ServiceTiming, WheelError, WheelState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sweep_returns_to_red() {
        let first = Hsb::new(0, 255, 255);
        let last = first.rotated(255);

        assert_eq!(to_device_color(first.hue, 255, 255), DeviceColor::new(255, 0, 0));
        assert_eq!(last.rotated(1), first);
    }
}
