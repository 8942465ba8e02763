//! Terminal color wheel.
//!
//! Drives a `ColorWheel` with the std monotonic clock and paints each pushed
//! color as a 24-bit ANSI swatch. Sleeps for the interval the wheel reports
//! between polls and stops after one full turn of the hue wheel.
//!
//! Run with `cargo run --example colorwheel --features std`.

use std::io::Write;
use std::time::{Duration, Instant};

use hsb_colorwheel::{ColorSink, ColorWheel, DeviceColor, StdClock, WheelConfig, pack_rgb888};

/// Sink that paints each color into the terminal.
struct TerminalSwatch {
    updates: usize,
}

impl ColorSink for TerminalSwatch {
    fn set_color(&mut self, color: DeviceColor) {
        self.updates += 1;
        print!(
            "\r\x1b[48;2;{};{};{}m        \x1b[0m #{:06x}",
            color.red,
            color.green,
            color.blue,
            pack_rgb888(color)
        );
        let _ = std::io::stdout().flush();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clock = StdClock::new();
    let config = WheelConfig::builder()
        .step_interval(Duration::from_millis(10))
        .build()?;

    let sink = TerminalSwatch { updates: 0 };
    let mut wheel: ColorWheel<Instant, _, _> = ColorWheel::new(sink, &clock, config);

    let mut timing = wheel.start()?;

    // Construction pushes black, then one color per hue
    while wheel.sink().updates < 257 {
        std::thread::sleep(timing.next_in());
        timing = wheel.service()?;
    }

    wheel.stop()?;
    println!(
        "\nfull turn: 256 steps of {:?}, back at hue {}",
        wheel.config().step_interval(),
        wheel.hue()
    );

    Ok(())
}
