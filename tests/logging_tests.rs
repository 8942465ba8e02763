//! Integration tests for log output through the `log` facade
//!
//! Only built when `log` is the active backend (`defmt` takes precedence).

#![cfg(all(feature = "log", not(feature = "defmt")))]

mod common;
use common::*;

use std::sync::Mutex;

use hsb_colorwheel::{ColorWheel, WheelConfig};
use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Logger that keeps every record in memory
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

fn logged(level: Level, message: &str) -> bool {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .any(|(l, m)| *l == level && m == message)
}

#[test]
fn wheel_logs_lifecycle_and_every_push() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let timer = MockTimeSource::new();
    let mut wheel = ColorWheel::<TestInstant, MockSink, MockTimeSource>::new(
        MockSink::new(),
        &timer,
        WheelConfig::default(),
    );

    wheel.start().unwrap();
    timer.advance(TestDuration(10));
    wheel.service().unwrap();
    wheel.stop().unwrap();

    assert!(logged(Level::Debug, "color wheel started at hue 0"));
    assert!(logged(Level::Trace, "hue 0 -> rgb(255, 0, 0)"));
    assert!(logged(Level::Trace, "hue 1 -> rgb(255, 5, 0)"));
    assert!(logged(Level::Debug, "color wheel stopped at hue 2"));
}
