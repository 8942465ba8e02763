//! Shared test infrastructure for hsb-colorwheel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use hsb_colorwheel::{ColorSink, DeviceColor, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Sink
// ============================================================================

/// Mock sink that records every pushed color
pub struct MockSink {
    current_color: DeviceColor,
    color_history: heapless::Vec<DeviceColor, 512>,
}

impl MockSink {
    pub fn new() -> Self {
        Self {
            current_color: DeviceColor::new(0, 0, 0),
            color_history: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> DeviceColor {
        self.current_color
    }

    pub fn color_history(&self) -> &[DeviceColor] {
        &self.color_history
    }
}

impl ColorSink for MockSink {
    fn set_color(&mut self, color: DeviceColor) {
        self.current_color = color;
        let _ = self.color_history.push(color);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Largest per-channel difference between two colors
pub fn max_channel_delta(a: DeviceColor, b: DeviceColor) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}
