//! Configuration types for the color wheel.

use crate::hsb::Hsb;
use crate::time::TimeDuration;

/// Default time between hue steps: 256 steps take about 2.5 seconds.
pub const DEFAULT_STEP_MILLIS: u64 = 10;

/// Validated color wheel configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelConfig<D: TimeDuration> {
    step_interval: D,
    hue_step: u8,
    saturation: u8,
    brightness: u8,
    start_hue: u8,
}

impl<D: TimeDuration> WheelConfig<D> {
    /// Creates a new configuration builder.
    pub fn builder() -> WheelBuilder<D> {
        WheelBuilder::new()
    }

    /// Time between hue steps.
    #[inline]
    pub fn step_interval(&self) -> D {
        self.step_interval
    }

    /// Hue units advanced per step.
    #[inline]
    pub fn hue_step(&self) -> u8 {
        self.hue_step
    }

    /// Saturation used for every step.
    #[inline]
    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Brightness used for every step.
    #[inline]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Hue displayed by the first update.
    #[inline]
    pub fn start_hue(&self) -> u8 {
        self.start_hue
    }

    /// HSB color for the given hue under this configuration.
    #[inline]
    pub fn color_at(&self, hue: u8) -> Hsb {
        Hsb::new(hue, self.saturation, self.brightness)
    }
}

impl<D: TimeDuration> Default for WheelConfig<D> {
    /// Full saturation and brightness, one hue unit every 10 ms, from red.
    fn default() -> Self {
        Self {
            step_interval: D::from_millis(DEFAULT_STEP_MILLIS),
            hue_step: 1,
            saturation: u8::MAX,
            brightness: u8::MAX,
            start_hue: 0,
        }
    }
}

/// Builder for constructing validated wheel configurations.
#[derive(Debug)]
pub struct WheelBuilder<D: TimeDuration> {
    config: WheelConfig<D>,
}

impl<D: TimeDuration> WheelBuilder<D> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: WheelConfig::default(),
        }
    }

    /// Sets the time between hue steps.
    pub fn step_interval(mut self, interval: D) -> Self {
        self.config.step_interval = interval;
        self
    }

    /// Sets how many hue units each step advances.
    pub fn hue_step(mut self, step: u8) -> Self {
        self.config.hue_step = step;
        self
    }

    /// Sets the saturation used for every step.
    pub fn saturation(mut self, saturation: u8) -> Self {
        self.config.saturation = saturation;
        self
    }

    /// Sets the brightness used for every step.
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.config.brightness = brightness;
        self
    }

    /// Sets the hue displayed by the first update.
    pub fn start_hue(mut self, hue: u8) -> Self {
        self.config.start_hue = hue;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `ZeroHueStep` - The hue step is 0, so the wheel would never turn
    pub fn build(self) -> Result<WheelConfig<D>, ConfigError> {
        if self.config.hue_step == 0 {
            return Err(ConfigError::ZeroHueStep);
        }

        Ok(self.config)
    }
}

impl<D: TimeDuration> Default for WheelBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Hue step of zero.
    ZeroHueStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroHueStep => {
                write!(f, "hue step must be non-zero or the wheel never advances")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
