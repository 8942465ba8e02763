//! Output side of the color wheel.

use crate::hsb::DeviceColor;

/// Trait for abstracting the device's color output.
///
/// Implement this for your LED hardware (GPIO, PWM, SPI, a smart-LED
/// driver, ...). The wheel calls it once per update.
pub trait ColorSink {
    /// Displays the given color.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn set_color(&mut self, color: DeviceColor);
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    #[inline]
    fn set_color(&mut self, color: DeviceColor) {
        (**self).set_color(color);
    }
}
