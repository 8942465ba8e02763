//! HSB (Hue, Saturation, Brightness) to device color conversion.
//!
//! All three channels are 8-bit. Hue is cyclic: 0 and 256 are the same
//! point on the wheel, and the wheel is split into six sectors
//! (red, yellow, green, cyan, blue, magenta) of 256/6 hue units each.
//!
//! Conversion is pure integer arithmetic so it stays cheap on cores
//! without an FPU. [`Hsb::to_srgb`] gives the floating-point equivalent
//! through `palette` when an `Srgb<f32>` is more convenient.

use palette::{FromColor, Hsv, Srgb};

/// Color in the device's native format: three 8-bit channels.
pub type DeviceColor = Srgb<u8>;

/// Device color with all channels off.
pub const BLACK: DeviceColor = DeviceColor::new(0, 0, 0);

/// Hue at which each sector of the wheel starts.
///
/// These are `k * 256 / 6` rounded to the nearest integer, so every sector
/// boundary lands on a real hue value and produces an exact primary or
/// secondary color.
const SECTOR_START: [u16; 7] = [0, 43, 85, 128, 171, 213, 256];

/// A color in HSB space with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsb {
    /// Position on the color wheel (wraps modulo 256).
    pub hue: u8,

    /// Color intensity, 0 is gray and 255 is fully saturated.
    pub saturation: u8,

    /// Overall lightness, 0 is black.
    pub brightness: u8,
}

impl Hsb {
    /// Creates a new HSB color.
    #[inline]
    pub const fn new(hue: u8, saturation: u8, brightness: u8) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Creates an HSB color from a hue wider than 8 bits, wrapping it
    /// modulo 256.
    #[inline]
    pub const fn from_wide_hue(hue: u32, saturation: u8, brightness: u8) -> Self {
        Self::new((hue % 256) as u8, saturation, brightness)
    }

    /// Returns the same color rotated `steps` hue units around the wheel.
    #[inline]
    pub const fn rotated(self, steps: u8) -> Self {
        Self::new(self.hue.wrapping_add(steps), self.saturation, self.brightness)
    }

    /// Converts to the device color representation.
    pub fn to_device_color(self) -> DeviceColor {
        to_device_color(self.hue, self.saturation, self.brightness)
    }

    /// Converts to floating-point sRGB (0.0-1.0 channels) via `palette`.
    ///
    /// Hue maps linearly onto degrees, `hue * 360 / 256`.
    pub fn to_srgb(self) -> Srgb {
        let hsv = Hsv::new(
            f32::from(self.hue) * (360.0 / 256.0),
            f32::from(self.saturation) / 255.0,
            f32::from(self.brightness) / 255.0,
        );
        Srgb::from_color(hsv)
    }
}

impl From<Hsb> for DeviceColor {
    fn from(hsb: Hsb) -> Self {
        hsb.to_device_color()
    }
}

impl From<(u8, u8, u8)> for Hsb {
    fn from((hue, saturation, brightness): (u8, u8, u8)) -> Self {
        Hsb::new(hue, saturation, brightness)
    }
}

/// Converts an HSB triple to a device color.
///
/// Total over the whole 8-bit domain. Saturation 0 gives gray at the
/// brightness level, brightness 0 gives black, and at full saturation and
/// brightness each sector boundary gives an exact primary or secondary.
pub fn to_device_color(hue: u8, saturation: u8, brightness: u8) -> DeviceColor {
    if saturation == 0 {
        return DeviceColor::new(brightness, brightness, brightness);
    }

    let hue = u16::from(hue);
    let sector = SECTOR_START[1..]
        .iter()
        .position(|&end| hue < end)
        .unwrap_or(5);
    let start = SECTOR_START[sector];
    let len = SECTOR_START[sector + 1] - start;

    // 0..=249 across the sector
    let frac = u32::from((hue - start) * 255 / len);

    let v = u32::from(brightness);
    let s = u32::from(saturation);

    let floor = scale(v, 255 - s);
    let falling = scale(v, 255 - s * frac / 255);
    let rising = scale(v, 255 - s * (255 - frac) / 255);

    let (red, green, blue) = match sector {
        0 => (v, rising, floor),
        1 => (falling, v, floor),
        2 => (floor, v, rising),
        3 => (floor, falling, v),
        4 => (rising, floor, v),
        _ => (v, floor, falling),
    };

    DeviceColor::new(red as u8, green as u8, blue as u8)
}

/// `value * factor / 255`, both operands in 0..=255.
#[inline]
fn scale(value: u32, factor: u32) -> u32 {
    value * factor / 255
}

/// Packs a device color as `0x00RRGGBB`.
#[inline]
pub fn pack_rgb888(color: DeviceColor) -> u32 {
    (u32::from(color.red) << 16) | (u32::from(color.green) << 8) | u32::from(color.blue)
}

/// Packs a device color into 15 bits, 5 per channel, red in the high bits.
///
/// Small LED tiles often only resolve 5 bits per channel; the low 3 bits of
/// each channel are dropped.
#[inline]
pub fn pack_rgb555(color: DeviceColor) -> u16 {
    (u16::from(color.red >> 3) << 10)
        | (u16::from(color.green >> 3) << 5)
        | u16::from(color.blue >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_boundaries_are_exact_primaries_and_secondaries() {
        let expected = [
            (0, (255, 0, 0)),
            (43, (255, 255, 0)),
            (85, (0, 255, 0)),
            (128, (0, 255, 255)),
            (171, (0, 0, 255)),
            (213, (255, 0, 255)),
        ];

        for (hue, (r, g, b)) in expected {
            assert_eq!(
                to_device_color(hue, 255, 255),
                DeviceColor::new(r, g, b),
                "hue {hue}"
            );
        }
    }

    #[test]
    fn zero_brightness_is_black() {
        for hue in [0u8, 1, 42, 43, 100, 200, 255] {
            for saturation in [0u8, 1, 128, 255] {
                assert_eq!(to_device_color(hue, saturation, 0), BLACK);
            }
        }
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(to_device_color(77, 0, 128), DeviceColor::new(128, 128, 128));
        assert_eq!(to_device_color(200, 0, 255), DeviceColor::new(255, 255, 255));
    }

    #[test]
    fn half_saturation_lifts_floor() {
        // floor = 255 * (255 - 128) / 255
        assert_eq!(to_device_color(0, 128, 255), DeviceColor::new(255, 127, 127));
    }

    #[test]
    fn last_hue_wraps_back_toward_red() {
        assert_eq!(to_device_color(255, 255, 255), DeviceColor::new(255, 0, 6));
    }

    #[test]
    fn wide_hue_wraps_modulo_256() {
        assert_eq!(Hsb::from_wide_hue(256, 255, 255), Hsb::new(0, 255, 255));
        assert_eq!(Hsb::from_wide_hue(300, 1, 2), Hsb::new(44, 1, 2));
        assert_eq!(Hsb::new(250, 255, 255).rotated(10).hue, 4);
    }

    #[test]
    fn packing() {
        let color = DeviceColor::new(0x12, 0x34, 0x56);
        assert_eq!(pack_rgb888(color), 0x0012_3456);
        assert_eq!(pack_rgb555(DeviceColor::new(255, 0, 0)), 0b11111_00000_00000);
        assert_eq!(pack_rgb555(DeviceColor::new(0, 255, 8)), 0b00000_11111_00001);
    }

    #[test]
    fn srgb_matches_primaries() {
        let red = Hsb::new(0, 255, 255).to_srgb();
        assert!((red.red - 1.0).abs() < 0.001);
        assert!(red.green.abs() < 0.001);
        assert!(red.blue.abs() < 0.001);

        let cyan = Hsb::new(128, 255, 255).to_srgb();
        assert!(cyan.red.abs() < 0.001);
        assert!((cyan.green - 1.0).abs() < 0.001);
        assert!((cyan.blue - 1.0).abs() < 0.001);
    }
}
