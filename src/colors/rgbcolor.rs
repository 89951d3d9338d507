//! This file implements the RGB half of a CSS color: three channels on the familiar 0-255 scale.
//! Unlike most RGB types, the channels are floats and are not rounded when stored. CSS allows
//! `rgb(56, 38.2, 12)`, and that 38.2 survives until the color is rendered back out as text, at
//! which point the formatter decides whether to round.

use bound::{clamp, Bound};
use colors::hslcolor::HSLColor;

/// A color in sRGB, with each channel ranging from 0 to 255. Fractional channels are allowed.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, from 0 to 255.
    pub r: f64,
    /// The green channel, from 0 to 255.
    pub g: f64,
    /// The blue channel, from 0 to 255.
    pub b: f64,
}

impl RGBColor {
    /// Scales every channel by the given alpha, as if compositing over black. This is what
    /// "premultiplied" means for the formatters: `rgb(255, 2, 24)` at alpha 0.1 becomes
    /// `rgb(25.5, 0.2, 2.4)`.
    pub fn premultiply(self, alpha: f64) -> RGBColor {
        RGBColor {
            r: self.r * alpha,
            g: self.g * alpha,
            b: self.b * alpha,
        }
    }

    /// Rounds each channel to the nearest integer, halves rounding up.
    pub fn round(self) -> RGBColor {
        RGBColor {
            r: round_half_up(self.r),
            g: round_half_up(self.g),
            b: round_half_up(self.b),
        }
    }
}

/// Rounds to the nearest integer with ties going towards positive infinity, which is what CSS
/// tooling conventionally does (`f64::round` sends -0.5 to -1, this sends it to 0).
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 255.), (0., 255.), (0., 255.)]
    }

    fn clamp(self) -> RGBColor {
        let [(r_min, r_max), (g_min, g_max), (b_min, b_max)] = RGBColor::bounds();
        RGBColor {
            r: clamp(self.r, r_min, r_max),
            g: clamp(self.g, g_min, g_max),
            b: clamp(self.b, b_min, b_max),
        }
    }
}

impl From<HSLColor> for RGBColor {
    /// Converts with the standard CSS algorithm. The resulting channels are rounded to integers,
    /// so HSL to RGB is lossy: converting back won't always reproduce the exact HSL input.
    fn from(hsl: HSLColor) -> RGBColor {
        let hue = hsl.h / 360.0;
        let (s, l) = (hsl.s, hsl.l);

        let (r, g, b) = if s == 0.0 {
            // no saturation: a gray, completely determined by the lightness
            (l, l, l)
        } else {
            let val2 = if l < 0.5 { l * (1.0 + s) } else { l + s - s * l };
            let val1 = 2.0 * l - val2;
            (
                hue_to_channel(val1, val2, hue + 1.0 / 3.0),
                hue_to_channel(val1, val2, hue),
                hue_to_channel(val1, val2, hue - 1.0 / 3.0),
            )
        };

        RGBColor {
            r: round_half_up(r * 255.0),
            g: round_half_up(g * 255.0),
            b: round_half_up(b * 255.0),
        }
    }
}

/// The piecewise-linear ramp that turns a hue fraction into one channel's intensity. `val1` is the
/// channel's floor and `val2` its peak; the hue is first wrapped into [0, 1].
fn hue_to_channel(val1: f64, val2: f64, hue: f64) -> f64 {
    let hue = if hue < 0.0 {
        hue + 1.0
    } else if hue > 1.0 {
        hue - 1.0
    } else {
        hue
    };

    if 6.0 * hue < 1.0 {
        val1 + (val2 - val1) * 6.0 * hue
    } else if 2.0 * hue < 1.0 {
        val2
    } else if 3.0 * hue < 2.0 {
        val1 + (val2 - val1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        val1
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn rgb_of(h: f64, s: f64, l: f64) -> RGBColor {
        RGBColor::from(HSLColor { h, s, l })
    }

    #[test]
    fn test_saturated_hsl_to_rgb() {
        assert_eq!(rgb_of(300.0, 1.0, 0.98), RGBColor { r: 255., g: 245., b: 255. });
        assert_eq!(rgb_of(24.0, 0.7, 0.46), RGBColor { r: 199., g: 101., b: 35. });
        assert_eq!(rgb_of(246.0, 1.0, 0.42), RGBColor { r: 21., g: 0., b: 214. });
        // pure primaries
        assert_eq!(rgb_of(0.0, 1.0, 0.5), RGBColor { r: 255., g: 0., b: 0. });
        assert_eq!(rgb_of(120.0, 1.0, 0.5), RGBColor { r: 0., g: 255., b: 0. });
        assert_eq!(rgb_of(240.0, 1.0, 0.5), RGBColor { r: 0., g: 0., b: 255. });
    }

    #[test]
    fn test_achromatic_hsl_to_rgb() {
        assert_eq!(rgb_of(0.0, 0.0, 1.0), RGBColor { r: 255., g: 255., b: 255. });
        assert_eq!(rgb_of(0.0, 0.0, 0.39), RGBColor { r: 99., g: 99., b: 99. });
        assert_eq!(rgb_of(0.0, 0.0, 0.14), RGBColor { r: 36., g: 36., b: 36. });
        // hue doesn't matter without saturation
        assert_eq!(rgb_of(200.0, 0.0, 0.14), rgb_of(0.0, 0.0, 0.14));
    }

    #[test]
    fn test_hue_to_channel_wraps() {
        // a hue of 1 + x behaves like x, and -x like 1 - x
        assert_eq!(hue_to_channel(0.2, 0.8, 1.1), hue_to_channel(0.2, 0.8, 1.1 - 1.0));
        assert_eq!(hue_to_channel(0.2, 0.8, -0.25), hue_to_channel(0.2, 0.8, 0.75));
        assert_eq!(hue_to_channel(0.2, 0.8, 0.3), 0.8);
        assert_eq!(hue_to_channel(0.2, 0.8, 0.9), 0.2);
    }

    #[test]
    fn test_premultiply() {
        let rgb = RGBColor { r: 255., g: 2., b: 24. }.premultiply(0.1);
        assert_eq!(rgb.round(), RGBColor { r: 26., g: 0., b: 2. });
    }

    #[test]
    fn test_clamp() {
        let rgb = RGBColor { r: -3., g: 300., b: 38.2 }.clamp();
        assert_eq!(rgb, RGBColor { r: 0., g: 255., b: 38.2 });
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(25.5), 26.);
        assert_eq!(round_half_up(2.4), 2.);
        assert_eq!(round_half_up(0.5), 1.);
        assert_eq!(round_half_up(-0.5), 0.);
    }
}
