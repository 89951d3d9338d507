//! This file implements HSL the way CSS defines it: a simple cylindrical transformation of sRGB,
//! with hue as an angle and saturation and lightness as fractions. HSL has all of the problems with
//! perceptual uniformity that sRGB does, but it's what CSS speaks, and it gives a more intuitive
//! handle on "make this lighter" or "rotate the hue" than raw channels do.
//!
//! A small implementation note: converting any gray (red, green and blue all equal) gives a hue and
//! saturation of exactly 0, with no tolerance for nearly-gray colors. The hue of a gray is
//! undefined, and 0 is as good as anything else.

use bound::{clamp, Bound};
use colors::rgbcolor::RGBColor;

/// A color in CSS HSL. Alpha is not part of this type: a CSS color shares one alpha between its RGB
/// and HSL forms.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, in degrees. Ranges from 0 up to, but not including, 360.
    pub h: f64,
    /// The saturation component. Ranges between 0 and 1.
    pub s: f64,
    /// The lightness component. Ranges from 0 to 1, with 0.5 being the most colorful.
    pub l: f64,
}

/// Brings a hue into [0, 360). Negative hues become 0 rather than wrapping around, so -24 gives 0 and
/// not 336; anything that isn't finite also gives 0.
pub(crate) fn clamp_hue(hue: f64) -> f64 {
    let hue = if hue < 0.0 { 0.0 } else { hue };
    let wrapped = hue % 360.0;
    if wrapped.is_finite() {
        wrapped
    } else {
        0.0
    }
}

impl Bound for HSLColor {
    /// The hue pair is only nominal: hue is never clamped to 360. `clamp` wraps it into [0, 360)
    /// instead, with negative hues going to 0, so 375 becomes 15 rather than 360.
    fn bounds() -> [(f64, f64); 3] {
        [(0., 360.), (0., 1.), (0., 1.)]
    }

    fn clamp(self) -> HSLColor {
        let [_, (s_min, s_max), (l_min, l_max)] = HSLColor::bounds();
        HSLColor {
            h: clamp_hue(self.h),
            s: clamp(self.s, s_min, s_max),
            l: clamp(self.l, l_min, l_max),
        }
    }
}

impl From<RGBColor> for HSLColor {
    /// Converts with the standard CSS algorithm. No rounding is done, and the result isn't clamped:
    /// in-range RGB always gives in-range HSL.
    fn from(rgb: RGBColor) -> HSLColor {
        let red = rgb.r / 255.0;
        let green = rgb.g / 255.0;
        let blue = rgb.b / 255.0;

        let min = red.min(green).min(blue);
        let max = red.max(green).max(blue);
        let dist = max - min;
        let lightness = (min + max) / 2.0;

        if min == max {
            // gray: no saturation and an arbitrary hue
            return HSLColor {
                h: 0.0,
                s: 0.0,
                l: lightness,
            };
        }

        let saturation = if lightness < 0.5 {
            dist / (max + min)
        } else {
            dist / (2.0 - max - min)
        };

        // how far each channel is from the max, as a fraction of a sixth of the hue circle, offset by
        // half a sextant
        let dist_red = ((max - red) / 6.0 + dist / 2.0) / dist;
        let dist_green = ((max - green) / 6.0 + dist / 2.0) / dist;
        let dist_blue = ((max - blue) / 6.0 + dist / 2.0) / dist;

        // the sextant is picked by whichever channel is largest
        let mut hue = if max == red {
            dist_blue - dist_green
        } else if max == green {
            1.0 / 3.0 + dist_red - dist_blue
        } else {
            2.0 / 3.0 + dist_green - dist_red
        };

        if hue < 0.0 {
            hue += 1.0;
        }
        // a full turn is 0, which also catches a tiny negative hue rounding up to exactly 1
        if hue >= 1.0 {
            hue -= 1.0;
        }

        HSLColor {
            h: hue * 360.0,
            s: saturation,
            l: lightness,
        }
    }
}
