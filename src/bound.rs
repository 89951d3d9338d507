//! This module describes the Bound trait, which gives each coordinate type its valid range and a way
//! of forcing a value into it. RGB channels live in [0, 255], saturation and lightness in [0, 1], and
//! hue in [0, 360). Every value that comes out of parsing passes through these clamps before any
//! conversion happens, so conversions never see out-of-range input.

/// Describes a coordinate type in which every component has explicit bounds. Clamping is
/// component-wise: each value that falls outside its range is moved to the nearest end of it. Hue is
/// the one exception, and its implementation wraps instead of clamping.
/// # Example
/// Bound an RGB color that has drifted out of range.
///
/// ```
/// # use tincture::prelude::*;
/// let out_of_bounds = RGBColor { r: 300., g: -12., b: 38.2 };
/// let in_bounds = out_of_bounds.clamp();
/// assert_eq!(in_bounds, RGBColor { r: 255., g: 0., b: 38.2 });
/// ```
pub trait Bound: Sized {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in field order.
    fn bounds() -> [(f64, f64); 3];
    /// Returns a copy with each component forced into its bounds.
    fn clamp(self) -> Self;
}

/// Clamps a single value to [min, max]. NaN is passed through unchanged, like the comparisons it's
/// built from.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colors::{HSLColor, RGBColor};

    #[test]
    fn test_clamp_value() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.354, 0.0, 1.0), 0.354);
        assert_eq!(clamp(255.1, 0.0, 255.0), 255.0);
        assert_eq!(clamp(::std::f64::INFINITY, 0.0, 255.0), 255.0);
        assert!(clamp(::std::f64::NAN, 0.0, 1.0).is_nan());
    }

    #[test]
    fn test_bounds() {
        assert_eq!(RGBColor::bounds(), [(0., 255.), (0., 255.), (0., 255.)]);
        assert_eq!(HSLColor::bounds(), [(0., 360.), (0., 1.), (0., 1.)]);
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let rgb = RGBColor { r: 512., g: 17., b: -0.5 };
        assert_eq!(rgb.clamp(), rgb.clamp().clamp());
        let hsl = HSLColor { h: 725., s: 2., l: -3. };
        assert_eq!(hsl.clamp(), hsl.clamp().clamp());
    }
}
