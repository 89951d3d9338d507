//! This file defines [`Color`], a single CSS color value. A `Color` keeps two descriptions of the
//! same color at once, sRGB channels and CSS HSL, plus one alpha shared by both, and keeps them in
//! sync: writing a red, green or blue channel recomputes the HSL side, and writing hue, saturation or
//! lightness recomputes the RGB side. This makes reading any channel free, at the cost of a
//! conversion on every write.
//!
//! Strings come in through [`Color::hydrate`] (or [`Color::parse`] and `FromStr`), which accepts
//! anything the classifier in the `csscolor` module recognizes, and go back out through one of the
//! five formatters. Strings that aren't recognizable colors are ignored rather than rejected: a
//! color built from one is simply opaque black.

use std::fmt;
use std::str::FromStr;

use bound::{clamp, Bound};
use channel::{channel_or_zero, ChannelValue};
use colors::hslcolor::clamp_hue;
use colors::rgbcolor::round_half_up;
use colors::{HSLColor, RGBColor};
use colortype::ColorType;
use csscolor::{classify, extract, ColorParseError, Components};

/// A mutable CSS color value, holding both its RGB and HSL coordinates and an alpha.
///
/// All channels are floats. Red, green and blue range from 0 to 255 and aren't rounded when stored;
/// hue ranges over [0, 360); saturation, lightness and alpha range from 0 to 1. Every write clamps
/// to those ranges.
///
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// let mut color = Color::parse("rgba(56, 38.2, 12, 0.354)").unwrap();
/// assert_eq!(color.green(), 38.2);
/// assert_eq!(color.alpha(), 0.354);
///
/// color.set_lightness(0.5);
/// assert_eq!(color.to_rgba_string(false), "rgba(210, 143, 45, 0.354)");
/// assert_eq!(color.to_hex_string(false), "#5AD28F2D");
/// ```
///
/// Deserializing goes through the same checks as [`hydrate`](#method.hydrate): the RGB side is
/// clamped, alpha is clamped, and the HSL side is recomputed from the RGB side, so a serialized HSL
/// part is ignored.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    rgb: RGBColor,
    hsl: HSLColor,
    alpha: f64,
}

// the serialized form of a Color before its channels are checked
#[derive(Deserialize)]
struct RawColor {
    rgb: RGBColor,
    alpha: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Color {
        let mut color = Color {
            rgb: raw.rgb.clamp(),
            hsl: HSLColor::default(),
            alpha: clamp(raw.alpha, 0.0, 1.0),
        };
        color.calc_hsl_from_rgb();
        color
    }
}

impl Default for Color {
    /// Opaque black. The HSL side is all zeros.
    fn default() -> Color {
        Color {
            rgb: RGBColor::default(),
            hsl: HSLColor::default(),
            alpha: 1.0,
        }
    }
}

impl Color {
    /// Creates opaque black.
    pub fn new() -> Color {
        Color::default()
    }

    /// Creates a color from a CSS color string. A string that isn't a recognizable color gives opaque
    /// black, the same as [`Color::new`]: see [`hydrate`](#method.hydrate) for the details.
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let mut color = Color::new();
        color.hydrate(input)?;
        Ok(color)
    }

    /// Re-initializes this color from a CSS color string. Surrounding whitespace is ignored. Every
    /// channel is clamped to its range before the other coordinate system is derived, so
    /// `rgb(300, 0, 0)` reads as pure red.
    ///
    /// If the string isn't recognizable (the classifier says `ColorType::Unknown`), nothing changes
    /// and `Ok(())` is returned. An error can only come from the classifier and the extraction
    /// grammars disagreeing, and in that case nothing changes either.
    pub fn hydrate(&mut self, input: &str) -> Result<(), ColorParseError> {
        let input = input.trim();
        let color_type = classify(input);
        match extract(color_type, input)? {
            Some(Components::Rgb(rgb, alpha)) => {
                self.rgb = rgb.clamp();
                self.alpha = clamp(alpha, 0.0, 1.0);
                self.calc_hsl_from_rgb();
            }
            Some(Components::Hsl(hsl, alpha)) => {
                self.hsl = hsl.clamp();
                self.alpha = clamp(alpha, 0.0, 1.0);
                self.calc_rgb_from_hsl();
            }
            None => debug!(input, "unrecognized color string, leaving color unchanged"),
        }
        Ok(())
    }

    fn calc_hsl_from_rgb(&mut self) {
        self.hsl = HSLColor::from(self.rgb);
    }

    fn calc_rgb_from_hsl(&mut self) {
        self.rgb = RGBColor::from(self.hsl);
    }

    /// The RGB side of this color.
    pub fn rgb(&self) -> RGBColor {
        self.rgb
    }

    /// The HSL side of this color.
    pub fn hsl(&self) -> HSLColor {
        self.hsl
    }

    /// The red channel, from 0 to 255.
    pub fn red(&self) -> f64 {
        self.rgb.r
    }

    /// The green channel, from 0 to 255.
    pub fn green(&self) -> f64 {
        self.rgb.g
    }

    /// The blue channel, from 0 to 255.
    pub fn blue(&self) -> f64 {
        self.rgb.b
    }

    /// The alpha channel, from 0 (transparent) to 1 (opaque).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The hue, in degrees from 0 up to 360.
    pub fn hue(&self) -> f64 {
        self.hsl.h
    }

    /// The saturation, from 0 to 1.
    pub fn saturation(&self) -> f64 {
        self.hsl.s
    }

    /// The lightness, from 0 to 1.
    pub fn lightness(&self) -> f64 {
        self.hsl.l
    }

    /// Sets the red channel, clamped to [0, 255], and recomputes hue, saturation and lightness.
    /// Invalid values (see [`ChannelValue`](../channel/trait.ChannelValue.html)) count as 0.
    pub fn set_red<T: ChannelValue>(&mut self, value: T) {
        self.rgb.r = clamp(channel_or_zero(value), 0.0, 255.0);
        self.calc_hsl_from_rgb();
    }

    /// Sets the green channel, clamped to [0, 255], and recomputes hue, saturation and lightness.
    pub fn set_green<T: ChannelValue>(&mut self, value: T) {
        self.rgb.g = clamp(channel_or_zero(value), 0.0, 255.0);
        self.calc_hsl_from_rgb();
    }

    /// Sets the blue channel, clamped to [0, 255], and recomputes hue, saturation and lightness.
    pub fn set_blue<T: ChannelValue>(&mut self, value: T) {
        self.rgb.b = clamp(channel_or_zero(value), 0.0, 255.0);
        self.calc_hsl_from_rgb();
    }

    /// Sets the alpha, clamped to [0, 1]. Nothing else changes.
    pub fn set_alpha<T: ChannelValue>(&mut self, value: T) {
        self.alpha = clamp(channel_or_zero(value), 0.0, 1.0);
    }

    /// Sets the hue and recomputes red, green and blue. Hues of 360 or more wrap around, but negative
    /// hues become 0 instead of wrapping: -24 is stored as 0, not 336.
    pub fn set_hue<T: ChannelValue>(&mut self, value: T) {
        self.hsl.h = clamp_hue(channel_or_zero(value));
        self.calc_rgb_from_hsl();
    }

    /// Sets the saturation, clamped to [0, 1], and recomputes red, green and blue.
    pub fn set_saturation<T: ChannelValue>(&mut self, value: T) {
        self.hsl.s = clamp(channel_or_zero(value), 0.0, 1.0);
        self.calc_rgb_from_hsl();
    }

    /// Sets the lightness, clamped to [0, 1], and recomputes red, green and blue.
    pub fn set_lightness<T: ChannelValue>(&mut self, value: T) {
        self.hsl.l = clamp(channel_or_zero(value), 0.0, 1.0);
        self.calc_rgb_from_hsl();
    }

    /// Renders as uppercase hex. By default this is the 8-digit `#AARRGGBB` form, with alpha first
    /// just like hydration reads it. With `premultiply`, the channels are scaled by alpha and the
    /// 6-digit `#RRGGBB` form is used instead.
    pub fn to_hex_string(&self, premultiply: bool) -> String {
        if premultiply {
            let rgb = self.rgb.premultiply(self.alpha).round();
            format!("#{:02X}{:02X}{:02X}", byte(rgb.r), byte(rgb.g), byte(rgb.b))
        } else {
            let rgb = self.rgb.round();
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(round_half_up(self.alpha * 255.0)),
                byte(rgb.r),
                byte(rgb.g),
                byte(rgb.b)
            )
        }
    }

    /// Renders as `rgb(r, g, b)`. The channels are always premultiplied by alpha, since the format has
    /// nowhere else to put it; `allow_float` only controls whether they're rounded.
    pub fn to_rgb_string(&self, allow_float: bool) -> String {
        let mut rgb = self.rgb.premultiply(self.alpha);
        if !allow_float {
            rgb = rgb.round();
        }
        format!("rgb({}, {}, {})", Num(rgb.r), Num(rgb.g), Num(rgb.b))
    }

    /// Renders as `rgba(r, g, b, a)`, without premultiplying. The channels are rounded unless
    /// `allow_float` is set; alpha is never rounded.
    pub fn to_rgba_string(&self, allow_float: bool) -> String {
        let rgb = if allow_float { self.rgb } else { self.rgb.round() };
        format!(
            "rgba({}, {}, {}, {})",
            Num(rgb.r),
            Num(rgb.g),
            Num(rgb.b),
            Num(self.alpha)
        )
    }

    /// Renders as `hsl(h, s%, l%)`. The components are rounded unless `allow_float` is set.
    pub fn to_hsl_string(&self, allow_float: bool) -> String {
        let (h, s, l) = self.hsl_percentages(allow_float);
        format!("hsl({}, {}%, {}%)", Num(h), Num(s), Num(l))
    }

    /// Renders as `hsla(h, s%, l%, a)`. The components are rounded unless `allow_float` is set;
    /// alpha is never rounded.
    pub fn to_hsla_string(&self, allow_float: bool) -> String {
        let (h, s, l) = self.hsl_percentages(allow_float);
        format!(
            "hsla({}, {}%, {}%, {})",
            Num(h),
            Num(s),
            Num(l),
            Num(self.alpha)
        )
    }

    // hue in degrees, saturation and lightness scaled to percentages
    fn hsl_percentages(&self, allow_float: bool) -> (f64, f64, f64) {
        let (h, s, l) = (self.hsl.h, self.hsl.s * 100.0, self.hsl.l * 100.0);
        if allow_float {
            (h, s, l)
        } else {
            (round_half_up(h), round_half_up(s), round_half_up(l))
        }
    }

    /// Renders in the format named by the given type, with that formatter's default flags. Both hex
    /// types give the 8-digit hex form. `ColorType::Lut` and `ColorType::Unknown` have no formatter
    /// of their own and also give 8-digit hex, which is what `Display` uses.
    pub fn to_type_string(&self, color_type: ColorType) -> String {
        match color_type {
            ColorType::Hsl => self.to_hsl_string(false),
            ColorType::Hsla => self.to_hsla_string(false),
            ColorType::Rgb => self.to_rgb_string(false),
            ColorType::Rgba => self.to_rgba_string(false),
            ColorType::Hex | ColorType::Hex2 | ColorType::Lut | ColorType::Unknown => {
                self.to_hex_string(false)
            }
        }
    }
}

// an already-rounded channel as a byte for hex output
fn byte(channel: f64) -> u8 {
    clamp(channel, 0.0, 255.0) as u8
}

// Formats a number the way CSS expects to read it back: shortest round-trip form, no trailing ".0"
// on integers, and no negative zero.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for Color {
    /// The 8-digit `#AARRGGBB` form.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex_string(false))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        Color::parse(s)
    }
}
