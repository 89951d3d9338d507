//! This file uses the numeric parsing in `cssnumeric.rs` to read CSS color strings according to the
//! W3 specification, restricted to the forms CSS3 colors are usually written in: `hsl()`, `hsla()`,
//! `rgb()`, `rgba()`, 3, 4, 6 or 8 digit hex, and the named keywords. You can see the full spec
//! here: [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/). Two caveats: no
//! component may be negative (a leading '-' makes a string unrecognizable rather than clamped), and
//! a hex string with four or eight digits puts alpha *first*, as in `#AARRGGBB`.
//!
//! Parsing happens in two steps. [`classify`] decides which grammar a string is written in by trying
//! each one in a fixed order, and then the extraction routine for that grammar pulls the numbers
//! out of the same regex's capture groups.

use regex::{Captures, Regex};

use colors::{HSLColor, RGBColor};
use colortype::ColorType;
use cssnumeric::{parse_decimal, parse_hex_component, parse_percentage};
pub use cssnumeric::ColorParseError;
use keywords;

// an unsigned integer or decimal: no exponents, no signs
const FLOAT_NUMBER: &str = r"[0-9]+(?:\.[0-9]+)?";
const HEX_CHAR: &str = r"[0-9A-Fa-f]";

lazy_static! {
    // a number with optional whitespace around it
    static ref DECIMAL: String = format!(r"\s*({})\s*", FLOAT_NUMBER);
    // the same, with a mandatory '%' that isn't captured
    static ref PERCENTAGE: String = format!(r"\s*({})%\s*", FLOAT_NUMBER);
    static ref HEX_TUPLE: String = format!("({}{{2}})", HEX_CHAR);
    static ref HEX_SINGLE: String = format!("({})", HEX_CHAR);

    static ref HSL: Regex = grammar(&format!(
        r"^hsl\({},{},{}\)$",
        *DECIMAL, *PERCENTAGE, *PERCENTAGE
    ));
    static ref HSLA: Regex = grammar(&format!(
        r"^hsla\({},{},{},{}\)$",
        *DECIMAL, *PERCENTAGE, *PERCENTAGE, *DECIMAL
    ));
    static ref RGB: Regex = grammar(&format!(
        r"^rgb\({},{},{}\)$",
        *DECIMAL, *DECIMAL, *DECIMAL
    ));
    static ref RGBA: Regex = grammar(&format!(
        r"^rgba\({},{},{},{}\)$",
        *DECIMAL, *DECIMAL, *DECIMAL, *DECIMAL
    ));
    static ref HEX2: Regex = grammar(&format!(
        "^#{}{}{}{}?$",
        *HEX_TUPLE, *HEX_TUPLE, *HEX_TUPLE, *HEX_TUPLE
    ));
    static ref HEX: Regex = grammar(&format!(
        "^#{}{}{}{}?$",
        *HEX_SINGLE, *HEX_SINGLE, *HEX_SINGLE, *HEX_SINGLE
    ));
    static ref LUT: Regex = grammar("^([a-zA-Z]+)$");
}

/// Compiles one of the grammars above. They're all fixed strings, so a failure here can only mean
/// the pattern text itself is broken.
fn grammar(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("color grammar {:?} failed to compile: {}", pattern, e),
    }
}

/// Gets the grammar that recognizes the given type, or `None` for `ColorType::Unknown`.
fn grammar_for(color_type: ColorType) -> Option<&'static Regex> {
    match color_type {
        ColorType::Hsl => Some(&*HSL),
        ColorType::Hsla => Some(&*HSLA),
        ColorType::Rgb => Some(&*RGB),
        ColorType::Rgba => Some(&*RGBA),
        ColorType::Hex2 => Some(&*HEX2),
        ColorType::Hex => Some(&*HEX),
        ColorType::Lut => Some(&*LUT),
        ColorType::Unknown => None,
    }
}

/// Determines which grammar the given string is written in, after trimming surrounding whitespace.
/// The grammars are tried in the order of [`ColorType::ALL`], and the first match wins: two-digit
/// hex is tried before one-digit hex, and the keyword grammar goes last because it accepts any
/// purely alphabetic string. Such a string is only a `Lut` if it's actually one of the CSS color
/// keywords; otherwise, like everything else that matches nothing, it's `Unknown`.
///
/// This never fails: every string gets exactly one tag.
///
/// # Example
///
/// ```
/// # use tincture::prelude::*;
/// assert_eq!(classify("hsl(2, 2%, 2%)"), ColorType::Hsl);
/// assert_eq!(classify("  #fff "), ColorType::Hex);
/// assert_eq!(classify("#ffffff"), ColorType::Hex2);
/// assert_eq!(classify("chocolate"), ColorType::Lut);
/// // missing the '%'
/// assert_eq!(classify("hsl(2, 2, 2)"), ColorType::Unknown);
/// // not a keyword
/// assert_eq!(classify("happy"), ColorType::Unknown);
/// ```
///
/// [`ColorType::ALL`]: ../colortype/enum.ColorType.html#associatedconstant.ALL
pub fn classify(input: &str) -> ColorType {
    let input = input.trim();
    let matched = ColorType::ALL
        .iter()
        .cloned()
        .find(|&t| grammar_for(t).map_or(false, |re| re.is_match(input)))
        .unwrap_or(ColorType::Unknown);

    let color_type = if matched == ColorType::Lut && !keywords::is_keyword(input) {
        ColorType::Unknown
    } else {
        matched
    };
    trace!(input, %color_type, "classified color string");
    color_type
}

/// The raw numbers read out of a color string, before any clamping. Which coordinate system they're
/// in depends on the grammar: hex and keywords are both RGB.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Components {
    /// Red, green and blue on the 0-255 scale.
    Rgb(RGBColor, f64),
    /// Hue in degrees, with saturation and lightness already divided by 100.
    Hsl(HSLColor, f64),
}

/// Reads the components out of a string that has already been classified as `color_type`. The
/// string should be trimmed the same way `classify` trims. Returns `Ok(None)` for
/// `ColorType::Unknown`. An error means the classifier and the extraction grammars disagree, which
/// is a bug rather than bad input.
pub(crate) fn extract(
    color_type: ColorType,
    input: &str,
) -> Result<Option<Components>, ColorParseError> {
    let re = match grammar_for(color_type) {
        Some(re) => re,
        None => return Ok(None),
    };
    let caps = match re.captures(input) {
        Some(caps) => caps,
        None => {
            error!(input, %color_type, "classified color string failed to re-match its grammar");
            return Err(ColorParseError::GrammarMismatch(color_type));
        }
    };
    let components = match color_type {
        ColorType::Rgb | ColorType::Rgba => read_rgb(&caps)?,
        ColorType::Hsl | ColorType::Hsla => read_hsl(&caps)?,
        ColorType::Hex | ColorType::Hex2 => read_hex(&caps)?,
        ColorType::Lut => read_keyword(&caps)?,
        ColorType::Unknown => return Ok(None),
    };
    Ok(Some(components))
}

/// Gets the text of a capture group that the grammar guarantees is there.
fn required<'t>(caps: &Captures<'t>, i: usize) -> Result<&'t str, ColorParseError> {
    caps.get(i)
        .map(|m| m.as_str())
        .ok_or(ColorParseError::MissingComponent)
}

/// Reads an optional alpha from the fourth group of a functional notation, defaulting to opaque.
fn optional_alpha(caps: &Captures) -> Result<f64, ColorParseError> {
    match caps.get(4) {
        Some(m) => parse_decimal(m.as_str()),
        None => Ok(1.0),
    }
}

/// `rgb(r, g, b)` and `rgba(r, g, b, a)`: channels are read as-is, with no rounding.
fn read_rgb(caps: &Captures) -> Result<Components, ColorParseError> {
    let rgb = RGBColor {
        r: parse_decimal(required(caps, 1)?)?,
        g: parse_decimal(required(caps, 2)?)?,
        b: parse_decimal(required(caps, 3)?)?,
    };
    Ok(Components::Rgb(rgb, optional_alpha(caps)?))
}

/// `hsl(h, s%, l%)` and `hsla(h, s%, l%, a)`. The hue isn't wrapped yet: that's the clamp's job.
fn read_hsl(caps: &Captures) -> Result<Components, ColorParseError> {
    let hsl = HSLColor {
        h: parse_decimal(required(caps, 1)?)?,
        s: parse_percentage(required(caps, 2)?)?,
        l: parse_percentage(required(caps, 3)?)?,
    };
    Ok(Components::Hsl(hsl, optional_alpha(caps)?))
}

/// `#RGB`, `#ARGB`, `#RRGGBB` and `#AARRGGBB`. With three groups they're red, green and blue; with
/// four the first one is alpha, which is the opposite of the functional notations.
fn read_hex(caps: &Captures) -> Result<Components, ColorParseError> {
    let (a, r, g, b) = match caps.get(4) {
        Some(last) => (
            required(caps, 1)?,
            required(caps, 2)?,
            required(caps, 3)?,
            last.as_str(),
        ),
        None => ("ff", required(caps, 1)?, required(caps, 2)?, required(caps, 3)?),
    };
    let byte = |digits: &str| parse_hex_component(digits).map(f64::from);
    let rgb = RGBColor {
        r: byte(r)?,
        g: byte(g)?,
        b: byte(b)?,
    };
    Ok(Components::Rgb(rgb, byte(a)? / 255.0))
}

/// A named keyword, which always resolves to an opaque RGB color.
fn read_keyword(caps: &Captures) -> Result<Components, ColorParseError> {
    let name = required(caps, 1)?;
    match keywords::lookup(name) {
        Some(rgb) => Ok(Components::Rgb(rgb, 1.0)),
        None => {
            error!(name, "classified color keyword missing from lookup table");
            Err(ColorParseError::UnknownKeyword)
        }
    }
}
