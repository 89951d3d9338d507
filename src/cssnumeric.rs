//! This file separates out the numeric side of CSS color parsing: turning the text captured by one
//! of the color grammars into a number. The grammars in `csscolor.rs` already guarantee the shape of
//! each capture (unsigned decimals, percentages without the sign, one or two hex digits), so the
//! functions here are mostly about normalization: percentages become fractions, single hex digits
//! are doubled, and so on. (Source for CSS syntax:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use std::error::Error;
use std::fmt;

use colortype::ColorType;

/// An error in parsing a CSS color string. None of these can be caused by bad user input alone:
/// strings that aren't colors are classified as `ColorType::Unknown` and simply ignored. These
/// errors mean that a string was accepted by the classifier but then couldn't be read back.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ColorParseError {
    /// A captured decimal or percentage component wasn't a valid floating-point number.
    InvalidDecimal,
    /// A captured hex component wasn't valid base 16.
    InvalidHexDigits,
    /// A capture group the grammar requires was absent.
    MissingComponent,
    /// The classifier accepted the string as the given type, but that type's extraction grammar
    /// didn't match it.
    GrammarMismatch(ColorType),
    /// A string was classified as a color keyword that the keyword table doesn't contain.
    UnknownKeyword,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::InvalidDecimal => write!(f, "invalid decimal component"),
            ColorParseError::InvalidHexDigits => write!(f, "invalid hexadecimal component"),
            ColorParseError::MissingComponent => write!(f, "missing color component"),
            ColorParseError::GrammarMismatch(t) => {
                write!(f, "color string classified as {} could not be parsed", t)
            }
            ColorParseError::UnknownKeyword => write!(f, "color keyword missing from lookup table"),
        }
    }
}

impl Error for ColorParseError {}

/// Parses a captured DECIMAL component, such as "38.2" or " 255 ". Surrounding whitespace is
/// ignored.
pub(crate) fn parse_decimal(num: &str) -> Result<f64, ColorParseError> {
    num.trim()
        .parse::<f64>()
        .map_err(|_| ColorParseError::InvalidDecimal)
}

/// Parses a captured PERCENT component (the number without its '%') and scales it to a fraction,
/// so "12" gives 0.12. No clamping happens here: "150" gives 1.5.
pub(crate) fn parse_percentage(num: &str) -> Result<f64, ColorParseError> {
    Ok(parse_decimal(num)? / 100.0)
}

/// Parses a hex component of one or two digits into a byte. A single digit `d` is read as `dd`, the
/// usual shorthand convention, so "a" and "aa" both give 170.
pub(crate) fn parse_hex_component(digits: &str) -> Result<u8, ColorParseError> {
    let doubled;
    let pair = if digits.len() == 1 {
        doubled = digits.repeat(2);
        doubled.as_str()
    } else {
        digits
    };
    if pair.len() != 2 {
        return Err(ColorParseError::InvalidHexDigits);
    }
    u8::from_str_radix(pair, 16).map_err(|_| ColorParseError::InvalidHexDigits)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("184").unwrap(), 184.0);
        assert_eq!(parse_decimal("38.2").unwrap(), 38.2);
        // leading zeros and padding
        assert_eq!(parse_decimal("  0042 ").unwrap(), 42.0);
        assert_eq!(parse_decimal("0.354").unwrap(), 0.354);
        assert_eq!(parse_decimal("abc"), Err(ColorParseError::InvalidDecimal));
        assert_eq!(parse_decimal(""), Err(ColorParseError::InvalidDecimal));
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("12").unwrap(), 0.12);
        assert_eq!(parse_percentage("100").unwrap(), 1.0);
        // not clamped at this stage
        assert_eq!(parse_percentage("150").unwrap(), 1.5);
        assert!((parse_percentage("0.234").unwrap() - 0.00234).abs() < 1e-12);
    }

    #[test]
    fn test_parse_hex_component() {
        assert_eq!(parse_hex_component("0").unwrap(), 0);
        assert_eq!(parse_hex_component("1").unwrap(), 17);
        assert_eq!(parse_hex_component("a").unwrap(), 170);
        assert_eq!(parse_hex_component("F").unwrap(), 255);
        assert_eq!(parse_hex_component("12").unwrap(), 18);
        assert_eq!(parse_hex_component("bB").unwrap(), 187);
        assert_eq!(parse_hex_component("g0"), Err(ColorParseError::InvalidHexDigits));
        assert_eq!(parse_hex_component("123"), Err(ColorParseError::InvalidHexDigits));
        assert_eq!(parse_hex_component(""), Err(ColorParseError::InvalidHexDigits));
    }
}
