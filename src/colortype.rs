//! This module defines [`ColorType`], the tag that names which textual grammar a CSS color string
//! was written in. The classifier in [`csscolor`] produces it, hydration dispatches on it, and the
//! string formatters on [`Color`] accept it to pick an output format. The tag is never stored on a
//! color: it only describes a string.
//!
//! [`csscolor`]: ../csscolor/index.html
//! [`Color`]: ../color/struct.Color.html

use std::fmt;
use std::str::FromStr;

use csscolor;

/// The grammar a color string matched. The variants are listed in the order the classifier tries
/// them, with `Unknown` as the fallback when nothing matches.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorType {
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%, a)`
    Hsla,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`
    Rgba,
    /// `#RRGGBB` or `#AARRGGBB`: every component is two hex digits.
    #[serde(rename = "hexadecimal-tuple")]
    Hex2,
    /// `#RGB` or `#ARGB`: every component is a single hex digit.
    #[serde(rename = "hexadecimal")]
    Hex,
    /// A named CSS color keyword such as `chocolate`.
    #[serde(rename = "lookup")]
    Lut,
    /// Anything else.
    Unknown,
}

impl ColorType {
    /// Every tag, in the priority order used by the classifier.
    pub const ALL: [ColorType; 8] = [
        ColorType::Hsl,
        ColorType::Hsla,
        ColorType::Rgb,
        ColorType::Rgba,
        ColorType::Hex2,
        ColorType::Hex,
        ColorType::Lut,
        ColorType::Unknown,
    ];

    /// Determines which grammar the given string is written in. Shorthand for
    /// [`classify`](../csscolor/fn.classify.html).
    pub fn classify(input: &str) -> ColorType {
        csscolor::classify(input)
    }

    /// The canonical lowercase name of this tag, e.g. `"hexadecimal-tuple"` for `Hex2`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorType::Hsl => "hsl",
            ColorType::Hsla => "hsla",
            ColorType::Rgb => "rgb",
            ColorType::Rgba => "rgba",
            ColorType::Hex2 => "hexadecimal-tuple",
            ColorType::Hex => "hexadecimal",
            ColorType::Lut => "lookup",
            ColorType::Unknown => "unknown",
        }
    }
}

impl Default for ColorType {
    fn default() -> ColorType {
        ColorType::Unknown
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a tag from its canonical name. This never fails: names that aren't recognized map to
/// `Unknown`, which is also what the formatters treat as "use the default format".
impl FromStr for ColorType {
    type Err = ::std::convert::Infallible;

    fn from_str(s: &str) -> Result<ColorType, Self::Err> {
        Ok(ColorType::ALL
            .iter()
            .cloned()
            .find(|t| t.as_str() == s)
            .unwrap_or(ColorType::Unknown))
    }
}
