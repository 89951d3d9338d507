//! This module contains the two coordinate systems a CSS color is expressed in: sRGB channels and
//! CSS HSL. Each is a plain value type, and converting between them is just `From`/`Into`. For
//! convenience, each type is imported into this module's namespace directly.
pub mod hslcolor;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::hslcolor::HSLColor;
pub use self::rgbcolor::RGBColor;
