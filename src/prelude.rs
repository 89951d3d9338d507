//! This module simply brings the most common Tincture functionality under a single namespace, to
//! prevent excessive imports. It includes the [`Color`] value itself, the classifier and its
//! [`ColorType`] tags, the parse error, both coordinate types, and every trait. The keyword table
//! is not included: use the [`keywords`] module directly.
//!
//! [`Color`]: ../color/struct.Color.html
//! [`ColorType`]: ../colortype/enum.ColorType.html
//! [`keywords`]: ../keywords/index.html

pub use bound::Bound;
pub use channel::ChannelValue;
pub use color::Color;
pub use colors::{HSLColor, RGBColor};
pub use colortype::ColorType;
pub use csscolor::{classify, ColorParseError};
