//! Tincture is a library for working with colors the way CSS writes them. It reads the CSS3 color
//! notations (`hsl()`, `hsla()`, `rgb()`, `rgba()`, 3, 4, 6 and 8 digit hex, and the 147 named
//! keywords) into a single mutable [`Color`] value, lets you read or change any channel of it in
//! either RGB or HSL terms, and writes it back out in whichever of those notations you need.
//!
//! A [`Color`] always holds both coordinate systems and keeps them consistent, so asking for the
//! hue of a color parsed from hex, or the hex of a color whose lightness you just changed, is just
//! a read. Parsing is as forgiving as CSS itself: a string that isn't a color leaves the value alone
//! instead of failing, and out-of-range channels are clamped.
//!
//! ```
//! # use tincture::prelude::*;
//! let mut color = Color::parse("chocolate").unwrap();
//! assert_eq!(color.to_rgb_string(false), "rgb(210, 105, 30)");
//! color.set_alpha(0.5);
//! assert_eq!(color.to_rgba_string(false), "rgba(210, 105, 30, 0.5)");
//! assert_eq!(classify("#d2691e"), ColorType::Hex2);
//! ```
//!
//! [`Color`]: color/struct.Color.html

#![doc(html_root_url = "https://docs.rs/tincture/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]

extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate tracing;

pub mod bound;
pub mod channel;
pub mod color;
pub mod colors;
pub mod colortype;
pub mod csscolor;
mod cssnumeric;
pub mod keywords;
pub mod prelude;
