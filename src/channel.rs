//! This file defines what the channel setters on [`Color`] accept. CSS tooling tends to pass
//! channel values around loosely (sometimes as numbers, sometimes as the text of a number), so
//! the setters take anything that implements [`ChannelValue`] rather than only `f64`. Whatever
//! comes in is turned into a finite-or-infinite `f64`, or rejected, and a rejected value is treated
//! as 0. Booleans are always rejected, even though `true` and `false` have obvious numeric
//! readings: a boolean channel value is almost certainly a bug in the caller.
//!
//! [`Color`]: ../color/struct.Color.html

use num::ToPrimitive;

/// A value that can be written to a color channel.
pub trait ChannelValue {
    /// Interprets this value as a number, or returns `None` if it isn't a valid one. NaN is never
    /// returned: it's invalid too.
    fn to_channel(&self) -> Option<f64>;
}

/// Gets the number a channel setter should store before clamping: the value itself if it's valid,
/// otherwise 0.
pub(crate) fn channel_or_zero<T: ChannelValue>(value: T) -> f64 {
    match value.to_channel() {
        Some(v) => v,
        None => {
            debug!("rejected channel value, using 0");
            0.0
        }
    }
}

fn reject_nan(value: Option<f64>) -> Option<f64> {
    value.and_then(|v| if v.is_nan() { None } else { Some(v) })
}

macro_rules! numeric_channel_value {
    ($($t:ty),*) => {
        $(
            impl ChannelValue for $t {
                fn to_channel(&self) -> Option<f64> {
                    reject_nan(ToPrimitive::to_f64(self))
                }
            }
        )*
    };
}

numeric_channel_value!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ChannelValue for bool {
    fn to_channel(&self) -> Option<f64> {
        None
    }
}

/// Text is read as a plain decimal number, ignoring surrounding whitespace. Anything else, including
/// an empty string or trailing junk like "12px", is invalid.
impl<'a> ChannelValue for &'a str {
    fn to_channel(&self) -> Option<f64> {
        reject_nan(self.trim().parse::<f64>().ok())
    }
}

impl ChannelValue for String {
    fn to_channel(&self) -> Option<f64> {
        self.as_str().to_channel()
    }
}

impl<'a> ChannelValue for &'a String {
    fn to_channel(&self) -> Option<f64> {
        self.as_str().to_channel()
    }
}

/// A missing value is invalid.
impl<T: ChannelValue> ChannelValue for Option<T> {
    fn to_channel(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.to_channel())
    }
}
