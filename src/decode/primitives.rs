use super::{mismatch, Decoder};
use crate::value::JsonValue;
use crate::Error;

/// Lower bound of `i64` as an exact `f64` (-2^63).
const I64_MIN: f64 = -9_223_372_036_854_775_808.0;
/// One past the upper bound of `i64` (2^63); `i64::MAX` has no exact `f64`.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// A number with no fractional part that fits an `i64`.
pub fn int() -> Decoder<i64> {
    Decoder::new(|value| match value {
        JsonValue::Num(n) if n.trunc() == *n && (I64_MIN..I64_END).contains(n) => Ok(*n as i64),
        other => Err(mismatch(other, "an integer")),
    })
}

pub fn double() -> Decoder<f64> {
    Decoder::new(|value| match value {
        JsonValue::Num(n) => Ok(*n),
        other => Err(mismatch(other, "a number")),
    })
}

pub fn boolean() -> Decoder<bool> {
    Decoder::new(|value| match value {
        JsonValue::Bool(b) => Ok(*b),
        other => Err(mismatch(other, "a boolean")),
    })
}

pub fn string() -> Decoder<String> {
    Decoder::new(|value| match value {
        JsonValue::Str(s) => Ok(s.clone()),
        other => Err(mismatch(other, "a string")),
    })
}

/// Accepts only `null`, producing `result`.
pub fn null<T>(result: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |value| match value {
        JsonValue::Null => Ok(result.clone()),
        other => Err(mismatch(other, "null")),
    })
}

/// The input itself, untouched.
pub fn value() -> Decoder<JsonValue> {
    Decoder::new(|value| Ok(value.clone()))
}

pub fn succeed<T>(result: T) -> Decoder<T>
where
    T: Clone + Send + Sync + 'static,
{
    Decoder::new(move |_| Ok(result.clone()))
}

pub fn fail<T: 'static>(message: impl Into<String>) -> Decoder<T> {
    let message = message.into();
    Decoder::new(move |_| Err(Error::decode(message.clone())))
}
