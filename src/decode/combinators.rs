use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::{mismatch, Decoder};
use crate::result::combine_list;
use crate::value::JsonValue;
use crate::Error;

/// Decodes member `name` of an object with `decoder`.
pub fn field<T: 'static>(name: impl Into<SmolStr>, decoder: Decoder<T>) -> Decoder<T> {
    let name = name.into();
    Decoder::new(move |value| match value {
        JsonValue::Object(map) => match map.get(name.as_str()) {
            Some(member) => decoder.decode_value(member),
            None => Err(Error::decode(format!("Field '{name}' not found"))),
        },
        other => Err(mismatch(other, "an object")),
    })
}

/// Like [`field`], but an absent member decodes to `None`. A present
/// member that fails `decoder` is still an error.
pub fn optional_field<T: 'static>(
    name: impl Into<SmolStr>,
    decoder: Decoder<T>,
) -> Decoder<Option<T>> {
    let name = name.into();
    Decoder::new(move |value| match value {
        JsonValue::Object(map) => map
            .get(name.as_str())
            .map(|member| decoder.decode_value(member))
            .transpose(),
        other => Err(mismatch(other, "an object")),
    })
}

/// Follows `path` through nested objects, then applies `decoder`.
/// An empty path applies `decoder` to the value itself.
pub fn at<T, I, K>(path: I, decoder: Decoder<T>) -> Decoder<T>
where
    T: 'static,
    I: IntoIterator<Item = K>,
    I::IntoIter: DoubleEndedIterator,
    K: Into<SmolStr>,
{
    path.into_iter()
        .rev()
        .fold(decoder, |inner, key| field(key, inner))
}

/// Decodes element `position` of an array.
pub fn index<T: 'static>(position: usize, decoder: Decoder<T>) -> Decoder<T> {
    Decoder::new(move |value| match value {
        JsonValue::Array(items) => match items.get(position) {
            Some(item) => decoder.decode_value(item),
            None => Err(Error::decode(format!("Index {position} out of range"))),
        },
        other => Err(mismatch(other, "an array")),
    })
}

/// Decodes every element of an array in order. The first element that
/// fails decides the error; later elements are not decoded.
pub fn list<T: 'static>(decoder: Decoder<T>) -> Decoder<Vec<T>> {
    Decoder::new(move |value| match value {
        JsonValue::Array(items) => {
            combine_list(items.iter().map(|item| decoder.decode_value(item)))
        }
        other => Err(mismatch(other, "an array")),
    })
}

/// Decodes every member value of an object, keyed by member name.
pub fn dict<T: 'static>(decoder: Decoder<T>) -> Decoder<BTreeMap<String, T>> {
    key_value_pairs(decoder).map(|pairs| pairs.into_iter().collect())
}

/// Object members as `(key, value)` pairs in key order.
pub fn key_value_pairs<T: 'static>(decoder: Decoder<T>) -> Decoder<Vec<(String, T)>> {
    Decoder::new(move |value| match value {
        JsonValue::Object(map) => combine_list(map.iter().map(|(key, member)| {
            decoder
                .decode_value(member)
                .map(|decoded| (key.clone(), decoded))
        })),
        other => Err(mismatch(other, "an object")),
    })
}

/// `null` decodes to `None`; anything else goes to `decoder`.
pub fn nullable<T: 'static>(decoder: Decoder<T>) -> Decoder<Option<T>> {
    Decoder::new(move |value| match value {
        JsonValue::Null => Ok(None),
        other => decoder.decode_value(other).map(Some),
    })
}

/// Tries each decoder on the same value; the first success wins.
///
/// When all fail, the individual messages are dropped in favour of
/// `"oneOf failed to decode <json>"`.
pub fn one_of<T, I>(decoders: I) -> Decoder<T>
where
    T: 'static,
    I: IntoIterator<Item = Decoder<T>>,
{
    let decoders: Vec<Decoder<T>> = decoders.into_iter().collect();
    Decoder::new(move |value| {
        decoders
            .iter()
            .find_map(|decoder| decoder.decode_value(value).ok())
            .ok_or_else(|| Error::decode(format!("oneOf failed to decode {value}")))
    })
}

pub fn or<T: 'static>(first: Decoder<T>, second: Decoder<T>) -> Decoder<T> {
    one_of([first, second])
}

/// Replaces a failure message with `to_message(input)`. The original
/// message is discarded.
pub fn with_error<T, F>(decoder: Decoder<T>, to_message: F) -> Decoder<T>
where
    T: 'static,
    F: Fn(&JsonValue) -> String + Send + Sync + 'static,
{
    Decoder::new(move |value| {
        decoder
            .decode_value(value)
            .map_err(|_| Error::decode(to_message(value)))
    })
}

pub fn map<T, U, F>(decoder: Decoder<T>, f: F) -> Decoder<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    decoder.map(f)
}

pub fn and_then<T, U, F>(decoder: Decoder<T>, f: F) -> Decoder<U>
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
{
    decoder.and_then(f)
}

// Each mapN runs its decoders left to right and stops at the first error,
// so later decoders never see the value once an earlier one has failed.
macro_rules! define_map_n {
    ($(#[$doc:meta])* $name:ident => $($decoder:ident: $ty:ident),+) => {
        $(#[$doc])*
        pub fn $name<$($ty,)+ R, F>($($decoder: Decoder<$ty>,)+ f: F) -> Decoder<R>
        where
            $($ty: 'static,)+
            R: 'static,
            F: Fn($($ty),+) -> R + Send + Sync + 'static,
        {
            Decoder::new(move |value| {
                $(let $decoder = $decoder.decode_value(value)?;)+
                Ok(f($($decoder),+))
            })
        }
    };
}

define_map_n!(
    /// Combines two decoders run against the same value.
    map2 => a: A, b: B
);
define_map_n!(map3 => a: A, b: B, c: C);
define_map_n!(map4 => a: A, b: B, c: C, d: D);
define_map_n!(map5 => a: A, b: B, c: C, d: D, e: E);
