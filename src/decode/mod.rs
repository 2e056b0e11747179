//! Decoder combinators over [`JsonValue`].
//!
//! A [`Decoder<T>`] turns an already parsed value into a `T` or an
//! [`Error`] whose message names the offending value. Decoders compose the
//! same way parsers do: primitives, `map`, `and_then`, alternatives. Unlike
//! parsers, failures carry messages, and the first failure in declaration
//! order is the one reported.

pub mod combinators;
pub mod primitives;
pub mod serde;

use std::fmt;
use std::sync::Arc;

use crate::value::JsonValue;
use crate::{Error, ParseOptions, Result};

pub use combinators::{
    and_then, at, dict, field, index, key_value_pairs, list, map, map2, map3, map4, map5,
    nullable, one_of, optional_field, or, with_error,
};
pub use primitives::{boolean, double, fail, int, null, string, succeed, value};
pub use self::serde::deserialize;

type DecodeFn<T> = dyn Fn(&JsonValue) -> Result<T> + Send + Sync;

pub struct Decoder<T> {
    run: Arc<DecodeFn<T>>,
}

impl<T> Clone for Decoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Decoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder").finish_non_exhaustive()
    }
}

impl<T: 'static> Decoder<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&JsonValue) -> Result<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub fn decode_value(&self, value: &JsonValue) -> Result<T> {
        (self.run)(value)
    }

    /// Parses `text` and decodes the result. See [`crate::decode`].
    pub fn decode(&self, text: &str) -> Result<T> {
        crate::decode(text, self)
    }

    pub fn decode_with_options(&self, text: &str, options: &ParseOptions) -> Result<T> {
        crate::decode_with_options(text, self, options)
    }

    pub fn map<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Decoder::new(move |value| self.decode_value(value).map(&f))
    }

    /// Decodes with `self`, then runs the decoder `f` picks for the result
    /// against the same value.
    pub fn and_then<U, F>(self, f: F) -> Decoder<U>
    where
        U: 'static,
        F: Fn(T) -> Decoder<U> + Send + Sync + 'static,
    {
        Decoder::new(move |value| {
            let decoded = self.decode_value(value)?;
            f(decoded).decode_value(value)
        })
    }

    pub fn or(self, other: Decoder<T>) -> Decoder<T> {
        or(self, other)
    }

    /// Replaces any failure message with one built from the input value.
    pub fn with_error<F>(self, to_message: F) -> Decoder<T>
    where
        F: Fn(&JsonValue) -> String + Send + Sync + 'static,
    {
        with_error(self, to_message)
    }
}

/// `"<json> is not <kind>"`, rendering only the offending value.
pub(crate) fn mismatch(value: &JsonValue, kind: &str) -> Error {
    Error::decode(format!("{value} is not {kind}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[rstest::rstest]
    fn test_map_applies_on_success_only() {
        let doubled = int().map(|n| n * 2);
        assert_eq!(doubled.decode_value(&JsonValue::Num(21.0)), Ok(42));
        assert_eq!(
            doubled.decode_value(&JsonValue::from("x")),
            Err(Error::decode("\"x\" is not an integer"))
        );
    }

    #[rstest::rstest]
    fn test_and_then_selects_next_decoder() {
        let tagged = field("kind", string()).and_then(|kind| match kind.as_str() {
            "n" => field("value", int()).map(|n| n.to_string()),
            "s" => field("value", string()),
            other => fail(format!("unknown kind {other}")),
        });
        let doc = parse(r#"{"kind": "n", "value": 7}"#).unwrap();
        assert_eq!(tagged.decode_value(&doc), Ok("7".to_string()));
        let doc = parse(r#"{"kind": "q", "value": 7}"#).unwrap();
        assert_eq!(
            tagged.decode_value(&doc),
            Err(Error::decode("unknown kind q"))
        );
    }

    #[rstest::rstest]
    fn test_and_then_short_circuits() {
        let never_called = field("missing", int()).and_then(|_| -> Decoder<i64> {
            panic!("continuation must not run after a failure")
        });
        let doc = parse(r#"{"a": 1}"#).unwrap();
        assert_eq!(
            never_called.decode_value(&doc),
            Err(Error::decode("Field 'missing' not found"))
        );
    }

    #[rstest::rstest]
    fn test_decode_text_entry() {
        assert_eq!(int().decode("  12 "), Ok(12));
        assert_eq!(int().decode("12 x"), Err(Error::syntax("Invalid JSON")));
    }

    #[rstest::rstest]
    fn test_decoders_are_shareable_across_threads() {
        let decoder = list(int());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let decoder = decoder.clone();
                std::thread::spawn(move || decoder.decode(&format!("[{i}, {i}]")))
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let i = i as i64;
            assert_eq!(handle.join().unwrap(), Ok(vec![i, i]));
        }
    }
}
