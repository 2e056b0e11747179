//! A JSON parser assembled from parser combinators, and a decoder
//! combinator layer for turning parsed documents into application types.
//!
//! ```
//! use jsoncomb::decode::{field, int, map2, string};
//!
//! let user = map2(field("id", int()), field("name", string()), |id, name| (id, name));
//! let decoded = jsoncomb::decode(r#"{"id": 7, "name": "Ada"}"#, &user);
//! assert_eq!(decoded, Ok((7, "Ada".to_string())));
//!
//! let missing = jsoncomb::decode(r#"{"id": 7}"#, &user).unwrap_err();
//! assert_eq!(missing.to_string(), "Field 'name' not found");
//! ```

pub mod constants;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grammar;
pub mod num;
pub mod options;
pub mod parser;
pub mod result;
pub mod text;
pub mod value;

use std::io::Write;

use serde::de::DeserializeOwned;

pub use crate::decode::Decoder;
pub use crate::error::{Error, ErrorKind};
pub use crate::options::ParseOptions;
pub use crate::parser::Parser;
pub use crate::value::{JsonValue, Object};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a complete JSON document.
///
/// Leading and trailing whitespace is allowed; anything else left over,
/// like the `false` in `nullfalse`, means no value.
pub fn parse(text: &str) -> Option<JsonValue> {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Option<JsonValue> {
    grammar::parse_document(text, options)
}

/// Parses `text`, then applies `decoder`. A document that does not parse
/// fails with `Invalid JSON`.
pub fn decode<T: 'static>(text: &str, decoder: &Decoder<T>) -> Result<T> {
    decode_with_options(text, decoder, &ParseOptions::default())
}

pub fn decode_with_options<T: 'static>(
    text: &str,
    decoder: &Decoder<T>,
    options: &ParseOptions,
) -> Result<T> {
    let value = parse_with_options(text, options)
        .ok_or_else(|| Error::syntax(constants::INVALID_JSON))?;
    decoder.decode_value(&value).inspect_err(|err| {
        tracing::debug!(kind = ?err.kind, message = %err.message, "decode failed");
    })
}

/// Parses `text` and hands it to serde.
pub fn from_str<T: DeserializeOwned + 'static>(text: &str) -> Result<T> {
    decode(text, &decode::deserialize())
}

/// Minified JSON text for `value`.
pub fn encode(value: &JsonValue) -> String {
    encode::to_string(value)
}

pub fn encode_to_writer<W: Write>(writer: W, value: &JsonValue) -> Result<()> {
    encode::to_writer(writer, value)
}
