//! The JSON grammar, written only in terms of [`crate::parser`].
//!
//! ```text
//! json    = ws value ws
//! value   = null | boolean | string | number | array | object
//! array   = "[" element ("," element)* "]" | "[" ws "]"
//! object  = "{" member ("," member)* "}" | "{" ws "}"
//! element = ws value ws
//! member  = ws string ws ":" element
//! ```

pub mod depth;
pub mod number;
pub mod string;

use std::sync::OnceLock;

use crate::constants::is_json_whitespace;
use crate::parser::{lazy, literal, one_of, satisfy, sep_by1, text, Parser};
use crate::value::{JsonValue, Object};
use crate::ParseOptions;

static VALUE: OnceLock<Parser<JsonValue>> = OnceLock::new();

pub fn whitespace() -> Parser<String> {
    text(satisfy(is_json_whitespace))
}

fn null() -> Parser<JsonValue> {
    literal("null").map(|_| JsonValue::Null)
}

fn boolean() -> Parser<JsonValue> {
    one_of([
        literal("true").map(|_| JsonValue::Bool(true)),
        literal("false").map(|_| JsonValue::Bool(false)),
    ])
}

fn element() -> Parser<JsonValue> {
    whitespace().skip(lazy(value)).keep(whitespace())
}

fn array() -> Parser<JsonValue> {
    let items = literal("[")
        .skip(sep_by1(element(), literal(",")))
        .keep(literal("]"));
    let empty = literal("[").skip(whitespace()).keep(literal("]"));
    one_of([items, empty.map(|_| Vec::new())]).map(JsonValue::Array)
}

/// `"key" : value`; the value rule is chosen after the key has been read.
fn member() -> Parser<(String, JsonValue)> {
    let key = whitespace()
        .skip(string::string())
        .keep(whitespace())
        .keep(literal(":"));
    let element = element();
    key.and_then(move |key| element.clone().map(move |value| (key.clone(), value)))
}

fn object() -> Parser<JsonValue> {
    let members = literal("{")
        .skip(sep_by1(member(), literal(",")))
        .keep(literal("}"))
        .map(|pairs| pairs.into_iter().collect::<Object>());
    let empty = literal("{").skip(whitespace()).keep(literal("}"));
    one_of([members, empty.map(|_| Object::new())]).map(JsonValue::Object)
}

fn build_value() -> Parser<JsonValue> {
    one_of([
        null(),
        boolean(),
        string::string().map(JsonValue::Str),
        number::number().map(JsonValue::Num),
        array(),
        object(),
    ])
}

/// A single JSON value without surrounding whitespace.
///
/// Built once; nested arrays and objects reach it again through [`lazy`].
pub fn value() -> Parser<JsonValue> {
    VALUE.get_or_init(build_value).clone()
}

/// A whitespace-wrapped JSON value.
pub fn json() -> Parser<JsonValue> {
    element()
}

/// Parses a complete document. Fails unless the whole input is consumed.
pub fn parse_document(input: &str, options: &ParseOptions) -> Option<JsonValue> {
    if depth::exceeds_depth(input, options.max_depth) {
        tracing::debug!(
            len = input.len(),
            max_depth = options.max_depth,
            "json rejected: nesting too deep"
        );
        return None;
    }
    match json().parse(input) {
        Some((value, "")) => Some(value),
        Some((_, rest)) => {
            tracing::debug!(
                len = input.len(),
                trailing = rest.len(),
                "json rejected: trailing content"
            );
            None
        }
        None => {
            tracing::debug!(len = input.len(), "json rejected: no match");
            None
        }
    }
}
