use std::io::Write;

use crate::num::number::write_number_into;
use crate::text::string::quote_string_into;
use crate::value::JsonValue;
use crate::{Error, Result};

/// Minified JSON text for `value`.
pub fn to_string(value: &JsonValue) -> String {
    let mut out = String::new();
    write_value_into(&mut out, value);
    out
}

pub fn to_vec(value: &JsonValue) -> Vec<u8> {
    to_string(value).into_bytes()
}

pub fn to_writer<W: Write>(mut writer: W, value: &JsonValue) -> Result<()> {
    writer
        .write_all(to_string(value).as_bytes())
        .map_err(|err| Error::encode(format!("write failed: {err}")))
}

pub fn write_value_into(out: &mut String, value: &JsonValue) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Bool(true) => out.push_str("true"),
        JsonValue::Bool(false) => out.push_str("false"),
        JsonValue::Str(s) => quote_string_into(out, s),
        JsonValue::Num(n) => write_number_into(out, *n),
        JsonValue::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value_into(out, item);
            }
            out.push(']');
        }
        JsonValue::Object(map) => {
            out.push('{');
            for (idx, (key, item)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                quote_string_into(out, key);
                out.push(':');
                write_value_into(out, item);
            }
            out.push('}');
        }
    }
}
