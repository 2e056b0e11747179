/// Appends `value` to `out` with JSON string escaping, without quotes.
///
/// `"`, `\`, backspace, form feed, newline, carriage return and tab use
/// their short escapes; any other control character below 0x20 is written
/// as `\u00XX`. Everything else, non-ASCII included, passes through.
pub fn escape_string_into(out: &mut String, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, byte) in bytes.iter().enumerate() {
        let escaped = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\x08' => "\\b",
            b'\x0c' => "\\f",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x00..=0x1f => {
                if start < idx {
                    out.push_str(&value[start..idx]);
                }
                push_unicode_escape(out, *byte);
                start = idx + 1;
                continue;
            }
            _ => continue,
        };
        if start < idx {
            out.push_str(&value[start..idx]);
        }
        out.push_str(escaped);
        start = idx + 1;
    }
    if start < value.len() {
        out.push_str(&value[start..]);
    }
}

pub fn quote_string_into(out: &mut String, value: &str) {
    out.reserve(value.len() + 2);
    out.push('"');
    escape_string_into(out, value);
    out.push('"');
}

fn push_unicode_escape(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push_str("\\u00");
    out.push(HEX[usize::from(byte >> 4)] as char);
    out.push(HEX[usize::from(byte & 0x0f)] as char);
}

/// Maps the character after a backslash to the UTF-16 unit it stands for.
/// `u` is not covered here since it carries four hex digits.
pub fn unescape_named(ch: char) -> Option<u16> {
    let unit = match ch {
        '"' => 0x22,
        '\\' => 0x5c,
        '/' => 0x2f,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => 0x0a,
        'r' => 0x0d,
        't' => 0x09,
        _ => return None,
    };
    Some(unit)
}
