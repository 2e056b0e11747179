use smallvec::{smallvec, SmallVec};

use crate::parser::{fold_many, literal, one_of, satisfy, Parser};
use crate::text::string::unescape_named;

/// UTF-16 code units contributed by one character or escape.
type Units = SmallVec<[u16; 2]>;

fn hex_digit() -> Parser<String> {
    satisfy(|ch| ch.is_ascii_hexdigit()).map(String::from)
}

/// `uXXXX` after the backslash: exactly four hex digits, either case.
fn unicode_escape() -> Parser<u16> {
    let hex4 = hex_digit() + hex_digit() + hex_digit() + hex_digit();
    literal("u")
        .skip(hex4)
        .try_map(|hex| u16::from_str_radix(&hex, 16).ok())
}

fn named_escape() -> Parser<u16> {
    satisfy(|ch| unescape_named(ch).is_some()).try_map(unescape_named)
}

fn escape() -> Parser<Units> {
    literal("\\")
        .skip(one_of([named_escape(), unicode_escape()]))
        .map(|unit| smallvec![unit])
}

/// Any character except `"`, `\` and control characters below U+0020.
fn unescaped() -> Parser<Units> {
    satisfy(|ch| ch != '"' && ch != '\\' && ch >= '\u{20}')
        .map(|ch| ch.encode_utf16(&mut [0; 2]).iter().copied().collect())
}

/// A quoted JSON string.
///
/// Escapes yield single UTF-16 code units, so a `\ud83d\ude00` pair
/// combines into one scalar. An unpaired surrogate decodes to U+FFFD.
pub fn string() -> Parser<String> {
    let character = one_of([unescaped(), escape()]);
    let body = fold_many(character, Vec::new, |mut units: Vec<u16>, more| {
        units.extend_from_slice(&more);
        units
    });
    literal("\"")
        .skip(body)
        .keep(literal("\""))
        .map(|units| String::from_utf16_lossy(&units))
}
