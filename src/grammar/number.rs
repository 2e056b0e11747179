use crate::parser::{literal, one_of, satisfy, text, Parser};

fn digit() -> Parser<char> {
    satisfy(|ch| ch.is_ascii_digit())
}

/// One or more decimal digits.
pub fn digits() -> Parser<String> {
    digit().map(String::from) + text(digit())
}

/// Text or nothing: matches `parser` if it can, else succeeds with "".
fn or_empty(parser: Parser<String>) -> Parser<String> {
    one_of([parser, literal("")])
}

/// `0`, or a nonzero digit followed by any digits. `0123` stops after `0`.
fn unsigned_integer() -> Parser<String> {
    let nonzero = satisfy(|ch| matches!(ch, '1'..='9')).map(String::from);
    one_of([literal("0"), nonzero + text(digit())])
}

pub fn integer() -> Parser<String> {
    or_empty(literal("-")) + unsigned_integer()
}

pub fn fraction() -> Parser<String> {
    or_empty(literal(".") + digits())
}

pub fn exponent() -> Parser<String> {
    let marker = one_of([literal("E"), literal("e")]);
    let sign = or_empty(one_of([literal("+"), literal("-")]));
    or_empty(marker + sign + digits())
}

/// The JSON number grammar, yielding the matched text.
pub fn number_text() -> Parser<String> {
    integer() + fraction() + exponent()
}

/// Numbers too large for `f64` do not parse; values are always finite.
pub fn number() -> Parser<f64> {
    number_text().try_map(|text| text.parse::<f64>().ok().filter(|n| n.is_finite()))
}
