/// Default limit on array/object nesting accepted by the parser.
pub const MAX_DEPTH: usize = 128;

/// Largest magnitude the encoder prints as a plain integer (2^53).
pub(crate) const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

pub(crate) const INVALID_JSON: &str = "Invalid JSON";

#[inline]
pub fn is_json_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}
