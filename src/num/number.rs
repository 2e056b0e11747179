use crate::constants::MAX_EXACT_INTEGER;
use crate::value::is_negative_zero;

/// `value` as an `i64` when it is integral, below 2^53 in magnitude and
/// not `-0.0`, so the integer spelling reads back as the same `f64`.
pub(crate) fn as_exact_integer(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER && !is_negative_zero(value) {
        Some(value as i64)
    } else {
        None
    }
}

/// Appends the JSON text of `value`.
///
/// Integral values below 2^53 print without a fraction (`-0.0` as `-0`);
/// other finite values use the shortest round-tripping form from `ryu`.
/// NaN and the infinities have no JSON spelling and print as `null`.
pub fn write_number_into(out: &mut String, value: f64) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    if is_negative_zero(value) {
        out.push_str("-0");
        return;
    }
    if let Some(integer) = as_exact_integer(value) {
        let mut buffer = itoa::Buffer::new();
        out.push_str(buffer.format(integer));
        return;
    }
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);
    out.push_str(formatted.strip_suffix(".0").unwrap_or(formatted));
}

pub fn format_number(value: f64) -> String {
    let mut out = String::new();
    write_number_into(&mut out, value);
    out
}
