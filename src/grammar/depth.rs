use memchr::memchr2;

/// Reports whether arrays/objects in `input` nest deeper than `max_depth`.
///
/// Brackets inside string literals are skipped. Malformed input is not
/// judged here; an unterminated string simply ends the scan.
pub fn exceeds_depth(input: &str, max_depth: usize) -> bool {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'"' => match string_end(bytes, idx + 1) {
                Some(end) => idx = end,
                None => return false,
            },
            b'[' | b'{' => {
                depth += 1;
                if depth > max_depth {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        idx += 1;
    }
    false
}

/// Index of the quote closing a string whose body starts at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut idx = start;
    loop {
        let offset = memchr2(b'"', b'\\', bytes.get(idx..)?)?;
        idx += offset;
        if bytes[idx] == b'"' {
            return Some(idx);
        }
        idx += 2;
    }
}
