use super::Parser;

/// Matches exactly `expected` at the start of the input.
pub fn literal(expected: impl Into<String>) -> Parser<String> {
    let expected = expected.into();
    Parser::new(move |input| {
        let rest = input.strip_prefix(expected.as_str())?;
        Some((expected.clone(), rest))
    })
}

/// Consumes one character when `predicate` accepts it. Fails on empty input.
pub fn satisfy<F>(predicate: F) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let mut chars = input.chars();
        let ch = chars.next().filter(|ch| predicate(*ch))?;
        Some((ch, chars.as_str()))
    })
}

/// Succeeds with `value` without consuming input.
pub fn always<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new(move |input| Some((value.clone(), input)))
}
