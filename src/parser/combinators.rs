use super::Parser;

/// Tries each alternative against the same input, in order; the first
/// match wins. No alternatives, or none matching, fails.
pub fn one_of<T, I>(alternatives: I) -> Parser<T>
where
    T: 'static,
    I: IntoIterator<Item = Parser<T>>,
{
    let alternatives: Vec<Parser<T>> = alternatives.into_iter().collect();
    Parser::new(move |input| {
        alternatives
            .iter()
            .find_map(|alternative| alternative.parse(input))
    })
}

/// Defers building the parser until it runs, so a rule can refer to
/// itself (directly or through other rules) without infinite construction.
pub fn lazy<T, F>(supplier: F) -> Parser<T>
where
    T: 'static,
    F: Fn() -> Parser<T> + Send + Sync + 'static,
{
    Parser::new(move |input| supplier().parse(input))
}

/// Zero or one match of `parser`.
pub fn optional<T: 'static>(parser: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |input| match parser.parse(input) {
        Some((value, rest)) => Some((Some(value), rest)),
        None => Some((None, input)),
    })
}

/// Applies `parser` as many times as it matches, folding each value into
/// an accumulator started from `init`. Always succeeds. Stops if a match
/// consumes nothing, since repeating it would never end.
pub fn fold_many<T, A, I, F>(parser: Parser<T>, init: I, f: F) -> Parser<A>
where
    T: 'static,
    A: 'static,
    I: Fn() -> A + Send + Sync + 'static,
    F: Fn(A, T) -> A + Send + Sync + 'static,
{
    Parser::new(move |input| {
        let mut acc = init();
        let mut rest = input;
        while let Some((value, next)) = parser.parse(rest) {
            let progressed = next.len() < rest.len();
            acc = f(acc, value);
            rest = next;
            if !progressed {
                break;
            }
        }
        Some((acc, rest))
    })
}

pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    fold_many(parser, Vec::new, |mut items, item| {
        items.push(item);
        items
    })
}

pub fn many1<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let rest = many(parser.clone());
    Parser::new(move |input| {
        let (first, after_first) = parser.parse(input)?;
        let (mut items, remaining) = rest.parse(after_first)?;
        items.insert(0, first);
        Some((items, remaining))
    })
}

/// One or more `item`s separated by `separator`. A trailing separator is
/// left unconsumed.
pub fn sep_by1<T, S>(item: Parser<T>, separator: Parser<S>) -> Parser<Vec<T>>
where
    T: 'static,
    S: 'static,
{
    let tail = many(separator.skip(item.clone()));
    Parser::new(move |input| {
        let (first, after_first) = item.parse(input)?;
        let (more, remaining) = tail.parse(after_first)?;
        let mut items = Vec::with_capacity(more.len() + 1);
        items.push(first);
        items.extend(more);
        Some((items, remaining))
    })
}

/// Zero or more characters matched by `parser`, collected into a string.
pub fn text(parser: Parser<char>) -> Parser<String> {
    fold_many(parser, String::new, |mut out, ch| {
        out.push(ch);
        out
    })
}
