//! Helpers over the crate [`Result`](crate::Result).
//!
//! `map` and `and_then` come straight from `std::result::Result`; the one
//! operation std does not name is collapsing a sequence of results.

use crate::Result;

/// Collects every `Ok` payload in order, or returns the first `Err` met
/// walking left to right. Later results are not inspected once an error
/// is found.
pub fn combine_list<T, I>(results: I) -> Result<Vec<T>>
where
    I: IntoIterator<Item = Result<T>>,
{
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);
    for result in iter {
        values.push(result?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[rstest::rstest]
    fn test_combine_all_ok() {
        let combined = combine_list(vec![Ok(1), Ok(2), Ok(3)]);
        assert_eq!(combined, Ok(vec![1, 2, 3]));
    }

    #[rstest::rstest]
    fn test_combine_empty() {
        let combined: Result<Vec<i32>> = combine_list(Vec::new());
        assert_eq!(combined, Ok(Vec::new()));
    }

    #[rstest::rstest]
    fn test_combine_first_error_wins() {
        let combined = combine_list(vec![
            Ok(1),
            Err(Error::decode("first")),
            Err(Error::decode("second")),
        ]);
        assert_eq!(combined, Err(Error::decode("first")));
    }

    #[rstest::rstest]
    fn test_combine_stops_at_first_error() {
        let mut seen = Vec::new();
        let results = (0..5).map(|i| {
            seen.push(i);
            if i == 2 {
                Err(Error::decode("stop"))
            } else {
                Ok(i)
            }
        });
        assert!(combine_list(results).is_err());
        assert_eq!(seen, vec![0, 1, 2]);
    }
}
