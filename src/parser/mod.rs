//! Text parser combinators.
//!
//! A [`Parser<T>`] is a pure function from the remaining input to either
//! nothing (no match) or the parsed value plus the unconsumed rest.
//! Failure carries no diagnostic. Parsers hold no mutable state, so the
//! same parser can be shared across threads and re-run freely.
//!
//! Repetition ([`many`], [`fold_many`], [`sep_by1`]) loops instead of
//! recursing, so long runs of digits, characters or list items cost no
//! stack. Only [`lazy`] indirection recurses.

pub mod combinators;
pub mod primitives;

use std::fmt;
use std::ops::Add;
use std::sync::Arc;

pub use combinators::{fold_many, lazy, many, many1, one_of, optional, sep_by1, text};
pub use primitives::{always, literal, satisfy};

type ParseFn<T> = dyn Fn(&str) -> Option<(T, &str)> + Send + Sync;

pub struct Parser<T> {
    run: Arc<ParseFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser").finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(&str) -> Option<(T, &str)> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    pub fn parse<'a>(&self, input: &'a str) -> Option<(T, &'a str)> {
        (self.run)(input)
    }

    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            Some((f(value), rest))
        })
    }

    /// Like [`map`](Self::map), but `f` may reject the value, failing the parse.
    pub fn try_map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Option<U> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            Some((f(value)?, rest))
        })
    }

    /// Runs `self`, then the parser `f` builds from its value on the rest.
    pub fn and_then<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            f(value).parse(rest)
        })
    }

    /// Sequences `self` then `next`, keeping the left value.
    /// `next` must still match.
    pub fn keep<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        Parser::new(move |input| {
            let (value, rest) = self.parse(input)?;
            let (_, rest) = next.parse(rest)?;
            Some((value, rest))
        })
    }

    /// Sequences `self` then `next`, keeping the right value.
    /// `self` must still match.
    pub fn skip<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        Parser::new(move |input| {
            let (_, rest) = self.parse(input)?;
            next.parse(rest)
        })
    }
}

/// `a + b` matches `a` then `b` and concatenates their text.
impl Add for Parser<String> {
    type Output = Parser<String>;

    fn add(self, rhs: Parser<String>) -> Parser<String> {
        Parser::new(move |input| {
            let (mut left, rest) = self.parse(input)?;
            let (right, rest) = rhs.parse(rest)?;
            left.push_str(&right);
            Some((left, rest))
        })
    }
}
