// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Text to [`Value`] conversion.
//!
//! The accepted grammar, after all whitespace has been removed:
//!
//! ```raw
//! value  := ranges | set | scalar | text
//! ranges := '[' range (',' range)* ']'
//! range  := UINT64 '-' UINT64
//! set    := '{' item (',' item)* '}'
//! scalar := FLOAT
//! text   := STRING
//! ```
//!
//! A leading `[` selects ranges and a leading `{` selects a set. Anything else
//! is a scalar when it parses as an `f64` and opaque text otherwise.

use crate::{
    error::ParseError,
    ranges::{Range, Ranges},
    set::Set,
    value::Value,
};
use tracing::{debug, trace};

const BRACKET_PAIRS: [(char, char); 3] = [('{', '}'), ('[', ']'), ('(', ')')];

/// Parses `text` into a [`Value`].
///
/// Ranges are returned in canonical form. Set items are kept in the order
/// given, duplicates included.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is empty, has unbalanced brackets,
/// places `[` or `{` anywhere but at the start, or contains a malformed range.
///
/// # Examples
///
/// ```rust
/// # use offerval::parse::parse;
/// # use offerval::value::Value;
/// # use offerval::ranges::Range;
/// let value = parse("[1-2, 4-6, 3-3]").unwrap();
/// match value {
///     Value::Ranges(ranges) => assert_eq!(ranges.as_slice(), &[Range::new(1, 6)]),
///     other => panic!("unexpected value {other}"),
/// }
///
/// assert!(parse("   ").is_err());
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let result = parse_stripped(&stripped);
    match &result {
        Ok(value) => trace!(input = %stripped, kind = %value.kind(), "parsed value"),
        Err(error) => debug!(input = %stripped, %error, "rejected value"),
    }
    result
}

fn parse_stripped(text: &str) -> Result<Value, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    if !BRACKET_PAIRS
        .iter()
        .all(|&(open, close)| brackets_balanced(text, open, close))
    {
        return Err(ParseError::MismatchedBrackets);
    }

    match text.find('[') {
        Some(0) => return parse_ranges(text).map(Value::Ranges),
        Some(_) => return Err(ParseError::UnexpectedBracket('[')),
        None => {}
    }

    match text.find('{') {
        Some(0) => Ok(Value::Set(parse_set(text))),
        Some(_) => Err(ParseError::UnexpectedBracket('{')),
        None => Ok(match text.parse::<f64>() {
            Ok(scalar) => Value::Scalar(scalar.into()),
            Err(_) => Value::Text(text.into()),
        }),
    }
}

/// Returns `true` if `open` and `close` pair up and no `close` comes before
/// its `open`.
fn brackets_balanced(text: &str, open: char, close: char) -> bool {
    let mut depth: usize = 0;
    for c in text.chars() {
        if c == open {
            depth += 1;
        } else if c == close {
            match depth.checked_sub(1) {
                Some(next) => depth = next,
                None => return false,
            }
        }
    }
    depth == 0
}

fn tokens<'a>(text: &'a str, delimiters: &'a [char]) -> impl Iterator<Item = &'a str> + 'a {
    text.split(delimiters).filter(|token| !token.is_empty())
}

fn parse_ranges(text: &str) -> Result<Ranges, ParseError> {
    let tokens: Vec<&str> = tokens(text, &['[', ']', '-', ',']).collect();
    if tokens.len() % 2 != 0 {
        return Err(ParseError::OddRangeTokens);
    }

    let mut ranges = Ranges::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks_exact(2) {
        let begin = parse_bound(pair[0])?;
        let end = parse_bound(pair[1])?;
        let range = Range::try_new(begin, end).ok_or(ParseError::InvertedRange { begin, end })?;
        ranges.push(range);
    }

    ranges.coalesce();
    Ok(ranges)
}

fn parse_bound(token: &str) -> Result<u64, ParseError> {
    token.parse::<u64>().map_err(|_| ParseError::InvalidBound {
        token: token.to_owned(),
    })
}

fn parse_set(text: &str) -> Set {
    tokens(text, &['{', '}', ',']).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scalar::Scalar, text::Text};

    fn r(begin: u64, end: u64) -> Range {
        Range::new(begin, end)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse(" \t\n "), Err(ParseError::Empty));
    }

    #[test]
    fn test_mismatched_brackets() {
        assert_eq!(parse("[1-2"), Err(ParseError::MismatchedBrackets));
        assert_eq!(parse("{a,b"), Err(ParseError::MismatchedBrackets));
        assert_eq!(parse("(x"), Err(ParseError::MismatchedBrackets));
        assert_eq!(parse("]1-2["), Err(ParseError::MismatchedBrackets));
    }

    #[test]
    fn test_brackets_balanced() {
        assert!(brackets_balanced("[[]]", '[', ']'));
        assert!(brackets_balanced("abc", '[', ']'));
        assert!(!brackets_balanced("[]]", '[', ']'));
        assert!(!brackets_balanced(")(", '(', ')'));
    }

    #[test]
    fn test_ranges() {
        let value = parse("[ 31000-32000, 1-2,3-5 ]").unwrap();
        assert_eq!(
            value.as_ranges().map(|r| r.as_slice()),
            Some(&[r(1, 5), r(31000, 32000)][..])
        );
    }

    #[test]
    fn test_empty_ranges() {
        let value = parse("[]").unwrap();
        assert!(value.as_ranges().is_some_and(|r| r.is_empty()));
    }

    #[test]
    fn test_ranges_odd_tokens() {
        assert_eq!(parse("[1-2,3]"), Err(ParseError::OddRangeTokens));
    }

    #[test]
    fn test_ranges_invalid_bound() {
        assert_eq!(
            parse("[1-x]"),
            Err(ParseError::InvalidBound {
                token: "x".to_owned()
            })
        );
        assert_eq!(
            parse("[1-18446744073709551616]"),
            Err(ParseError::InvalidBound {
                token: "18446744073709551616".to_owned()
            })
        );
    }

    #[test]
    fn test_ranges_inverted() {
        assert_eq!(
            parse("[9-3]"),
            Err(ParseError::InvertedRange { begin: 9, end: 3 })
        );
    }

    #[test]
    fn test_misplaced_brackets() {
        assert_eq!(parse("a[1-2]"), Err(ParseError::UnexpectedBracket('[')));
        assert_eq!(parse("a{b}"), Err(ParseError::UnexpectedBracket('{')));
        assert_eq!(parse("{a,[b]}"), Err(ParseError::UnexpectedBracket('[')));
    }

    #[test]
    fn test_set_keeps_raw_items() {
        let value = parse("{ssd, hdd,ssd}").unwrap();
        let set = value.as_set().unwrap();
        assert_eq!(set.as_slice(), &["ssd", "hdd", "ssd"]);
    }

    #[test]
    fn test_scalar() {
        assert_eq!(parse("2.5"), Ok(Value::Scalar(Scalar::new(2.5))));
        assert_eq!(parse(" 1 024 "), Ok(Value::Scalar(Scalar::new(1024.0))));
        assert_eq!(parse("-3"), Ok(Value::Scalar(Scalar::new(-3.0))));
    }

    #[test]
    fn test_text_fallback() {
        assert_eq!(parse("rack-1"), Ok(Value::Text(Text::new("rack-1"))));
        assert_eq!(parse("(a)"), Ok(Value::Text(Text::new("(a)"))));
    }
}
