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

//! Errors reported while turning text into a [`Value`](crate::value::Value).

use thiserror::Error;

/// The error type for [`parse`](crate::parse::parse).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty once whitespace had been removed.
    #[error("expecting non-empty string")]
    Empty,

    /// One of `{}`, `[]` or `()` was not balanced.
    #[error("mismatched brackets")]
    MismatchedBrackets,

    /// A `[` or `{` appeared somewhere other than at the start of the input.
    #[error("unexpected '{0}' found")]
    UnexpectedBracket(char),

    /// A ranges literal did not consist of `begin-end` pairs.
    #[error("expecting one or more \"ranges\"")]
    OddRangeTokens,

    /// A range bound was not a non-negative 64-bit integer.
    #[error("expecting non-negative integers in '{token}'")]
    InvalidBound {
        /// The offending token.
        token: String,
    },

    /// A range had its bounds in descending order.
    #[error("invalid range {begin}-{end}: begin must not exceed end")]
    InvertedRange { begin: u64, end: u64 },
}
