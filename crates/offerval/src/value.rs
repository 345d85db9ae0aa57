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

//! The [`Value`] sum type over scalars, ranges, sets and text.

use crate::{error::ParseError, parse::parse, ranges::Ranges, scalar::Scalar, set::Set, text::Text};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// The tag identifying which algebra a [`Value`] follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Scalar,
    Ranges,
    Set,
    Text,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Scalar => "SCALAR",
            Self::Ranges => "RANGES",
            Self::Set => "SET",
            Self::Text => "TEXT",
        };
        f.write_str(name)
    }
}

/// A resource quantity: exactly one of a scalar, ranges, a set or text.
///
/// Two values of different variants are never equal.
///
/// # Examples
///
/// ```rust
/// # use offerval::value::{Value, ValueType};
/// let ports: Value = "[31000-32000]".parse().unwrap();
/// assert_eq!(ports.kind(), ValueType::Ranges);
/// assert_eq!(ports.to_string(), "[31000-32000]");
///
/// let cpus: Value = "4".parse().unwrap();
/// assert_eq!(cpus.kind(), ValueType::Scalar);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A floating-point amount, e.g. `cpus:2.5`.
    Scalar(Scalar),
    /// Discrete `u64` intervals, e.g. `ports:[31000-32000]`.
    Ranges(Ranges),
    /// String items, e.g. `disks:{ssd, hdd}`.
    Set(Set),
    /// Anything that is none of the above.
    Text(Text),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueType {
        match self {
            Self::Scalar(_) => ValueType::Scalar,
            Self::Ranges(_) => ValueType::Ranges,
            Self::Set(_) => ValueType::Set,
            Self::Text(_) => ValueType::Text,
        }
    }

    #[inline]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    #[inline]
    pub fn as_ranges(&self) -> Option<&Ranges> {
        match self {
            Self::Ranges(ranges) => Some(ranges),
            _ => None,
        }
    }

    #[inline]
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            Self::Set(set) => Some(set),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(scalar) => scalar.fmt(f),
            Self::Ranges(ranges) => ranges.fmt(f),
            Self::Set(set) => set.fmt(f),
            Self::Text(text) => text.fmt(f),
        }
    }
}

impl FromStr for Value {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Ranges> for Value {
    #[inline]
    fn from(ranges: Ranges) -> Self {
        Self::Ranges(ranges)
    }
}

impl From<Set> for Value {
    #[inline]
    fn from(set: Set) -> Self {
        Self::Set(set)
    }
}

impl From<Text> for Value {
    #[inline]
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
