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

//! String sets such as attribute values or disk identifiers.
//!
//! Items keep the order in which they first appeared. Raw input may carry
//! duplicates; the combinators never introduce new ones.

use crate::ranges::forward_owned_ops;
use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// An insertion-ordered collection of strings with set semantics.
#[derive(Debug, Clone, Default)]
pub struct Set {
    items: Vec<String>,
}

impl Set {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `item` as-is, even if an equal item is already present.
    #[inline]
    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    #[inline]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|candidate| candidate == item)
    }

    /// Returns `true` if every item of `self` appears somewhere in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval::set::Set;
    /// let small: Set = ["a", "b"].into_iter().collect();
    /// let large: Set = ["c", "b", "a"].into_iter().collect();
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    pub fn is_subset(&self, other: &Set) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }
}

impl PartialEq for Set {
    /// Two sets are equal when they hold the same number of items and every
    /// item of `self` can be paired with a distinct, equal item of `other`.
    /// Positions do not matter, so `{a, b} == {b, a}` while `{a, a} != {a, b}`.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut matched = vec![false; other.len()];
        self.items.iter().all(|item| {
            let slot = other
                .items
                .iter()
                .zip(matched.iter())
                .position(|(candidate, &used)| !used && candidate == item);
            match slot {
                Some(index) => {
                    matched[index] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl Add<&Set> for &Set {
    type Output = Set;

    /// Returns the items of `self` followed by each item of `rhs` not yet seen.
    fn add(self, rhs: &Set) -> Self::Output {
        let mut result = self.clone();
        for item in rhs.iter() {
            if !result.contains(item) {
                result.items.push(item.clone());
            }
        }
        result
    }
}

impl Sub<&Set> for &Set {
    type Output = Set;

    /// Returns the items of `self` that appear nowhere in `rhs`.
    fn sub(self, rhs: &Set) -> Self::Output {
        self.items
            .iter()
            .filter(|item| !rhs.contains(item))
            .cloned()
            .collect()
    }
}

impl AddAssign<&Set> for Set {
    /// Appends each item of `rhs` that is not already present.
    fn add_assign(&mut self, rhs: &Set) {
        let mut items = self.items.clone();
        for item in rhs.iter() {
            if !items.contains(item) {
                items.push(item.clone());
            }
        }
        self.items = items;
    }
}

impl SubAssign<&Set> for Set {
    /// Removes, for each item of `rhs`, the first matching item of `self`.
    fn sub_assign(&mut self, rhs: &Set) {
        let mut items = self.items.clone();
        for item in rhs.iter() {
            if let Some(position) = items.iter().position(|candidate| candidate == item) {
                items.remove(position);
            }
        }
        self.items = items;
    }
}

forward_owned_ops!(Set);

impl Display for Set {
    /// Writes the items in insertion order as `{a, b, ...}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.items.join(", "))
    }
}

impl<S> FromIterator<S> for Set
where
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for Set {
    #[inline]
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl IntoIterator for Set {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
