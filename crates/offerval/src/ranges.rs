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

//! Discrete interval collections and their algebra.
//!
//! A [`Ranges`] value may be held in *raw* form, exactly as it was built or
//! parsed, or in *canonical* form (see [`crate::coalesce`]). Every comparison
//! and combinator below normalizes its operands first and only ever produces
//! canonical results, so callers never have to coalesce by hand.
//!
//! The in-place operators build their result in a fresh buffer and then swap
//! it in. A `Ranges` must not be mutated from more than one thread at a time;
//! independent values can be combined in parallel freely.

use crate::{
    coalesce::{coalesce_into, coalesce_vec, is_canonical},
    remove::remove_in_place,
};
use offerval_core::math::interval::ClosedInterval;
use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// An inclusive `[begin, end]` span of the unsigned 64-bit domain, such as a
/// port range.
pub type Range = ClosedInterval<u64>;

/// A collection of [`Range`] entries.
#[derive(Debug, Clone, Default)]
pub struct Ranges {
    ranges: Vec<Range>,
}

impl Ranges {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates an empty collection with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn from_canonical(ranges: Vec<Range>) -> Self {
        debug_assert!(is_canonical(&ranges));
        Self { ranges }
    }

    /// Appends `range` as-is. The collection may become non-canonical.
    #[inline]
    pub fn push(&mut self, range: Range) {
        self.ranges.push(range);
    }

    /// Returns the number of stored entries, canonical or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range> {
        self.ranges.iter()
    }

    /// Returns `true` if the stored entries are sorted, disjoint and non-adjacent.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        is_canonical(&self.ranges)
    }

    /// Rewrites the collection into canonical form.
    pub fn coalesce(&mut self) {
        if !self.is_canonical() {
            let ranges = std::mem::take(&mut self.ranges);
            self.ranges = coalesce_vec(ranges);
        }
    }

    /// Returns a canonical copy of the collection.
    pub fn canonicalized(&self) -> Ranges {
        Self {
            ranges: self.canonical().into_owned(),
        }
    }

    /// Returns `true` if `value` lies within one of the entries.
    pub fn contains(&self, value: u64) -> bool {
        self.ranges.iter().any(|range| range.contains_point(value))
    }

    /// Returns `true` if every point of `self` is also a point of `other`.
    ///
    /// Both sides are canonicalized first. In canonical form each entry of
    /// `self` is either fully inside a single entry of `other` or not covered,
    /// since two entries of `other` can never touch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval::ranges::{Range, Ranges};
    /// let small = Ranges::from(vec![Range::new(2, 3), Range::new(6, 7)]);
    /// let large = Ranges::from(vec![Range::new(1, 4), Range::new(5, 9)]);
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    pub fn is_subset(&self, other: &Ranges) -> bool {
        let left = self.canonical();
        let right = other.canonical();

        left.iter().all(|range| {
            // Last entry of `right` that begins at or before `range`.
            let candidates = right.partition_point(|r| r.begin() <= range.begin());
            candidates > 0 && right[candidates - 1].contains_interval(*range)
        })
    }

    fn canonical(&self) -> Cow<'_, [Range]> {
        if self.is_canonical() {
            Cow::Borrowed(&self.ranges)
        } else {
            Cow::Owned(coalesce_vec(self.ranges.clone()))
        }
    }
}

impl PartialEq for Ranges {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Ranges {}

impl PartialOrd for Ranges {
    /// Orders collections by inclusion: `a <= b` holds when `a` is a subset
    /// of `b`. Collections where neither contains the other are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset(other), other.is_subset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl Add<&Ranges> for &Ranges {
    type Output = Ranges;

    fn add(self, rhs: &Ranges) -> Self::Output {
        let mut working = Vec::with_capacity(self.len() + rhs.len());
        working.extend_from_slice(&self.ranges);
        working.extend_from_slice(&rhs.ranges);
        Ranges::from_canonical(coalesce_vec(working))
    }
}

impl Sub<&Ranges> for &Ranges {
    type Output = Ranges;

    fn sub(self, rhs: &Ranges) -> Self::Output {
        let mut result = self.canonicalized();
        result -= rhs;
        result
    }
}

impl AddAssign<&Ranges> for Ranges {
    fn add_assign(&mut self, rhs: &Ranges) {
        coalesce_into(self, [rhs]);
    }
}

impl SubAssign<&Ranges> for Ranges {
    fn sub_assign(&mut self, rhs: &Ranges) {
        self.coalesce();
        for removal in rhs.iter() {
            remove_in_place(self, *removal);
        }
    }
}

macro_rules! forward_owned_ops {
    ($t:ty) => {
        impl Add for $t {
            type Output = $t;

            #[inline]
            fn add(self, rhs: $t) -> Self::Output {
                &self + &rhs
            }
        }

        impl Sub for $t {
            type Output = $t;

            #[inline]
            fn sub(self, rhs: $t) -> Self::Output {
                &self - &rhs
            }
        }

        impl AddAssign for $t {
            #[inline]
            fn add_assign(&mut self, rhs: $t) {
                *self += &rhs;
            }
        }

        impl SubAssign for $t {
            #[inline]
            fn sub_assign(&mut self, rhs: $t) {
                *self -= &rhs;
            }
        }
    };
}

pub(crate) use forward_owned_ops;

forward_owned_ops!(Ranges);

impl Display for Ranges {
    /// Writes the canonical form as `[b1-e1, b2-e2, ...]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (index, range) in self.canonical().iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", range)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Range>> for Ranges {
    #[inline]
    fn from(ranges: Vec<Range>) -> Self {
        Self { ranges }
    }
}

impl From<Range> for Ranges {
    #[inline]
    fn from(range: Range) -> Self {
        Self {
            ranges: vec![range],
        }
    }
}

impl FromIterator<Range> for Ranges {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Ranges {
    type Item = Range;
    type IntoIter = std::vec::IntoIter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ranges {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(begin: u64, end: u64) -> Range {
        Range::new(begin, end)
    }

    fn ranges(items: &[(u64, u64)]) -> Ranges {
        items.iter().map(|&(b, e)| r(b, e)).collect()
    }

    #[test]
    fn test_raw_storage_is_preserved_until_normalized() {
        let mut raw = ranges(&[(4, 6), (1, 2), (3, 3)]);
        assert_eq!(raw.len(), 3);
        assert!(!raw.is_canonical());

        raw.coalesce();
        assert_eq!(raw.as_slice(), &[r(1, 6)]);
        assert!(raw.is_canonical());
    }

    #[test]
    fn test_equality_is_canonical() {
        assert_eq!(ranges(&[(1, 5), (6, 9)]), ranges(&[(1, 9)]));
        assert_eq!(ranges(&[(8, 9), (1, 5)]), ranges(&[(1, 5), (8, 9)]));
        assert_ne!(ranges(&[(1, 5), (7, 9)]), ranges(&[(1, 9)]));
        assert_eq!(Ranges::new(), Ranges::new());
        assert_ne!(Ranges::new(), ranges(&[(0, 0)]));
    }

    #[test]
    fn test_subset() {
        let a = ranges(&[(2, 3), (10, 12)]);
        let b = ranges(&[(1, 5), (9, 20)]);

        assert!(a.is_subset(&b));
        assert!(!b.is_subset(&a));
        assert!(a.is_subset(&a));
        assert!(Ranges::new().is_subset(&a));
        assert!(!a.is_subset(&Ranges::new()));
    }

    #[test]
    fn test_subset_spanning_raw_right_hand_entries() {
        // `[1, 5]` and `[6, 10]` merge, so `[4, 7]` is covered.
        let left = ranges(&[(4, 7)]);
        let right = ranges(&[(6, 10), (1, 5)]);
        assert!(left.is_subset(&right));
    }

    #[test]
    fn test_subset_rejects_partial_cover() {
        let left = ranges(&[(4, 8)]);
        let right = ranges(&[(1, 5), (7, 10)]);
        assert!(!left.is_subset(&right));
    }

    #[test]
    fn test_partial_order() {
        let a = ranges(&[(1, 3)]);
        let b = ranges(&[(1, 10)]);
        let c = ranges(&[(20, 30)]);

        assert!(a <= b);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= a.clone());
        assert_eq!(a.partial_cmp(&c), None);
        assert!(c.partial_cmp(&a).is_none());
    }

    #[test]
    fn test_union() {
        let a = ranges(&[(1, 5)]);
        let b = ranges(&[(6, 9), (20, 25)]);
        assert_eq!((&a + &b).as_slice(), &[r(1, 9), r(20, 25)]);
        assert_eq!((a + b).as_slice(), &[r(1, 9), r(20, 25)]);
    }

    #[test]
    fn test_difference() {
        let a = ranges(&[(1, 10)]);
        assert_eq!((&a - &ranges(&[(4, 6)])).as_slice(), &[r(1, 3), r(7, 10)]);
        assert!((&a - &a).is_empty());
        assert_eq!(
            (a - ranges(&[(1, 2), (9, 10)])).as_slice(),
            &[r(3, 8)]
        );
    }

    #[test]
    fn test_difference_of_raw_left_operand() {
        let raw = ranges(&[(5, 10), (1, 4)]);
        let result = &raw - &ranges(&[(3, 6)]);
        assert_eq!(result.as_slice(), &[r(1, 2), r(7, 10)]);
    }

    #[test]
    fn test_add_assign() {
        let mut acc = ranges(&[(10, 20)]);
        acc += &ranges(&[(1, 9)]);
        acc += ranges(&[(30, 40)]);
        assert_eq!(acc.as_slice(), &[r(1, 20), r(30, 40)]);
    }

    #[test]
    fn test_sub_assign() {
        let mut acc = ranges(&[(20, 30), (1, 10)]);
        acc -= &ranges(&[(5, 25)]);
        assert_eq!(acc.as_slice(), &[r(1, 4), r(26, 30)]);

        acc -= ranges(&[(1, 4), (26, 30)]);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_self_accumulation_through_a_copy() {
        let mut acc = ranges(&[(1, 3), (2, 5)]);
        let snapshot = acc.clone();
        acc += &snapshot;
        assert_eq!(acc.as_slice(), &[r(1, 5)]);

        acc -= snapshot;
        assert!(acc.is_empty());
    }

    #[test]
    fn test_contains() {
        let a = ranges(&[(1, 5), (10, 10)]);
        assert!(a.contains(1));
        assert!(a.contains(10));
        assert!(!a.contains(6));
        assert!(!Ranges::new().contains(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(ranges(&[(8, 9), (1, 5)]).to_string(), "[1-5, 8-9]");
        assert_eq!(ranges(&[(1, 2), (3, 3)]).to_string(), "[1-3]");
        assert_eq!(Ranges::new().to_string(), "[]");
    }

    #[test]
    fn test_canonicalized_leaves_source_untouched() {
        let raw = ranges(&[(3, 4), (1, 2)]);
        let canonical = raw.canonicalized();
        assert_eq!(raw.len(), 2);
        assert_eq!(canonical.as_slice(), &[r(1, 4)]);
    }
}
