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

use crate::num::{
    constants::PlusOne,
    ops::checked_arithmetic::{CheckedAddVal, CheckedSubVal},
};
use num_traits::PrimInt;
use smallvec::SmallVec;
use std::cmp::{max, min};

/// A closed interval `[begin, end]` where both bounds are inclusive.
///
/// This struct represents a non-empty, contiguous run of integers. Because both
/// ends are inclusive, an interval can reach the maximum value of `T`, which
/// means that the neighbours of an interval (`begin - 1` and `end + 1`) are
/// not always representable. Every operation that needs them goes through
/// [`ClosedInterval::predecessor`] and [`ClosedInterval::successor`], which
/// return `None` at the domain boundaries instead of wrapping around.
///
/// # Invariants
/// `begin` must always be less than or equal to `end`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    begin: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt + CheckedAddVal + CheckedSubVal + PlusOne,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0u64, 10);
    /// assert_eq!(iv.begin(), 0);
    /// assert_eq!(iv.end(), 10);
    /// ```
    #[inline]
    pub fn new(begin: T, end: T) -> Self {
        assert!(
            begin <= end,
            "Invalid interval: begin must be less than or equal to end"
        );
        Self { begin, end }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `begin > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0u64, 10).is_some());
    /// assert!(ClosedInterval::try_new(5u64, 5).is_some());
    /// assert!(ClosedInterval::try_new(10u64, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(begin: T, end: T) -> Option<Self> {
        if begin <= end {
            Some(Self { begin, end })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `begin <= end`.
    /// This function contains a `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(begin: T, end: T) -> Self {
        debug_assert!(
            begin <= end,
            "Invalid interval: begin must be less than or equal to end"
        );
        Self { begin, end }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub const fn begin(&self) -> T {
        self.begin
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Returns the value immediately before the interval (`begin - 1`).
    ///
    /// Returns `None` when `begin` is the minimum of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(3u64, 5).predecessor(), Some(2));
    /// assert_eq!(ClosedInterval::new(0u64, 5).predecessor(), None);
    /// ```
    #[inline]
    pub fn predecessor(&self) -> Option<T> {
        self.begin.checked_sub_val(T::PLUS_ONE)
    }

    /// Returns the value immediately after the interval (`end + 1`).
    ///
    /// Returns `None` when `end` is the maximum of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(3u64, 5).successor(), Some(6));
    /// assert_eq!(ClosedInterval::new(3u64, u64::MAX).successor(), None);
    /// ```
    #[inline]
    pub fn successor(&self) -> Option<T> {
        self.end.checked_add_val(T::PLUS_ONE)
    }

    /// Returns `true` if this interval shares at least one point with `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0u64, 10);
    /// assert!(a.intersects(ClosedInterval::new(10, 15)));
    /// assert!(!a.intersects(ClosedInterval::new(11, 15)));
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    /// Returns `true` if the intervals do not overlap and no representable value
    /// lies between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1u64, 5);
    /// assert!(a.adjacent(ClosedInterval::new(6, 9)));
    /// assert!(!a.adjacent(ClosedInterval::new(5, 9))); // Overlapping
    /// assert!(!a.adjacent(ClosedInterval::new(7, 9))); // Gap
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        self.successor() == Some(other.begin) || other.successor() == Some(self.begin)
    }

    /// Returns `true` if the intervals either intersect or are adjacent.
    ///
    /// This is the condition under which two intervals can be merged into a
    /// single contiguous interval.
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.intersects(other) || self.adjacent(other)
    }

    /// Returns `true` if `value` lies within `[begin, end]`.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.begin <= value && value <= self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0u64, 10);
    /// assert!(a.contains_interval(ClosedInterval::new(0, 10)));
    /// assert!(a.contains_interval(ClosedInterval::new(2, 8)));
    /// assert!(!a.contains_interval(ClosedInterval::new(5, 11)));
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` if the intervals overlap or are adjacent.
    /// Returns `None` if the intervals are separated by a gap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1u64, 5);
    /// let b = ClosedInterval::new(6, 9);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(1, 9)));
    /// assert_eq!(a.union(ClosedInterval::new(8, 9)), None);
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects_or_adjacent(other) {
            Some(Self {
                begin: min(self.begin, other.begin),
                end: max(self.end, other.end),
            })
        } else {
            None
        }
    }

    /// Calculates the set difference `self - removal`.
    ///
    /// The four possible relations between `self` and `removal` are handled
    /// as mutually exclusive cases:
    ///
    /// * subsumed: `removal` covers `self`, nothing remains.
    /// * disjoint: `self` is returned unchanged.
    /// * straddling: `removal` lies strictly inside `self`, which splits in two.
    /// * partial overlap: one side of `self` is trimmed.
    ///
    /// Fragments that would have to start after the type maximum or end
    /// before the type minimum do not exist and are never emitted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use offerval_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1u64, 10);
    ///
    /// let diff = a.difference(ClosedInterval::new(4, 6));
    /// assert_eq!(diff.as_slice(), &[ClosedInterval::new(1, 3), ClosedInterval::new(7, 10)]);
    ///
    /// let diff = ClosedInterval::new(0u64, 5).difference(ClosedInterval::new(0, 2));
    /// assert_eq!(diff.as_slice(), &[ClosedInterval::new(3, 5)]);
    /// ```
    pub fn difference(&self, removal: Self) -> SmallVec<[Self; 2]> {
        let mut result = SmallVec::new();

        if removal.contains_interval(*self) {
            return result;
        }

        if !self.intersects(removal) {
            result.push(*self);
            return result;
        }

        // Front fragment `[begin, removal.begin - 1]`. It exists only when
        // `self` starts before `removal`, in which case `removal.begin` is
        // strictly greater than the minimum and has a predecessor.
        if self.begin < removal.begin {
            if let Some(front_end) = removal.predecessor() {
                result.push(Self::new_unchecked(self.begin, front_end));
            }
        }

        // Back fragment `[removal.end + 1, end]`, symmetric to the front.
        if self.end > removal.end {
            if let Some(back_begin) = removal.successor() {
                result.push(Self::new_unchecked(back_begin, self.end));
            }
        }

        result
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(begin: u64, end: u64) -> ClosedInterval<u64> {
        ClosedInterval::new(begin, end)
    }

    #[test]
    fn test_construction_valid() {
        let a = iv(10, 20);
        assert_eq!(a.begin(), 10);
        assert_eq!(a.end(), 20);
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5u64, 10).is_some());
        assert!(ClosedInterval::try_new(5u64, 5).is_some());
        // Invalid: begin > end
        assert!(ClosedInterval::try_new(10u64, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10u64, 5);
    }

    #[test]
    fn test_neighbours_at_domain_boundaries() {
        assert_eq!(iv(0, 4).predecessor(), None);
        assert_eq!(iv(1, 4).predecessor(), Some(0));
        assert_eq!(iv(4, u64::MAX).successor(), None);
        assert_eq!(iv(4, u64::MAX - 1).successor(), Some(u64::MAX));
    }

    #[test]
    fn test_intersects() {
        let a = iv(5, 10);

        // Disjoint left
        assert!(!a.intersects(iv(0, 3)));
        // Touching left (adjacent, no shared point)
        assert!(!a.intersects(iv(0, 4)));
        // Shared endpoint
        assert!(a.intersects(iv(0, 5)));
        // Contained
        assert!(a.intersects(iv(6, 8)));
        // Identity
        assert!(a.intersects(a));
        // Shared endpoint right
        assert!(a.intersects(iv(10, 15)));
        // Touching right
        assert!(!a.intersects(iv(11, 15)));
    }

    #[test]
    fn test_adjacent() {
        let a = iv(5, 10);

        assert!(a.adjacent(iv(0, 4)));
        assert!(a.adjacent(iv(11, 15)));
        // Overlapping is not adjacent
        assert!(!a.adjacent(iv(10, 15)));
        // Gap
        assert!(!a.adjacent(iv(12, 15)));
        // No wraparound between the two ends of the domain
        assert!(!iv(0, 3).adjacent(iv(u64::MAX, u64::MAX)));
    }

    #[test]
    fn test_contains_point() {
        let a = iv(1, 10);
        assert!(a.contains_point(1));
        assert!(a.contains_point(10));
        assert!(!a.contains_point(0));
        assert!(!a.contains_point(11));
    }

    #[test]
    fn test_union() {
        let a = iv(0, 10);

        // Overlapping
        assert_eq!(a.union(iv(5, 15)), Some(iv(0, 15)));
        // Adjacent
        assert_eq!(a.union(iv(11, 20)), Some(iv(0, 20)));
        // Contained
        assert_eq!(a.union(iv(2, 8)), Some(a));
        // Gap
        assert_eq!(a.union(iv(12, 20)), None);
        // Touching the domain maximum
        assert_eq!(
            iv(5, u64::MAX).union(iv(u64::MAX, u64::MAX)),
            Some(iv(5, u64::MAX))
        );
    }

    #[test]
    fn test_intersects_or_adjacent() {
        let a = iv(0, 10);
        assert!(a.intersects_or_adjacent(iv(5, 15)));
        assert!(a.intersects_or_adjacent(iv(11, 20)));
        assert!(!a.intersects_or_adjacent(iv(12, 20)));
    }

    #[test]
    fn test_difference() {
        let base = iv(1, 10);

        // 1. Disjoint (no effect)
        assert_eq!(base.difference(iv(12, 15)).as_slice(), &[base]);

        // 2. Full cover
        assert!(base.difference(iv(0, 15)).is_empty());
        assert!(base.difference(base).is_empty());

        // 3. Trim back
        assert_eq!(base.difference(iv(8, 15)).as_slice(), &[iv(1, 7)]);

        // 4. Trim front
        assert_eq!(base.difference(iv(0, 2)).as_slice(), &[iv(3, 10)]);

        // 5. Straddling
        assert_eq!(
            base.difference(iv(4, 6)).as_slice(),
            &[iv(1, 3), iv(7, 10)]
        );

        // 6. Shared begin, shorter removal
        assert_eq!(base.difference(iv(1, 4)).as_slice(), &[iv(5, 10)]);
    }

    #[test]
    fn test_difference_domain_boundaries() {
        assert_eq!(iv(0, 5).difference(iv(0, 2)).as_slice(), &[iv(3, 5)]);

        let top = iv(0, u64::MAX);
        assert_eq!(
            top.difference(iv(3, 5)).as_slice(),
            &[iv(0, 2), iv(6, u64::MAX)]
        );
        assert_eq!(
            top.difference(iv(3, u64::MAX)).as_slice(),
            &[iv(0, 2)]
        );
        assert_eq!(
            top.difference(iv(0, 5)).as_slice(),
            &[iv(6, u64::MAX)]
        );
    }

    #[test]
    fn test_traits_display_debug() {
        let a = iv(10, 20);
        assert_eq!(format!("{}", a), "10-20");
        assert_eq!(format!("{:?}", a), "ClosedInterval { begin: 10, end: 20 }");
    }

    #[test]
    fn test_ordering_by_begin_then_end() {
        let mut items = vec![iv(4, 6), iv(1, 2), iv(1, 1), iv(3, 3)];
        items.sort();
        assert_eq!(items, vec![iv(1, 1), iv(1, 2), iv(3, 3), iv(4, 6)]);
    }
}
