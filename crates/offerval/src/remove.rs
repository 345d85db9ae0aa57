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

//! Subtraction of a single interval from a range collection.

use crate::{
    coalesce::coalesce_vec,
    ranges::{Range, Ranges},
};

/// Removes every point of `removal` from `ranges`, returning a new collection.
///
/// Each entry is split, trimmed, dropped or kept as-is depending on how it
/// relates to `removal` (see [`Range::difference`]). The fragments are then
/// coalesced, so the result is canonical.
///
/// # Examples
///
/// ```rust
/// # use offerval::remove::remove;
/// # use offerval::ranges::{Range, Ranges};
/// let ranges = Ranges::from(vec![Range::new(1, 10)]);
///
/// let result = remove(&ranges, Range::new(4, 6));
/// assert_eq!(result.as_slice(), &[Range::new(1, 3), Range::new(7, 10)]);
///
/// let result = remove(&ranges, Range::new(1, 10));
/// assert!(result.is_empty());
/// ```
pub fn remove(ranges: &Ranges, removal: Range) -> Ranges {
    Ranges::from_canonical(coalesce_vec(fragments(ranges, removal)))
}

/// Removes every point of `removal` from `ranges` in place.
pub fn remove_in_place(ranges: &mut Ranges, removal: Range) {
    let remaining = coalesce_vec(fragments(ranges, removal));
    *ranges = Ranges::from_canonical(remaining);
}

fn fragments(ranges: &Ranges, removal: Range) -> Vec<Range> {
    // A straddled entry splits in two, every other entry yields at most one.
    let mut fragments = Vec::with_capacity(ranges.len() + 1);
    for range in ranges.iter() {
        fragments.extend(range.difference(removal));
    }
    fragments
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
    fn test_subsumed_entry_is_dropped() {
        let result = remove(&ranges(&[(3, 4), (10, 12)]), r(1, 5));
        assert_eq!(result.as_slice(), &[r(10, 12)]);
    }

    #[test]
    fn test_straddling_entry_is_split() {
        let result = remove(&ranges(&[(1, 10)]), r(4, 6));
        assert_eq!(result.as_slice(), &[r(1, 3), r(7, 10)]);
    }

    #[test]
    fn test_disjoint_entries_are_kept() {
        let result = remove(&ranges(&[(1, 3), (20, 30)]), r(5, 10));
        assert_eq!(result.as_slice(), &[r(1, 3), r(20, 30)]);
    }

    #[test]
    fn test_partial_overlap_trims_front_and_back() {
        let result = remove(&ranges(&[(1, 5), (8, 12)]), r(4, 9));
        assert_eq!(result.as_slice(), &[r(1, 3), r(10, 12)]);
    }

    #[test]
    fn test_removal_touching_single_point() {
        let result = remove(&ranges(&[(1, 5)]), r(5, 5));
        assert_eq!(result.as_slice(), &[r(1, 4)]);

        let result = remove(&ranges(&[(1, 5)]), r(1, 1));
        assert_eq!(result.as_slice(), &[r(2, 5)]);
    }

    #[test]
    fn test_removal_starting_at_zero_does_not_underflow() {
        let result = remove(&ranges(&[(0, 5)]), r(0, 2));
        assert_eq!(result.as_slice(), &[r(3, 5)]);

        let result = remove(&ranges(&[(0, 5)]), r(0, 5));
        assert!(result.is_empty());
    }

    #[test]
    fn test_removal_ending_at_max_does_not_overflow() {
        let full = ranges(&[(0, u64::MAX)]);

        let result = remove(&full, r(3, 5));
        assert_eq!(result.as_slice(), &[r(0, 2), r(6, u64::MAX)]);

        let result = remove(&full, r(10, u64::MAX));
        assert_eq!(result.as_slice(), &[r(0, 9)]);
    }

    #[test]
    fn test_straddled_entry_is_emitted_once() {
        let result = remove(&ranges(&[(1, 100)]), r(50, 50));
        assert_eq!(result.len(), 2);
        assert_eq!(result.as_slice(), &[r(1, 49), r(51, 100)]);
    }

    #[test]
    fn test_remove_in_place() {
        let mut target = ranges(&[(1, 10), (20, 30)]);
        remove_in_place(&mut target, r(5, 25));
        assert_eq!(target.as_slice(), &[r(1, 4), r(26, 30)]);
    }

    #[test]
    fn test_remove_from_empty() {
        assert!(remove(&Ranges::new(), r(1, 2)).is_empty());
    }
}
