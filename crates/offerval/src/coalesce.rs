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

//! Normalization of range collections into canonical form.
//!
//! A collection is canonical when its entries are sorted ascending, no two
//! entries overlap and no two entries are adjacent. Because the domain is the
//! discrete set of `u64` values, `[1, 5]` and `[6, 9]` cover a contiguous span
//! and are merged into `[1, 9]`.
//!
//! Every combinator in [`crate::ranges`] funnels its operands through this
//! module, so the sweep is written to run in a single pass after sorting and
//! to reuse the working buffer for its output.

use crate::ranges::{Range, Ranges};

/// Sorts and merges `ranges` into canonical form, reusing the allocation.
///
/// This is the sweep underneath every public coalescing entry point. An entry
/// that overlaps or touches the current run is folded into it; any other entry
/// closes the run and starts the next one. Adjacency is decided through
/// [`Range::successor`], so a run ending at `u64::MAX` absorbs every later
/// entry instead of wrapping around.
pub(crate) fn coalesce_vec(mut ranges: Vec<Range>) -> Vec<Range> {
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort_unstable();

    let mut count = 0;
    let mut current = ranges[0];

    for index in 1..ranges.len() {
        let range = ranges[index];

        if range == current {
            continue;
        }

        match current.union(range) {
            Some(merged) => current = merged,
            None => {
                // `count <= index - 1`, so this slot has already been consumed.
                ranges[count] = current;
                count += 1;
                current = range;
            }
        }
    }

    ranges[count] = current;
    ranges.truncate(count + 1);
    ranges
}

/// Returns `true` if `ranges` is sorted, non-overlapping and non-adjacent.
pub(crate) fn is_canonical(ranges: &[Range]) -> bool {
    ranges.windows(2).all(|pair| {
        pair[0]
            .successor()
            .is_some_and(|next| next < pair[1].begin())
    })
}

/// Coalesces `existing` together with every collection in `additions`.
///
/// None of the inputs need to be canonical: they may be unsorted, overlapping
/// or contain duplicate and adjacent entries. The result is the unique
/// canonical form of their union.
///
/// # Examples
///
/// ```rust
/// # use offerval::coalesce::coalesce;
/// # use offerval::ranges::{Range, Ranges};
/// let existing = Ranges::from(vec![Range::new(1, 2), Range::new(4, 6)]);
/// let bridge = Ranges::from(vec![Range::new(3, 3)]);
///
/// let result = coalesce(&existing, [&bridge]);
/// assert_eq!(result.as_slice(), &[Range::new(1, 6)]);
/// ```
pub fn coalesce<'a, I>(existing: &Ranges, additions: I) -> Ranges
where
    I: IntoIterator<Item = &'a Ranges>,
{
    let mut working = existing.as_slice().to_vec();
    for addition in additions {
        working.extend_from_slice(addition.as_slice());
    }
    Ranges::from_canonical(coalesce_vec(working))
}

/// Coalesces every collection in `additions` into `result`.
///
/// The merged entries are materialized in a local buffer before `result` is
/// replaced, so `result` is never observed half-written.
///
/// # Examples
///
/// ```rust
/// # use offerval::coalesce::coalesce_into;
/// # use offerval::ranges::{Range, Ranges};
/// let mut result = Ranges::from(vec![Range::new(1, 5)]);
/// let more = Ranges::from(vec![Range::new(6, 9), Range::new(20, 30)]);
///
/// coalesce_into(&mut result, [&more]);
/// assert_eq!(result.as_slice(), &[Range::new(1, 9), Range::new(20, 30)]);
/// ```
pub fn coalesce_into<'a, I>(result: &mut Ranges, additions: I)
where
    I: IntoIterator<Item = &'a Ranges>,
{
    let merged = coalesce(result, additions);
    *result = merged;
}

/// Coalesces a single `range` into `result`.
pub fn coalesce_range(result: &mut Ranges, range: Range) {
    let mut working = Vec::with_capacity(result.len() + 1);
    working.extend_from_slice(result.as_slice());
    working.push(range);
    *result = Ranges::from_canonical(coalesce_vec(working));
}
