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

use core::ops::{Add, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
///
/// # Examples
///
/// ```rust
/// # use offerval_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u64 = u64::MAX;
/// assert_eq!(a.checked_add_val(1), None); // Overflow occurs
/// let b: u64 = 41;
/// assert_eq!(b.checked_add_val(1), Some(42));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use offerval_core::num::ops::checked_arithmetic::CheckedSubVal;
///
/// let a: u64 = 0;
/// assert_eq!(a.checked_sub_val(1), None); // Underflow occurs
/// let b: u64 = 3;
/// assert_eq!(b.checked_sub_val(1), Some(2));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(
    CheckedAddVal,
    checked_add_val,
    checked_add,
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128
);

checked_impl_val!(
    CheckedSubVal,
    checked_sub_val,
    checked_sub,
    u8, u16, u32, u64, usize, u128, i8, i16, i32, i64, isize, i128
);
