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

//! Floating-point magnitudes such as CPU shares or memory megabytes.

use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A single floating-point magnitude.
///
/// Comparisons are exact IEEE 754 comparisons without any epsilon, so
/// `0.1 + 0.2 != 0.3` holds here just as it does for `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Scalar {
    value: f64,
}

impl Scalar {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Add for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: Scalar) -> Self::Output {
        Scalar::new(self.value + rhs.value)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: Scalar) -> Self::Output {
        Scalar::new(self.value - rhs.value)
    }
}

impl AddAssign for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Scalar) {
        self.value += rhs.value;
    }
}

impl SubAssign for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Scalar) {
        self.value -= rhs.value;
    }
}

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Scalar::new(1.5);
        let b = Scalar::new(0.5);
        assert_eq!((a + b).value(), 2.0);
        assert_eq!((a - b).value(), 1.0);
        assert_eq!((b - a).value(), -1.0);
    }

    #[test]
    fn test_assign_operators() {
        let mut acc = Scalar::new(4.0);
        acc += Scalar::new(2.0);
        assert_eq!(acc, Scalar::new(6.0));
        acc -= Scalar::new(10.0);
        assert_eq!(acc, Scalar::new(-4.0));
    }

    #[test]
    fn test_comparison_is_exact() {
        assert!(Scalar::new(1.0) <= Scalar::new(1.0));
        assert!(Scalar::new(1.0) <= Scalar::new(2.0));
        assert!(Scalar::new(2.0) > Scalar::new(1.0));
        assert_ne!(Scalar::new(0.1) + Scalar::new(0.2), Scalar::new(0.3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Scalar::new(2.0).to_string(), "2");
        assert_eq!(Scalar::new(0.25).to_string(), "0.25");
        assert_eq!(Scalar::new(-3.5).to_string(), "-3.5");
    }
}
