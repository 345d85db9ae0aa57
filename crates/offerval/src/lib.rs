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

//! # Offerval
//!
//! A typed value algebra for quantities found in cluster resource offers:
//! scalar amounts (CPU shares), discrete `u64` ranges (port ranges), string
//! sets (attribute values) and opaque text.
//!
//! ## Modules
//!
//! - `ranges`: The `Range`/`Ranges` types and their algebra (equality, subset,
//!   union, difference and the in-place forms), always producing canonical
//!   results.
//! - `coalesce`: Normalization of arbitrary range bags into the unique sorted,
//!   disjoint, non-adjacent form.
//! - `remove`: Subtraction of one interval from a range collection, safe at
//!   both ends of the `u64` domain.
//! - `scalar`, `set`, `text`: The simpler sibling algebras.
//! - `value`: The `Value` sum type over the four variants.
//! - `parse`: Text to `Value` conversion, with `error::ParseError` on failure.
//!
//! ## Example
//!
//! ```rust
//! # use offerval::value::Value;
//! let offered: Value = "[31000-32000]".parse().unwrap();
//! let used: Value = "[31000-31009, 31020-31020]".parse().unwrap();
//!
//! if let (Value::Ranges(offered), Value::Ranges(used)) = (offered, used) {
//!     let free = offered - used;
//!     assert_eq!(free.to_string(), "[31010-31019, 31021-32000]");
//! }
//! ```
//!
//! All operations are synchronous and pure apart from the explicit
//! accumulator of the `+=`/`-=` operators.

pub mod coalesce;
pub mod error;
pub mod parse;
pub mod ranges;
pub mod remove;
pub mod scalar;
pub mod set;
pub mod text;
pub mod value;
