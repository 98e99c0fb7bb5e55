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

//! # Hawser Core
//!
//! The typelist substrate underneath `hawser`. Everything in this crate lives
//! at the type level: values are types, functions are traits with an
//! associated `Output`, and evaluation is trait resolution performed by the
//! compiler. Nothing here allocates or runs, apart from the small diagnostic
//! helpers used by tests.
//!
//! ## Modules
//!
//! - `marker`: Marker identity (`Marker`, `SameAs`), identity namespaces for
//!   user markers, typenum numbers, bits, primitives and typelists, and the
//!   `marker!` declaration macro.
//! - `list`: The immutable typelist (`Nil`, `Cons`, `tlist!`), recognition
//!   (`IsTypeList`) and appending (`Push`).
//! - `func`: Type-level function contracts (`Func`, `Predicate`).
//! - `transform`: Order-preserving element map (`Transform`).
//! - `group`: Partitioning by key with first-seen key order (`GroupBy`,
//!   `GetGroup`, `GroupKey`).
//! - `zip`: Pairing of elements with their positions (`Zip`, `Unzip`). Only
//!   available with the `integer-sequence` feature.
//! - `assert`: `assert_type_eq` for tests and examples.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::{assert_type_eq, tlist};
//! use hawser_core::group::{GetGroup, GroupBy, GroupOf, Grouped};
//! use hawser_core::typenum::{B0, B1, U1, U2, U3};
//! use hawser_core::func::Predicate;
//!
//! struct IsOdd;
//! impl Predicate<U1> for IsOdd { type Output = B1; }
//! impl Predicate<U2> for IsOdd { type Output = B0; }
//! impl Predicate<U3> for IsOdd { type Output = B1; }
//!
//! struct Parity;
//! impl<N> hawser_core::func::Func<N> for Parity
//! where
//!     IsOdd: Predicate<N>,
//! {
//!     type Output = <IsOdd as Predicate<N>>::Output;
//! }
//!
//! type Groups = Grouped<Parity, tlist![U1, U2, U3]>;
//! assert_type_eq::<GroupOf<B1, Groups>, tlist![U1, U3]>();
//! assert_type_eq::<GroupOf<B0, Groups>, tlist![U2]>();
//! ```

pub mod assert;
pub mod func;
pub mod group;
pub mod list;
pub mod marker;
pub mod transform;

#[cfg(feature = "integer-sequence")]
pub mod zip;

pub use assert::assert_type_eq;
pub use list::{Cons, Nil, TypeList};
pub use marker::Marker;

pub use typenum;
