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

//! # Index Lookup
//!
//! Positions of matching elements, as a typenum index sequence (`TArr` of
//! `Unsigned`). Positions are 0-based and ascending.
//!
//! The filtering engine only knows how to keep or drop elements, so the
//! position is carried along as payload: the list is zipped with its indices,
//! the pairs are filtered by testing the original element only, and the
//! surviving pairs are unzipped back to their indices. An empty list never
//! invokes the predicate and yields `ATerm`.
//!
//! Requires the `integer-sequence` feature.
//!
//! ```rust
//! use hawser::index::IndicesOfIn;
//! use hawser::{assert_type_eq, marker, tlist};
//! use hawser::typenum::{tarr, ATerm, U1, U2, U3, U9};
//!
//! marker! {
//!     struct A = U1;
//!     struct B = U2;
//!     struct C = U3;
//!     struct Z = U9;
//! }
//!
//! assert_type_eq::<IndicesOfIn<B, tlist![A, B, C, B]>, tarr![U1, U3]>();
//! assert_type_eq::<IndicesOfIn<Z, tlist![A, B, C]>, ATerm>();
//! ```

use crate::adapter::{IsSame, OnElement};
use crate::filter::{Filter, Filtered};
use hawser_core::list::TypeList;
use hawser_core::zip::{MakeUnzipped, MakeZipped, Unzip, Zip};

/// Positions of the elements for which the predicate `P` yields `B1`.
pub trait IndicesWhere<P>: TypeList {
    /// The ascending index sequence.
    type Output;
}

impl<P, L> IndicesWhere<P> for L
where
    L: Zip,
    MakeZipped<L>: Filter<OnElement<P>>,
    Filtered<OnElement<P>, MakeZipped<L>>: Unzip,
{
    type Output = MakeUnzipped<Filtered<OnElement<P>, MakeZipped<L>>>;
}

/// The positions in `L` of elements passing `P`.
pub type IndicesWhereOf<P, L> = <L as IndicesWhere<P>>::Output;

/// Positions of every occurrence of the marker `T`.
pub trait IndicesOf<T>: TypeList {
    /// The ascending index sequence.
    type Output;
}

impl<T, L> IndicesOf<T> for L
where
    L: IndicesWhere<IsSame<T>>,
{
    type Output = IndicesWhereOf<IsSame<T>, L>;
}

/// The positions of `T` in `L`.
pub type IndicesOfIn<T, L> = <L as IndicesOf<T>>::Output;
