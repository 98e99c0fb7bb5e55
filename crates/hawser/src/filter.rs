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

//! # Filtering
//!
//! Selection over typelists, built on grouping rather than on a hand-written
//! recursion: a predicate becomes a `B1`/`B0` key function, the list is
//! grouped by it, and the `B1` group is the result. Deduplication groups by
//! identity and keeps the keys.
//!
//! All three operations keep the relative order of the source list. `Filter`
//! and `FilterOf` keep duplicates; `Dedup` keeps the first occurrence of each
//! marker only.
//!
//! ## Usage
//!
//! ```rust
//! use hawser::filter::{Deduped, FilteredOf};
//! use hawser::{assert_type_eq, marker, tlist};
//! use hawser::typenum::{U1, U2, U3};
//!
//! marker! {
//!     struct A = U1;
//!     struct B = U2;
//!     struct C = U3;
//! }
//!
//! assert_type_eq::<FilteredOf<A, tlist![A, B, A, C]>, tlist![A, A]>();
//! assert_type_eq::<Deduped<tlist![A, B, A, C, B]>, tlist![A, B, C]>();
//! ```
//!
//! A predicate must be defined for every element it is applied to:
//!
//! ```rust,compile_fail
//! use hawser::filter::Filtered;
//! use hawser::func::Predicate;
//! use hawser::tlist;
//! use hawser::typenum::{B1, U1, U2};
//!
//! struct OnlyKnowsU1;
//! impl Predicate<U1> for OnlyKnowsU1 { type Output = B1; }
//!
//! // `OnlyKnowsU1` is not total over `U2`.
//! fn check() -> Filtered<OnlyKnowsU1, tlist![U1, U2]> { unimplemented!() }
//! ```

use crate::adapter::{Classify, Identity, IsSame};
use hawser_core::group::{GetGroup, GroupBy, GroupKey, GroupOf, Grouped};
use hawser_core::list::TypeList;
use hawser_core::transform::{Map, Transform};
use hawser_core::typenum::B1;

/// Keeps the elements for which the predicate `P` yields `B1`.
///
/// Duplicates are retained. If nothing matches, the result is `Nil`.
pub trait Filter<P>: TypeList {
    type Output: TypeList;
}

impl<P, L> Filter<P> for L
where
    L: GroupBy<Classify<P>>,
    Grouped<Classify<P>, L>: GetGroup<B1>,
{
    type Output = GroupOf<B1, Grouped<Classify<P>, L>>;
}

/// The elements of `L` passing the predicate `P`.
pub type Filtered<P, L> = <L as Filter<P>>::Output;

/// Keeps every occurrence of the marker `T`.
pub trait FilterOf<T>: TypeList {
    type Output: TypeList;
}

impl<T, L> FilterOf<T> for L
where
    L: Filter<IsSame<T>>,
{
    type Output = Filtered<IsSame<T>, L>;
}

/// All occurrences of `T` in `L`.
pub type FilteredOf<T, L> = <L as FilterOf<T>>::Output;

/// Keeps the first occurrence of each distinct marker.
///
/// Applying `Dedup` to its own output yields the same list.
pub trait Dedup: TypeList {
    type Output: TypeList;
}

impl<L> Dedup for L
where
    L: GroupBy<Identity>,
    Grouped<Identity, L>: Transform<GroupKey>,
{
    type Output = Map<GroupKey, Grouped<Identity, L>>;
}

/// The distinct markers of `L` in order of first occurrence.
pub type Deduped<L> = <L as Dedup>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::func::Predicate;
    use hawser_core::list::Nil;
    use hawser_core::typenum::{B0, Bit, P1, U0, U1, U2, U3, U4, U5, U6, UInt};
    use hawser_core::{assert_type_eq, tlist};

    hawser_core::marker! {
        struct A = U1;
        struct B = U2;
        struct C = U3;
        struct Z = U6;
    }

    struct IsEven;

    impl Predicate<U0> for IsEven {
        type Output = B1;
    }

    impl<U, Lsb> Predicate<UInt<U, Lsb>> for IsEven
    where
        Lsb: Bit + std::ops::Not,
        <Lsb as std::ops::Not>::Output: Bit,
    {
        type Output = <Lsb as std::ops::Not>::Output;
    }

    struct Never;

    impl<T> Predicate<T> for Never {
        type Output = B0;
    }

    struct Always;

    impl<T> Predicate<T> for Always {
        type Output = B1;
    }

    #[test]
    fn test_filter_keeps_matches_in_order() {
        assert_type_eq::<Filtered<IsEven, tlist![U1, U2, U3, U4, U2]>, tlist![U2, U4, U2]>();
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        assert_type_eq::<Filtered<Never, tlist![A, B, C]>, Nil>();
        assert_type_eq::<Filtered<IsEven, tlist![U1, U3, U5]>, Nil>();
    }

    #[test]
    fn test_filter_all_match_is_identity() {
        assert_type_eq::<Filtered<Always, tlist![C, A, C]>, tlist![C, A, C]>();
    }

    #[test]
    fn test_filter_empty_input() {
        assert_type_eq::<Filtered<Always, Nil>, Nil>();
        assert_type_eq::<FilteredOf<A, Nil>, Nil>();
        assert_type_eq::<Deduped<Nil>, Nil>();
    }

    #[test]
    fn test_filter_of_retains_duplicates() {
        assert_type_eq::<FilteredOf<A, tlist![A, B, A, C]>, tlist![A, A]>();
        assert_type_eq::<FilteredOf<C, tlist![A, B, A, C]>, tlist![C]>();
    }

    #[test]
    fn test_filter_of_absent_marker() {
        assert_type_eq::<FilteredOf<Z, tlist![A, B, C]>, Nil>();
    }

    #[test]
    fn test_filter_of_numbers_and_markers_mixed() {
        assert_type_eq::<FilteredOf<U1, tlist![A, U1, P1, U1]>, tlist![U1, U1]>();
        assert_type_eq::<FilteredOf<A, tlist![A, U1, P1, U1]>, tlist![A]>();
    }

    #[test]
    fn test_dedup_first_occurrence_order() {
        assert_type_eq::<Deduped<tlist![A, B, A, C, B]>, tlist![A, B, C]>();
        assert_type_eq::<Deduped<tlist![C, C, A, C]>, tlist![C, A]>();
    }

    #[test]
    fn test_dedup_distinct_input_unchanged() {
        assert_type_eq::<Deduped<tlist![A, B, C]>, tlist![A, B, C]>();
    }

    #[test]
    fn test_dedup_nested_lists() {
        type Ab = tlist![A, B];
        type Ba = tlist![B, A];
        assert_type_eq::<Deduped<tlist![tlist![U1], tlist![U1]]>, tlist![tlist![U1]]>();
        assert_type_eq::<Deduped<tlist![Ab, Ba, Ab, Nil, Nil]>, tlist![Ab, Ba, Nil]>();
        assert_type_eq::<Deduped<tlist![Nil, A, Nil]>, tlist![Nil, A]>();
    }

    #[test]
    fn test_filter_of_nested_lists() {
        type Ab = tlist![A, B];
        assert_type_eq::<FilteredOf<Ab, tlist![Ab, A, tlist![A], Ab]>, tlist![Ab, Ab]>();
        assert_type_eq::<FilteredOf<Nil, tlist![Ab, Nil]>, tlist![Nil]>();
    }

    #[test]
    fn test_primitive_elements() {
        assert_type_eq::<FilteredOf<u8, tlist![u8, bool, u8]>, tlist![u8, u8]>();
        assert_type_eq::<Deduped<tlist![u8, bool, u8, (), bool]>, tlist![u8, bool, ()]>();
    }

    #[test]
    fn test_dedup_idempotent() {
        type Once = Deduped<tlist![B, A, B, Z, A, U2, U2]>;
        assert_type_eq::<Once, tlist![B, A, Z, U2]>();
        assert_type_eq::<Deduped<Once>, Once>();
    }
}
