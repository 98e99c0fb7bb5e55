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

//! # Grouping
//!
//! Partitions a typelist into groups of elements that share a key, where the
//! key of an element is the result of a type-level key function.
//!
//! ## Guarantees
//!
//! - Groups appear in the order in which their keys are first seen.
//! - Within a group, elements keep their relative order from the source.
//! - Keys are compared by marker identity ([`SameAs`]), so keys must be
//!   markers (user markers, typenum numbers, bits, primitives, or typelists
//!   of markers).
//!
//! The result is a typelist of [`Group`]s. [`GetGroup`] picks the elements
//! of one key, yielding `Nil` if the key never occurred, and [`GroupKey`]
//! maps a group to its key.
//!
//! ```rust
//! use hawser_core::group::{GroupOf, Grouped, Group};
//! use hawser_core::func::Func;
//! use hawser_core::typenum::{U1, U2, U3};
//! use hawser_core::{assert_type_eq, tlist};
//!
//! struct Itself;
//! impl<T> Func<T> for Itself { type Output = T; }
//!
//! type Groups = Grouped<Itself, tlist![U2, U1, U2, U3]>;
//! assert_type_eq::<
//!     Groups,
//!     tlist![Group<U2, tlist![U2, U2]>, Group<U1, tlist![U1]>, Group<U3, tlist![U3]>],
//! >();
//! assert_type_eq::<GroupOf<U2, Groups>, tlist![U2, U2]>();
//! ```

use crate::func::{Apply, Func};
use crate::list::{Cons, Nil, Push, TypeList};
use crate::marker::{Same, SameAs};
use std::marker::PhantomData;
use typenum::{B0, B1};

/// A key together with the elements classified under it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group<K, L>(PhantomData<(K, L)>);

/// Maps a `Group` to its key.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey;

impl<K, L> Func<Group<K, L>> for GroupKey {
    type Output = K;
}

/// Adds element `E` under key `K` to a list of groups.
///
/// Appends to the existing group of `K` if there is one, otherwise opens a
/// new group at the end.
#[doc(hidden)]
pub trait Insert<K, E>: TypeList {
    type Output: TypeList;
}

/// Dispatch for [`Insert`] on whether the head group's key matched.
#[doc(hidden)]
pub trait InsertAt<Found, K, E>: TypeList {
    type Output: TypeList;
}

impl<K, E> Insert<K, E> for Nil {
    type Output = Cons<Group<K, Cons<E, Nil>>, Nil>;
}

impl<K, E, GK, GL, Rest> Insert<K, E> for Cons<Group<GK, GL>, Rest>
where
    K: SameAs<GK>,
    Rest: TypeList,
    Cons<Group<GK, GL>, Rest>: InsertAt<Same<K, GK>, K, E>,
{
    type Output = <Cons<Group<GK, GL>, Rest> as InsertAt<Same<K, GK>, K, E>>::Output;
}

impl<K, E, GK, GL, Rest> InsertAt<B1, K, E> for Cons<Group<GK, GL>, Rest>
where
    GL: Push<E>,
    Rest: TypeList,
{
    type Output = Cons<Group<GK, <GL as Push<E>>::Output>, Rest>;
}

impl<K, E, GK, GL, Rest> InsertAt<B0, K, E> for Cons<Group<GK, GL>, Rest>
where
    Rest: Insert<K, E>,
{
    type Output = Cons<Group<GK, GL>, <Rest as Insert<K, E>>::Output>;
}

/// Left fold of a typelist into the accumulated groups `Acc`.
#[doc(hidden)]
pub trait GroupInto<F, Acc>: TypeList {
    type Output: TypeList;
}

impl<F, Acc> GroupInto<F, Acc> for Nil
where
    Acc: TypeList,
{
    type Output = Acc;
}

impl<F, Acc, H, T> GroupInto<F, Acc> for Cons<H, T>
where
    F: Func<H>,
    Acc: Insert<Apply<F, H>, H>,
    T: GroupInto<F, <Acc as Insert<Apply<F, H>, H>>::Output>,
{
    type Output = <T as GroupInto<F, <Acc as Insert<Apply<F, H>, H>>::Output>>::Output;
}

/// Partitions a typelist by the key function `F`.
pub trait GroupBy<F>: TypeList {
    /// The groups, as a typelist of [`Group`]s.
    type Output: TypeList;
}

impl<F, L> GroupBy<F> for L
where
    L: GroupInto<F, Nil>,
{
    type Output = <L as GroupInto<F, Nil>>::Output;
}

/// The groups of `L` under the key function `F`.
pub type Grouped<F, L> = <L as GroupBy<F>>::Output;

/// Looks up the elements grouped under key `K`.
pub trait GetGroup<K>: TypeList {
    /// The elements of the group, or `Nil` if `K` has no group.
    type Output: TypeList;
}

/// Dispatch for [`GetGroup`] on whether the head group's key matched.
#[doc(hidden)]
pub trait PickGroup<Found, K>: TypeList {
    type Output: TypeList;
}

impl<K> GetGroup<K> for Nil {
    type Output = Nil;
}

impl<K, GK, GL, Rest> GetGroup<K> for Cons<Group<GK, GL>, Rest>
where
    K: SameAs<GK>,
    Rest: TypeList,
    Cons<Group<GK, GL>, Rest>: PickGroup<Same<K, GK>, K>,
{
    type Output = <Cons<Group<GK, GL>, Rest> as PickGroup<Same<K, GK>, K>>::Output;
}

impl<K, GK, GL, Rest> PickGroup<B1, K> for Cons<Group<GK, GL>, Rest>
where
    GL: TypeList,
    Rest: TypeList,
{
    type Output = GL;
}

impl<K, GK, GL, Rest> PickGroup<B0, K> for Cons<Group<GK, GL>, Rest>
where
    Rest: GetGroup<K>,
{
    type Output = <Rest as GetGroup<K>>::Output;
}

/// The elements of the group keyed `K` within the groups `G`.
pub type GroupOf<K, G> = <G as GetGroup<K>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::func::Predicate;
    use crate::transform::Map;
    use crate::{assert_type_eq, tlist};
    use typenum::{Bit, U0, U1, U2, U3, U4, U5};

    crate::marker! {
        struct Red = U1;
        struct Green = U2;
        struct Blue = U3;
    }

    struct Itself;

    impl<T> Func<T> for Itself {
        type Output = T;
    }

    // Keys typenum numbers by their lowest bit.
    struct Odd;

    impl Predicate<U0> for Odd {
        type Output = B0;
    }

    impl<U, B: Bit> Predicate<typenum::UInt<U, B>> for Odd {
        type Output = B;
    }

    struct ByOdd;

    impl<N> Func<N> for ByOdd
    where
        Odd: Predicate<N>,
    {
        type Output = <Odd as Predicate<N>>::Output;
    }

    #[test]
    fn test_empty_list_has_no_groups() {
        assert_type_eq::<Grouped<Itself, Nil>, Nil>();
        assert_type_eq::<GroupOf<Red, Grouped<Itself, Nil>>, Nil>();
    }

    #[test]
    fn test_first_seen_key_order() {
        type Groups = Grouped<Itself, tlist![Blue, Red, Blue, Green, Red]>;
        assert_type_eq::<Map<GroupKey, Groups>, tlist![Blue, Red, Green]>();
    }

    #[test]
    fn test_intra_group_order() {
        type Groups = Grouped<ByOdd, tlist![U4, U1, U2, U5, U3, U0]>;
        assert_type_eq::<Map<GroupKey, Groups>, tlist![B0, B1]>();
        assert_type_eq::<GroupOf<B0, Groups>, tlist![U4, U2, U0]>();
        assert_type_eq::<GroupOf<B1, Groups>, tlist![U1, U5, U3]>();
    }

    #[test]
    fn test_missing_key_yields_empty_list() {
        type Groups = Grouped<ByOdd, tlist![U2, U4]>;
        assert_type_eq::<GroupOf<B1, Groups>, Nil>();
        assert_type_eq::<GroupOf<Green, Grouped<Itself, tlist![Red]>>, Nil>();
    }

    #[test]
    fn test_single_group_keeps_duplicates() {
        type Groups = Grouped<Itself, tlist![Red, Red, Red]>;
        assert_type_eq::<Groups, tlist![Group<Red, tlist![Red, Red, Red]>]>();
    }
}
