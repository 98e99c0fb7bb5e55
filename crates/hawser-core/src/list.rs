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

//! # Typelists
//!
//! An immutable, ordered, finite sequence of types. `Nil` is the empty list and
//! `Cons<H, T>` prepends `H` to the list `T`. Duplicates are allowed and keep
//! their positions. Lists are never modified: every operation names a new list.
//!
//! Build lists with `tlist!` instead of nesting `Cons` by hand:
//!
//! ```rust
//! use hawser_core::{assert_type_eq, tlist, Cons, Nil, TypeList};
//! use hawser_core::typenum::{U1, U2};
//!
//! type L = tlist![U1, U2, U1];
//! assert_type_eq::<L, Cons<U1, Cons<U2, Cons<U1, Nil>>>>();
//! assert_eq!(<L as TypeList>::LEN, 3);
//! assert_eq!(<tlist![] as TypeList>::LEN, 0);
//! ```

use crate::marker::{IsListId, Marker};
use std::marker::PhantomData;
use typenum::Bit;

/// The empty typelist.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

/// A typelist with head `H` followed by the typelist `T`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cons<H, T>(PhantomData<(H, T)>);

/// Recognises `Nil` and `Cons` as typelists.
pub trait TypeList {
    /// Number of elements, duplicates included.
    const LEN: usize;

    /// Appends the type name of every element, in order.
    fn collect_type_names(out: &mut Vec<&'static str>);

    /// Returns the type name of every element, in order.
    ///
    /// Meant for diagnostics; the exact names are those of
    /// [`std::any::type_name`] and are not stable across compiler versions.
    fn type_names() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(Self::LEN);
        Self::collect_type_names(&mut names);
        names
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;

    #[inline(always)]
    fn collect_type_names(_: &mut Vec<&'static str>) {}
}

impl<H, T> TypeList for Cons<H, T>
where
    T: TypeList,
{
    const LEN: usize = T::LEN + 1;

    fn collect_type_names(out: &mut Vec<&'static str>) {
        out.push(std::any::type_name::<H>());
        T::collect_type_names(out);
    }
}

/// Builds a typelist type from a comma separated list of types.
///
/// `tlist![A, B]` expands to `Cons<A, Cons<B, Nil>>` and `tlist![]` to `Nil`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::list::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::list::Cons<$head, $crate::tlist!($($tail),*)>
    };
}

/// Type-level predicate recognising typelists.
///
/// Typelists are markers too, with identities in the `ListId` namespace, so
/// `Output` is `B1` for `Nil` and `Cons` and `B0` for every other [`Marker`].
pub trait IsTypeList {
    type Output: Bit;
}

impl<T> IsTypeList for T
where
    T: Marker,
    T::Id: IsListId,
{
    type Output = <T::Id as IsListId>::Output;
}

/// Appends `E` to the end of a typelist.
pub trait Push<E>: TypeList {
    type Output: TypeList;
}

impl<E> Push<E> for Nil {
    type Output = Cons<E, Nil>;
}

impl<E, H, T> Push<E> for Cons<H, T>
where
    T: Push<E>,
{
    type Output = Cons<H, <T as Push<E>>::Output>;
}

/// The typelist `L` with `E` appended.
pub type Pushed<L, E> = <L as Push<E>>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_type_eq;
    use typenum::{B0, B1, P1, U1, U2, U3};

    crate::marker! {
        struct Gull = U1;
    }

    #[test]
    fn test_macro_builds_nested_cons() {
        assert_type_eq::<crate::tlist![], Nil>();
        assert_type_eq::<crate::tlist![U1], Cons<U1, Nil>>();
        assert_type_eq::<crate::tlist![U1, U2,], Cons<U1, Cons<U2, Nil>>>();
    }

    #[test]
    fn test_len_counts_duplicates() {
        assert_eq!(<crate::tlist![U1, U1, U1] as TypeList>::LEN, 3);
        assert_eq!(<Nil as TypeList>::LEN, 0);
    }

    #[test]
    fn test_type_names_in_order() {
        let names = <crate::tlist![u8, bool, u8] as TypeList>::type_names();
        assert_eq!(names, vec!["u8", "bool", "u8"]);
        assert!(<Nil as TypeList>::type_names().is_empty());
    }

    #[test]
    fn test_is_typelist() {
        assert_type_eq::<<Nil as IsTypeList>::Output, B1>();
        assert_type_eq::<<crate::tlist![U1, Gull] as IsTypeList>::Output, B1>();
        assert_type_eq::<<Gull as IsTypeList>::Output, B0>();
        assert_type_eq::<<P1 as IsTypeList>::Output, B0>();
        assert_type_eq::<<B1 as IsTypeList>::Output, B0>();
        assert_type_eq::<<u8 as IsTypeList>::Output, B0>();
        assert_type_eq::<<crate::tlist![Nil, u8] as IsTypeList>::Output, B1>();
    }

    #[test]
    fn test_push_appends_at_end() {
        assert_type_eq::<Pushed<Nil, U3>, crate::tlist![U3]>();
        assert_type_eq::<Pushed<crate::tlist![U1, U2], U3>, crate::tlist![U1, U2, U3]>();
        assert_type_eq::<Pushed<crate::tlist![U1], U1>, crate::tlist![U1, U1]>();
    }
}
