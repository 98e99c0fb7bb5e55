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

//! # Typelist Normalisation
//!
//! `AsTypeListOf<T>` is `T` itself when `T` is a typelist, and the one-element
//! list `tlist![T]` when `T` is a marker. Useful for APIs that accept either
//! a single marker or a list of them.
//!
//! ```rust
//! use hawser::normalize::AsTypeListOf;
//! use hawser::typenum::{U1, U2};
//! use hawser::{assert_type_eq, tlist};
//!
//! assert_type_eq::<AsTypeListOf<U1>, tlist![U1]>();
//! assert_type_eq::<AsTypeListOf<tlist![U1, U2]>, tlist![U1, U2]>();
//! ```

use hawser_core::list::{Cons, IsTypeList, Nil, TypeList};
use hawser_core::typenum::{B0, B1};

/// Chooses between keeping `T` and wrapping it, driven by `IsTypeList`.
#[doc(hidden)]
pub trait Wrap<T> {
    type Output: TypeList;
}

impl<T> Wrap<T> for B1
where
    T: TypeList,
{
    type Output = T;
}

impl<T> Wrap<T> for B0 {
    type Output = Cons<T, Nil>;
}

/// Normalises a marker or a typelist to a typelist.
pub trait AsTypeList {
    type Output: TypeList;
}

impl<T> AsTypeList for T
where
    T: IsTypeList,
    <T as IsTypeList>::Output: Wrap<T>,
{
    type Output = <<T as IsTypeList>::Output as Wrap<T>>::Output;
}

/// `T` if it is a typelist, otherwise `tlist![T]`.
pub type AsTypeListOf<T> = <T as AsTypeList>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::typenum::{N3, U1, U2};
    use hawser_core::{assert_type_eq, tlist};

    hawser_core::marker! {
        struct Buoy = U1;
    }

    #[test]
    fn test_marker_is_wrapped() {
        assert_type_eq::<AsTypeListOf<Buoy>, tlist![Buoy]>();
        assert_type_eq::<AsTypeListOf<N3>, tlist![N3]>();
        assert_type_eq::<AsTypeListOf<B1>, tlist![B1]>();
    }

    #[test]
    fn test_typelist_is_unchanged() {
        assert_type_eq::<AsTypeListOf<Nil>, Nil>();
        assert_type_eq::<AsTypeListOf<tlist![Buoy, U2]>, tlist![Buoy, U2]>();
    }

    #[test]
    fn test_list_of_one_list_stays_nested() {
        type Inner = tlist![U1];
        assert_type_eq::<AsTypeListOf<tlist![Inner]>, tlist![Inner]>();
    }

    #[test]
    fn test_idempotent() {
        assert_type_eq::<AsTypeListOf<AsTypeListOf<Buoy>>, tlist![Buoy]>();
    }
}
