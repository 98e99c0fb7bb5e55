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

//! # Indexed Pairing
//!
//! Pairs every element of a typelist with its position and strips the
//! elements off again afterwards. Positions are typenum `Unsigned` numbers
//! starting at `U0`; the stripped result is a typenum type-level array
//! (`TArr`), the ordered integer sequence used throughout `hawser`.
//!
//! Zipping and unzipping are inverse on the index-to-element pairing: the
//! `i`-th zipped element carries index `i`, and unzipping a (possibly
//! filtered) zipped list yields exactly the carried indices, in list order.
//!
//! ```rust
//! use hawser_core::zip::{MakeUnzipped, MakeZipped, Zipped};
//! use hawser_core::typenum::{tarr, U0, U1};
//! use hawser_core::{assert_type_eq, tlist};
//!
//! type Z = MakeZipped<tlist![u8, bool]>;
//! assert_type_eq::<Z, tlist![Zipped<u8, U0>, Zipped<bool, U1>]>();
//! assert_type_eq::<MakeUnzipped<Z>, tarr![U0, U1]>();
//! ```

use crate::list::{Cons, Nil, TypeList};
use std::marker::PhantomData;
use std::ops::Add;
use typenum::{ATerm, Add1, B1, TArr, U0, Unsigned};

/// An element `E` paired with its position `I`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zipped<E, I>(PhantomData<(E, I)>);

/// Access to the two halves of a [`Zipped`] pair.
pub trait ZippedElement {
    /// The original element.
    type Element;
    /// Its position in the source list.
    type Index: Unsigned;
}

impl<E, I> ZippedElement for Zipped<E, I>
where
    I: Unsigned,
{
    type Element = E;
    type Index = I;
}

/// Pairs each element with its position, counting from `I`.
#[doc(hidden)]
pub trait ZipFrom<I>: TypeList {
    type Output: TypeList;
}

impl<I> ZipFrom<I> for Nil {
    type Output = Nil;
}

impl<I, H, T> ZipFrom<I> for Cons<H, T>
where
    I: Add<B1>,
    T: ZipFrom<Add1<I>>,
{
    type Output = Cons<Zipped<H, I>, <T as ZipFrom<Add1<I>>>::Output>;
}

/// Pairs each element of a typelist with its position.
pub trait Zip: TypeList {
    type Output: TypeList;
}

impl<L> Zip for L
where
    L: ZipFrom<U0>,
{
    type Output = <L as ZipFrom<U0>>::Output;
}

/// `L` with every element paired with its position.
pub type MakeZipped<L> = <L as Zip>::Output;

/// Recovers the index sequence from a typelist of [`Zipped`] pairs.
pub trait Unzip: TypeList {
    /// The carried indices, as a typenum `TArr`.
    type Output;
}

impl Unzip for Nil {
    type Output = ATerm;
}

impl<E, I, T> Unzip for Cons<Zipped<E, I>, T>
where
    T: Unzip,
{
    type Output = TArr<I, <T as Unzip>::Output>;
}

/// The index sequence carried by the zipped list `Z`.
pub type MakeUnzipped<Z> = <Z as Unzip>::Output;
