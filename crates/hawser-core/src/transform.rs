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

//! # Transform
//!
//! Applies a type-level function to every element of a typelist, keeping the
//! order and the length.

use crate::func::{Apply, Func};
use crate::list::{Cons, Nil, TypeList};

/// Maps `F` over the elements of a typelist.
pub trait Transform<F>: TypeList {
    type Output: TypeList;
}

impl<F> Transform<F> for Nil {
    type Output = Nil;
}

impl<F, H, T> Transform<F> for Cons<H, T>
where
    F: Func<H>,
    T: Transform<F>,
{
    type Output = Cons<Apply<F, H>, <T as Transform<F>>::Output>;
}

/// The typelist `L` with `F` applied to every element.
pub type Map<F, L> = <L as Transform<F>>::Output;
