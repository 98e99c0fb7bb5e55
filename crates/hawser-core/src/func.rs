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

//! # Type-Level Functions
//!
//! Functions are passed around as types. A function is a (usually zero-sized)
//! type implementing [`Func`] for every argument type it accepts; calling it
//! means naming the associated `Output`. A [`Predicate`] is a function whose
//! result is a typenum `Bit`.
//!
//! A function that does not implement the trait for some argument is not
//! total over that argument, and any algorithm that would call it there fails
//! to compile.
//!
//! ```rust
//! use hawser_core::func::{Apply, Func, Predicate, Test};
//! use hawser_core::typenum::{B0, B1, U0, U1};
//! use hawser_core::assert_type_eq;
//!
//! struct IsZero;
//! impl Predicate<U0> for IsZero { type Output = B1; }
//! impl Predicate<U1> for IsZero { type Output = B0; }
//!
//! struct Boxed;
//! impl<T> Func<T> for Boxed { type Output = Box<T>; }
//!
//! assert_type_eq::<Test<IsZero, U0>, B1>();
//! assert_type_eq::<Apply<Boxed, u8>, Box<u8>>();
//! ```

use typenum::Bit;

/// A type-level function from `Arg` to `Output`.
pub trait Func<Arg> {
    type Output;
}

/// The result of applying `F` to `Arg`.
pub type Apply<F, Arg> = <F as Func<Arg>>::Output;

/// A type-level function from `Arg` to `B1` (keep) or `B0` (drop).
pub trait Predicate<Arg> {
    type Output: Bit;
}

/// The result of testing `Arg` against `P`.
pub type Test<P, Arg> = <P as Predicate<Arg>>::Output;
