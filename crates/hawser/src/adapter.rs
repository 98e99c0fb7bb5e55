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

//! # Predicate Adapters
//!
//! Small type-level functions that glue predicates, keys, and zipped
//! elements together for the filtering and indexing engines.

use hawser_core::func::{Func, Predicate};
use hawser_core::marker::{Same, SameAs};
use std::marker::PhantomData;

#[cfg(feature = "integer-sequence")]
use hawser_core::zip::Zipped;

/// The identity key function: every element is its own key.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identity;

impl<Arg> Func<Arg> for Identity {
    type Output = Arg;
}

/// Turns the predicate `P` into a key function whose keys are `B1` and `B0`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Classify<P>(PhantomData<P>);

impl<P, Arg> Func<Arg> for Classify<P>
where
    P: Predicate<Arg>,
{
    type Output = <P as Predicate<Arg>>::Output;
}

/// Predicate holding for exactly the marker `T`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsSame<T>(PhantomData<T>);

impl<T, Arg> Predicate<Arg> for IsSame<T>
where
    Arg: SameAs<T>,
{
    type Output = Same<Arg, T>;
}

/// Lifts the predicate `P` onto [`Zipped`] pairs. The index is ignored.
#[cfg(feature = "integer-sequence")]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OnElement<P>(PhantomData<P>);

#[cfg(feature = "integer-sequence")]
impl<P, E, I> Predicate<Zipped<E, I>> for OnElement<P>
where
    P: Predicate<E>,
{
    type Output = <P as Predicate<E>>::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hawser_core::assert_type_eq;
    use hawser_core::func::{Apply, Test};
    use hawser_core::typenum::{B0, B1, U1, U2};

    hawser_core::marker! {
        struct Kite = U1;
        struct Tern = U2;
    }

    #[test]
    fn test_identity_returns_argument() {
        assert_type_eq::<Apply<Identity, Kite>, Kite>();
        assert_type_eq::<Apply<Identity, u64>, u64>();
    }

    #[test]
    fn test_is_same() {
        assert_type_eq::<Test<IsSame<Kite>, Kite>, B1>();
        assert_type_eq::<Test<IsSame<Kite>, Tern>, B0>();
        assert_type_eq::<Test<IsSame<U1>, Kite>, B0>();
    }

    #[test]
    fn test_classify_yields_bit_keys() {
        assert_type_eq::<Apply<Classify<IsSame<Tern>>, Tern>, B1>();
        assert_type_eq::<Apply<Classify<IsSame<Tern>>, Kite>, B0>();
    }

    #[cfg(feature = "integer-sequence")]
    #[test]
    fn test_on_element_ignores_index() {
        use hawser_core::typenum::{U0, U7};
        assert_type_eq::<Test<OnElement<IsSame<Kite>>, Zipped<Kite, U0>>, B1>();
        assert_type_eq::<Test<OnElement<IsSame<Kite>>, Zipped<Kite, U7>>, B1>();
        assert_type_eq::<Test<OnElement<IsSame<Kite>>, Zipped<Tern, U0>>, B0>();
    }
}
