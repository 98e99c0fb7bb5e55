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

//! # Integer Sequence Conversions
//!
//! Bridges typelists of integer-constant markers and typenum's native
//! type-level integer sequence, `TArr` (written `tarr![..]`). Integer-constant
//! markers are typenum numbers. They come in two scalar kinds:
//!
//! - [`UnsignedKind`]: `U0`, `U1`, `U2`, ...
//! - [`SignedKind`]: `Z0`, `P1`, `N1`, ...
//!
//! A sequence or list is convertible only if all its elements share one kind.
//! Mixing kinds, or including anything that is not an integer constant, is a
//! compile error; nothing is coerced. Conversions never reorder or change
//! values, so converting there and back reproduces the input exactly.
//!
//! Requires the `integer-sequence` feature.
//!
//! ```rust
//! use hawser::convert::{IntegerSequenceToTypeList, TypeListToIntegerSequence};
//! use hawser::typenum::{tarr, N2, P5, U0, U3, Z0};
//! use hawser::{assert_type_eq, tlist};
//!
//! assert_type_eq::<IntegerSequenceToTypeList<tarr![U3, U0]>, tlist![U3, U0]>();
//! assert_type_eq::<TypeListToIntegerSequence<tlist![N2, Z0, P5]>, tarr![N2, Z0, P5]>();
//! ```
//!
//! Kinds must not be mixed:
//!
//! ```rust,compile_fail
//! use hawser::convert::TypeListToIntegerSequence;
//! use hawser::typenum::{P1, U1};
//! use hawser::tlist;
//!
//! fn check() -> TypeListToIntegerSequence<tlist![U1, P1]> { unimplemented!() }
//! ```
//!
//! The same holds for sequences:
//!
//! ```rust,compile_fail
//! use hawser::convert::IntegerSequenceToTypeList;
//! use hawser::typenum::{tarr, P1, U1};
//!
//! fn check() -> IntegerSequenceToTypeList<tarr![U1, P1]> { unimplemented!() }
//! ```
//!
//! Non-integer markers are not convertible:
//!
//! ```rust,compile_fail
//! use hawser::convert::TypeListToIntegerSequence;
//! use hawser::typenum::{B1, U1};
//! use hawser::tlist;
//!
//! fn check() -> TypeListToIntegerSequence<tlist![U1, B1]> { unimplemented!() }
//! ```

use hawser_core::list::{Cons, Nil, TypeList};
use hawser_core::marker::Marker;
use hawser_core::typenum::{
    ATerm, Bit, Integer, NInt, NonZero, PInt, TArr, UInt, UTerm, Unsigned, Z0,
};

/// Scalar kind of typenum unsigned numbers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedKind;

/// Scalar kind of typenum signed integers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedKind;

/// A marker standing for an integer constant.
pub trait IntegerConstant: Marker {
    /// The scalar kind, [`UnsignedKind`] or [`SignedKind`].
    type Kind;
    /// The represented value.
    const VALUE: i128;
}

impl IntegerConstant for UTerm {
    type Kind = UnsignedKind;
    const VALUE: i128 = 0;
}

impl<U, B> IntegerConstant for UInt<U, B>
where
    U: Unsigned,
    B: Bit,
{
    type Kind = UnsignedKind;
    const VALUE: i128 = <UInt<U, B> as Unsigned>::U64 as i128;
}

impl IntegerConstant for Z0 {
    type Kind = SignedKind;
    const VALUE: i128 = 0;
}

impl<U> IntegerConstant for PInt<U>
where
    U: Unsigned + NonZero,
{
    type Kind = SignedKind;
    const VALUE: i128 = <PInt<U> as Integer>::I64 as i128;
}

impl<U> IntegerConstant for NInt<U>
where
    U: Unsigned + NonZero,
{
    type Kind = SignedKind;
    const VALUE: i128 = <NInt<U> as Integer>::I64 as i128;
}

/// Converts a sequence whose elements are all of kind `K`.
#[doc(hidden)]
pub trait SequenceOfKind<K> {
    type List: TypeList;
}

impl<K> SequenceOfKind<K> for ATerm {
    type List = Nil;
}

impl<K, V, A> SequenceOfKind<K> for TArr<V, A>
where
    V: IntegerConstant<Kind = K>,
    A: SequenceOfKind<K>,
{
    type List = Cons<V, <A as SequenceOfKind<K>>::List>;
}

/// Converts a typenum integer sequence into a typelist of its elements.
pub trait SequenceToTypeList {
    type Output: TypeList;
}

impl SequenceToTypeList for ATerm {
    type Output = Nil;
}

impl<V, A> SequenceToTypeList for TArr<V, A>
where
    V: IntegerConstant,
    TArr<V, A>: SequenceOfKind<V::Kind>,
{
    type Output = <TArr<V, A> as SequenceOfKind<V::Kind>>::List;
}

/// The typelist holding the elements of the sequence `S`.
pub type IntegerSequenceToTypeList<S> = <S as SequenceToTypeList>::Output;

/// Converts a typelist whose elements are all of kind `K`.
#[doc(hidden)]
pub trait TypeListOfKind<K>: TypeList {
    type Sequence;
}

impl<K> TypeListOfKind<K> for Nil {
    type Sequence = ATerm;
}

impl<K, H, T> TypeListOfKind<K> for Cons<H, T>
where
    H: IntegerConstant<Kind = K>,
    T: TypeListOfKind<K>,
{
    type Sequence = TArr<H, <T as TypeListOfKind<K>>::Sequence>;
}

/// Converts a typelist of same-kind integer constants into a typenum sequence.
pub trait TypeListToSequence: TypeList {
    type Output;
}

impl TypeListToSequence for Nil {
    type Output = ATerm;
}

impl<H, T> TypeListToSequence for Cons<H, T>
where
    H: IntegerConstant,
    T: TypeList,
    Cons<H, T>: TypeListOfKind<H::Kind>,
{
    type Output = <Cons<H, T> as TypeListOfKind<H::Kind>>::Sequence;
}

/// The typenum sequence holding the elements of the typelist `L`.
pub type TypeListToIntegerSequence<L> = <L as TypeListToSequence>::Output;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reify::Reify;
    use hawser_core::typenum::{N1, N7, P2, P9, U0, U1, U2, U4, U255, tarr};
    use hawser_core::{assert_type_eq, tlist};

    #[test]
    fn test_values_and_kinds() {
        assert_eq!(<U0 as IntegerConstant>::VALUE, 0);
        assert_eq!(<U255 as IntegerConstant>::VALUE, 255);
        assert_eq!(<N7 as IntegerConstant>::VALUE, -7);
        assert_eq!(<Z0 as IntegerConstant>::VALUE, 0);
        assert_type_eq::<<U4 as IntegerConstant>::Kind, UnsignedKind>();
        assert_type_eq::<<P2 as IntegerConstant>::Kind, SignedKind>();
        assert_type_eq::<<Z0 as IntegerConstant>::Kind, SignedKind>();
    }

    #[test]
    fn test_empty_conversions() {
        assert_type_eq::<IntegerSequenceToTypeList<ATerm>, Nil>();
        assert_type_eq::<TypeListToIntegerSequence<Nil>, ATerm>();
    }

    #[test]
    fn test_sequence_to_typelist_keeps_order() {
        assert_type_eq::<IntegerSequenceToTypeList<tarr![U2, U0, U2]>, tlist![U2, U0, U2]>();
        assert_type_eq::<IntegerSequenceToTypeList<tarr![P9, N1]>, tlist![P9, N1]>();
    }

    #[test]
    fn test_typelist_to_sequence_keeps_order() {
        type S = TypeListToIntegerSequence<tlist![U4, U1, U255]>;
        assert_type_eq::<S, tarr![U4, U1, U255]>();
        assert_eq!(<S as Reify>::to_vec::<u16>(), Ok(vec![4, 1, 255]));
    }

    #[test]
    fn test_round_trip_from_sequence() {
        type S = tarr![N7, Z0, P2, P2];
        assert_type_eq::<TypeListToIntegerSequence<IntegerSequenceToTypeList<S>>, S>();
    }

    #[test]
    fn test_round_trip_from_typelist() {
        type L = tlist![U1, U0, U4];
        assert_type_eq::<IntegerSequenceToTypeList<TypeListToIntegerSequence<L>>, L>();
    }
}
