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

//! # Marker Identity
//!
//! A *marker* is a type that stands in for "a type" inside a typelist. Markers
//! are opaque: the algorithms never look inside them, they only ask whether
//! two markers are the same one. Stable Rust has no type-level type equality,
//! so every marker carries an identity in its associated `Id` type, and
//! identities are compared with typenum's `IsEqual`.
//!
//! ## Identity namespaces
//!
//! - `Tag<N>`: user markers declared through [`marker!`](crate::marker!), keyed
//!   by a typenum `Unsigned`.
//! - `UnsignedId<N>` / `SignedId<N>`: typenum numbers (`U3`, `P2`, `N1`, `Z0`),
//!   which are markers out of the box.
//! - `BitId<B>`: the type-level booleans `B0` and `B1`.
//! - `PrimId<N>`: the primitive types (`u8`, `bool`, `f64`, `()`, ...).
//! - `ListId<Ids>`: typelists. A list's identity is the list of its element
//!   identities, so two lists are the same marker iff they have the same
//!   length and the same markers position by position.
//!
//! Identities from different namespaces are never equal, so a user marker
//! keyed `U1` is distinct from the number `U1`, and `Nil` is distinct from
//! `U0`.
//!
//! ## Usage
//!
//! ```rust
//! use hawser_core::marker;
//! use hawser_core::marker::Same;
//! use hawser_core::typenum::{B0, B1, U1, U2};
//! use hawser_core::{assert_type_eq, tlist};
//!
//! marker! {
//!     pub struct Apple = U1;
//!     pub struct Pear = U2;
//! }
//!
//! assert_type_eq::<Same<Apple, Apple>, B1>();
//! assert_type_eq::<Same<Apple, Pear>, B0>();
//! assert_type_eq::<Same<Apple, U1>, B0>();
//! assert_type_eq::<Same<tlist![Apple, u8], tlist![Apple, u8]>, B1>();
//! assert_type_eq::<Same<tlist![Apple], tlist![Pear]>, B0>();
//! ```

use crate::list::{Cons, Nil};
use std::marker::PhantomData;
use std::ops::BitAnd;
use typenum::{
    And, B0, B1, Bit, Integer, IsEqual, NInt, NonZero, PInt, U0, U1, U2, U3, U4, U5, U6, U7, U8,
    U9, U10, U11, U12, U13, U14, U15, U16, UInt, UTerm, Unsigned, Z0,
};

/// A compile-time stand-in for a type, compared only by identity.
///
/// Two markers are the same iff their `Id` types are equal. Prefer declaring
/// markers with [`marker!`](crate::marker!), which picks the `Tag` namespace.
pub trait Marker {
    /// The identity of this marker.
    type Id;
}

/// Identity of a user-declared marker.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag<N>(PhantomData<N>);

/// Identity of a typenum unsigned number.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnsignedId<N>(PhantomData<N>);

/// Identity of a typenum signed integer.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SignedId<N>(PhantomData<N>);

/// Identity of a type-level boolean.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitId<B>(PhantomData<B>);

/// Identity of a primitive type, keyed by a typenum `Unsigned`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimId<N>(PhantomData<N>);

/// Identity of a typelist: the typelist of its element identities.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId<Ids>(PhantomData<Ids>);

/// Type-level equality of two identities. `Output` is `B1` or `B0`.
pub trait IdEq<Rhs> {
    type Output: Bit;
}

impl<A, B> IdEq<Tag<B>> for Tag<A>
where
    A: Unsigned + IsEqual<B>,
    B: Unsigned,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A, B> IdEq<UnsignedId<B>> for UnsignedId<A>
where
    A: Unsigned + IsEqual<B>,
    B: Unsigned,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A, B> IdEq<SignedId<B>> for SignedId<A>
where
    A: Integer + IsEqual<B>,
    B: Integer,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A, B> IdEq<PrimId<B>> for PrimId<A>
where
    A: Unsigned + IsEqual<B>,
    B: Unsigned,
    <A as IsEqual<B>>::Output: Bit,
{
    type Output = <A as IsEqual<B>>::Output;
}

impl<A, B> IdEq<ListId<B>> for ListId<A>
where
    A: IdsEq<B>,
{
    type Output = <A as IdsEq<B>>::Output;
}

/// Element-wise equality of two typelists of identities.
#[doc(hidden)]
pub trait IdsEq<Rhs> {
    type Output: Bit;
}

impl IdsEq<Nil> for Nil {
    type Output = B1;
}

impl<H, T> IdsEq<Cons<H, T>> for Nil {
    type Output = B0;
}

impl<H, T> IdsEq<Nil> for Cons<H, T> {
    type Output = B0;
}

impl<HA, TA, HB, TB> IdsEq<Cons<HB, TB>> for Cons<HA, TA>
where
    HA: IdEq<HB>,
    TA: IdsEq<TB>,
    <HA as IdEq<HB>>::Output: BitAnd<<TA as IdsEq<TB>>::Output>,
    And<<HA as IdEq<HB>>::Output, <TA as IdsEq<TB>>::Output>: Bit,
{
    type Output = And<<HA as IdEq<HB>>::Output, <TA as IdsEq<TB>>::Output>;
}

macro_rules! impl_bit_id_eq {
    ($lhs:ty, $rhs:ty, $out:ty) => {
        impl IdEq<BitId<$rhs>> for BitId<$lhs> {
            type Output = $out;
        }
    };
}

impl_bit_id_eq!(B0, B0, B1);
impl_bit_id_eq!(B0, B1, B0);
impl_bit_id_eq!(B1, B0, B0);
impl_bit_id_eq!(B1, B1, B1);

macro_rules! impl_distinct_namespaces {
    ($lhs:ident => $($rhs:ident),+) => {
        $(
            impl<A, B> IdEq<$rhs<B>> for $lhs<A> {
                type Output = B0;
            }
        )+
    };
}

impl_distinct_namespaces!(Tag => UnsignedId, SignedId, BitId, PrimId, ListId);
impl_distinct_namespaces!(UnsignedId => Tag, SignedId, BitId, PrimId, ListId);
impl_distinct_namespaces!(SignedId => Tag, UnsignedId, BitId, PrimId, ListId);
impl_distinct_namespaces!(BitId => Tag, UnsignedId, SignedId, PrimId, ListId);
impl_distinct_namespaces!(PrimId => Tag, UnsignedId, SignedId, BitId, ListId);
impl_distinct_namespaces!(ListId => Tag, UnsignedId, SignedId, BitId, PrimId);

/// `B1` if the identity belongs to the `ListId` namespace.
#[doc(hidden)]
pub trait IsListId {
    type Output: Bit;
}

impl<Ids> IsListId for ListId<Ids> {
    type Output = B1;
}

macro_rules! impl_not_list_id {
    ($($ns:ident),+) => {
        $(
            impl<A> IsListId for $ns<A> {
                type Output = B0;
            }
        )+
    };
}

impl_not_list_id!(Tag, UnsignedId, SignedId, BitId, PrimId);

/// Identity comparison of two markers.
///
/// Implemented for every pair of markers whose identities are comparable.
/// `Output` is `B1` when both are the same marker.
pub trait SameAs<Rhs> {
    type Output: Bit;
}

impl<L, R> SameAs<R> for L
where
    L: Marker,
    R: Marker,
    L::Id: IdEq<R::Id>,
{
    type Output = <L::Id as IdEq<R::Id>>::Output;
}

/// `B1` if `L` and `R` are the same marker, `B0` otherwise.
pub type Same<L, R> = <L as SameAs<R>>::Output;

impl Marker for UTerm {
    type Id = UnsignedId<UTerm>;
}

impl<U, B> Marker for UInt<U, B>
where
    U: Unsigned,
    B: Bit,
{
    type Id = UnsignedId<UInt<U, B>>;
}

impl Marker for Z0 {
    type Id = SignedId<Z0>;
}

impl<U> Marker for PInt<U>
where
    U: Unsigned + NonZero,
{
    type Id = SignedId<PInt<U>>;
}

impl<U> Marker for NInt<U>
where
    U: Unsigned + NonZero,
{
    type Id = SignedId<NInt<U>>;
}

impl Marker for B0 {
    type Id = BitId<B0>;
}

impl Marker for B1 {
    type Id = BitId<B1>;
}

macro_rules! impl_primitive_markers {
    ($($prim:ty => $id:ty),+ $(,)?) => {
        $(
            impl Marker for $prim {
                type Id = PrimId<$id>;
            }
        )+
    };
}

impl_primitive_markers! {
    () => U0,
    bool => U1,
    char => U2,
    u8 => U3,
    u16 => U4,
    u32 => U5,
    u64 => U6,
    u128 => U7,
    usize => U8,
    i8 => U9,
    i16 => U10,
    i32 => U11,
    i64 => U12,
    i128 => U13,
    isize => U14,
    f32 => U15,
    f64 => U16,
}

/// Identities of the elements of a typelist, in order.
#[doc(hidden)]
pub trait ElementIds {
    type Output;
}

impl ElementIds for Nil {
    type Output = Nil;
}

impl<H, T> ElementIds for Cons<H, T>
where
    H: Marker,
    T: ElementIds,
{
    type Output = Cons<H::Id, <T as ElementIds>::Output>;
}

impl Marker for Nil {
    type Id = ListId<Nil>;
}

impl<H, T> Marker for Cons<H, T>
where
    H: Marker,
    T: ElementIds,
{
    type Id = ListId<<Cons<H, T> as ElementIds>::Output>;
}

/// Declares zero-sized marker types with explicit identities.
///
/// Each identity is a typenum `Unsigned`. Markers sharing an identity compare
/// as the same marker, so keep identities unique within a program.
///
/// # Examples
///
/// ```rust
/// use hawser_core::marker;
/// use hawser_core::typenum::{U10, U11};
///
/// marker! {
///     /// A vessel.
///     pub struct Vessel = U10;
///     struct Berth = U11;
/// }
///
/// let _ = (Vessel, Berth);
/// ```
///
/// # Pitfalls
///
/// Identities are not checked for uniqueness. Two distinct types declared
/// with the same key are indistinguishable to every algorithm: they compare
/// as the same marker, deduplication keeps only the first of them, and
/// searching for one finds the other.
///
/// ```rust
/// use hawser_core::marker;
/// use hawser_core::marker::Same;
/// use hawser_core::typenum::{B1, U7};
/// use hawser_core::assert_type_eq;
///
/// marker! {
///     pub struct Left = U7;
///     pub struct Right = U7;
/// }
///
/// // Left and Right are different Rust types, yet the same marker.
/// assert_type_eq::<Same<Left, Right>, B1>();
/// ```
#[macro_export]
macro_rules! marker {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident = $id:ty;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            $vis struct $name;

            impl $crate::marker::Marker for $name {
                type Id = $crate::marker::Tag<$id>;
            }
        )+
    };
}
