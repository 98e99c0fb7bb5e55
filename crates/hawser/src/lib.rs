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

//! # Hawser
//!
//! Compile-time filtering, indexing, and conversion over typelists. Every
//! operation is a trait with an associated `Output` and a type alias to read
//! it; the compiler computes the result while type checking, and nothing runs
//! at runtime.
//!
//! ## Modules
//!
//! - `filter`: Selection by predicate (`Filtered`), by marker identity
//!   (`FilteredOf`), and first-occurrence deduplication (`Deduped`).
//! - `index`: Positions of matching elements as a typenum index sequence
//!   (`IndicesWhereOf`, `IndicesOfIn`).
//! - `convert`: Typelists of integer constants to and from typenum's `TArr`.
//! - `reify`: Reads a type-level integer sequence back as a `Vec`.
//! - `normalize`: Marker-or-typelist normalisation (`AsTypeListOf`).
//! - `adapter`: Predicate and key adapters (`Identity`, `Classify`, `IsSame`,
//!   `OnElement`).
//!
//! ## Features
//!
//! - `integer-sequence` (default): Enables `index`, `convert` and `reify`,
//!   which depend on type-level integer sequences. Check
//!   [`HAS_INTEGER_SEQUENCE`] before relying on them; without the feature
//!   these modules do not exist and code using them does not compile.
//!
//! ## Usage
//!
//! ```rust
//! use hawser::filter::{Deduped, Filtered};
//! use hawser::func::Predicate;
//! use hawser::index::IndicesWhereOf;
//! use hawser::reify::Reify;
//! use hawser::typenum::{B0, B1, U1, U2, U3};
//! use hawser::{assert_type_eq, marker, tlist};
//!
//! marker! {
//!     pub struct Cargo = U1;
//!     pub struct Tanker = U2;
//!     pub struct Ferry = U3;
//! }
//!
//! struct CarriesGoods;
//! impl Predicate<Cargo> for CarriesGoods { type Output = B1; }
//! impl Predicate<Tanker> for CarriesGoods { type Output = B1; }
//! impl Predicate<Ferry> for CarriesGoods { type Output = B0; }
//!
//! type Fleet = tlist![Ferry, Cargo, Tanker, Cargo];
//!
//! assert_type_eq::<Filtered<CarriesGoods, Fleet>, tlist![Cargo, Tanker, Cargo]>();
//! assert_type_eq::<Deduped<Fleet>, tlist![Ferry, Cargo, Tanker]>();
//!
//! type Positions = IndicesWhereOf<CarriesGoods, Fleet>;
//! assert_eq!(<Positions as Reify>::to_vec::<usize>(), Ok(vec![1, 2, 3]));
//! ```

pub mod adapter;
pub mod filter;
pub mod normalize;

#[cfg(feature = "integer-sequence")]
pub mod convert;
#[cfg(feature = "integer-sequence")]
pub mod index;
#[cfg(feature = "integer-sequence")]
pub mod reify;

pub use hawser_core::{Cons, Marker, Nil, TypeList, assert_type_eq, tlist, typenum};
pub use hawser_core::{func, group, list, marker, transform};

#[cfg(feature = "integer-sequence")]
pub use hawser_core::zip;

/// Whether the components built on type-level integer sequences (`index`,
/// `convert`, `reify`) are compiled in.
pub const HAS_INTEGER_SEQUENCE: bool = cfg!(feature = "integer-sequence");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Deduped;
    use crate::typenum::{U1, U2};

    #[cfg(feature = "integer-sequence")]
    #[test]
    fn test_integer_sequence_enabled() {
        use crate::index::IndicesOfIn;
        use crate::reify::Reify;

        assert!(HAS_INTEGER_SEQUENCE);
        type I = IndicesOfIn<U2, tlist![U2, U1, U2]>;
        assert_eq!(<I as Reify>::to_vec::<usize>(), Ok(vec![0, 2]));
    }

    #[cfg(not(feature = "integer-sequence"))]
    #[test]
    fn test_core_without_integer_sequence() {
        use crate::adapter::IsSame;
        use crate::filter::Filtered;
        use crate::normalize::AsTypeListOf;

        assert!(!HAS_INTEGER_SEQUENCE);
        assert_type_eq::<Filtered<IsSame<U2>, tlist![U2, U1, U2]>, tlist![U2, U2]>();
        assert_type_eq::<Deduped<tlist![U2, U1, U2]>, tlist![U2, U1]>();
        assert_type_eq::<AsTypeListOf<U1>, tlist![U1]>();
        assert_type_eq::<AsTypeListOf<tlist![U1, U2]>, tlist![U1, U2]>();
    }

    #[test]
    fn test_filtering_is_always_available() {
        assert_type_eq::<Deduped<tlist![tlist![U1], tlist![U1], Nil]>, tlist![tlist![U1], Nil]>();
    }
}
