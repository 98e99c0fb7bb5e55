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

//! # Reification
//!
//! Brings a type-level integer sequence down to a runtime `Vec`, for
//! diagnostics, assertions, and for code that needs the computed positions
//! as plain numbers. The target scalar is any `num_traits::NumCast` type;
//! values that do not fit produce a [`ReifyError`] naming the offending
//! position instead of being truncated.
//!
//! Requires the `integer-sequence` feature.
//!
//! ```rust
//! use hawser::reify::Reify;
//! use hawser::typenum::{tarr, N1, P4, U2, U7};
//!
//! assert_eq!(<tarr![U2, U7] as Reify>::to_vec::<usize>(), Ok(vec![2, 7]));
//! assert_eq!(<tarr![N1, P4] as Reify>::to_vec::<i32>(), Ok(vec![-1, 4]));
//! assert!(<tarr![N1, P4] as Reify>::to_vec::<u32>().is_err());
//! ```

use crate::convert::IntegerConstant;
use hawser_core::typenum::{ATerm, TArr};
use num_traits::NumCast;

/// The error type for reifying an integer sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReifyError {
    /// Position of the element that did not fit.
    pub position: usize,
    /// The value of that element.
    pub value: i128,
    /// The name of the target type (e.g., "u8").
    pub target: &'static str,
}

impl std::fmt::Display for ReifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Value {} at position {} does not fit in type {}",
            self.value, self.position, self.target
        )
    }
}

impl std::error::Error for ReifyError {}

/// A typenum integer sequence that can be read back at runtime.
pub trait Reify {
    /// Number of elements in the sequence.
    const LEN: usize;

    /// Appends the values of the sequence, starting at `position`, to `out`.
    fn reify_into<T>(out: &mut Vec<T>, position: usize) -> Result<(), ReifyError>
    where
        T: NumCast;

    /// Returns the values of the sequence, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ReifyError`] for the first value that `T` cannot represent.
    fn to_vec<T>() -> Result<Vec<T>, ReifyError>
    where
        T: NumCast,
    {
        let mut out = Vec::with_capacity(Self::LEN);
        Self::reify_into(&mut out, 0)?;
        Ok(out)
    }
}

impl Reify for ATerm {
    const LEN: usize = 0;

    #[inline(always)]
    fn reify_into<T>(_: &mut Vec<T>, _: usize) -> Result<(), ReifyError>
    where
        T: NumCast,
    {
        Ok(())
    }
}

impl<V, A> Reify for TArr<V, A>
where
    V: IntegerConstant,
    A: Reify,
{
    const LEN: usize = A::LEN + 1;

    fn reify_into<T>(out: &mut Vec<T>, position: usize) -> Result<(), ReifyError>
    where
        T: NumCast,
    {
        let value = <T as NumCast>::from(V::VALUE).ok_or_else(|| ReifyError {
            position,
            value: V::VALUE,
            target: std::any::type_name::<T>(),
        })?;
        out.push(value);
        A::reify_into(out, position + 1)
    }
}
