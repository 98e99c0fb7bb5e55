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

use std::any::{TypeId, type_name};

/// Asserts that `A` and `B` are the same type.
///
/// Type-level results are plain types, so checking an algorithm means
/// comparing the type it produced against the type you expected. On mismatch
/// this panics and prints both type names, which is far easier to read than
/// an unsatisfied trait bound.
///
/// # Panics
///
/// Panics if `A` and `B` are different types.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::{assert_type_eq, tlist};
/// # use hawser_core::typenum::{U1, U2};
/// assert_type_eq::<tlist![U1, U2], hawser_core::Cons<U1, hawser_core::Cons<U2, hawser_core::Nil>>>();
/// ```
///
/// ```rust,should_panic
/// # use hawser_core::{assert_type_eq, tlist};
/// # use hawser_core::typenum::{U1, U2};
/// assert_type_eq::<tlist![U1, U2], tlist![U2, U1]>();
/// ```
#[track_caller]
pub fn assert_type_eq<A, B>()
where
    A: ?Sized + 'static,
    B: ?Sized + 'static,
{
    assert!(
        TypeId::of::<A>() == TypeId::of::<B>(),
        "type mismatch\n  left: {}\n right: {}",
        type_name::<A>(),
        type_name::<B>()
    );
}
