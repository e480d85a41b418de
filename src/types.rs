/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! The six shape types and their data-model contract: construction,
//! defaults, indexing, equality, and textual representation.
//!
//! Everything here is representation; the algebra lives in `vee` and `mat`.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::errors::MalformedInputError;
use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;

// ---------------------------------------------------------------------------

/// A 1x2 row vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowVector2<X=f64>(pub [X; 2]);

/// A 1x3 row vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowVector3<X=f64>(pub [X; 3]);

/// A 2x1 column vector.  Not interchangeable with [`RowVector2`];
/// multiplication rules depend on which side is row and which is column.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColVector2<X=f64>(pub [X; 2]);

/// A 3x1 column vector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColVector3<X=f64>(pub [X; 3]);

/// A dense 2x2 matrix, stored as rows.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square2<X=f64>(pub [[X; 2]; 2]);

/// A dense 3x3 matrix, stored as rows.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square3<X=f64>(pub [[X; 3]; 3]);

// ---------------------------------------------------------------------------
// All types behave generally like their backing array type.

macro_rules! impl_array_like {
    ($( {$Cn:ident [$Elem:ty; $n:tt]} )*) => {$(
        impl<X> Deref for $Cn<X> {
            type Target = [$Elem; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<X> DerefMut for $Cn<X> {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        impl<'a, X> IntoIterator for &'a $Cn<X> {
            type Item = &'a $Elem;
            type IntoIter = std::slice::Iter<'a, $Elem>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, X> IntoIterator for &'a mut $Cn<X> {
            type Item = &'a mut $Elem;
            type IntoIter = std::slice::IterMut<'a, $Elem>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "RowVector2(...)",
        // so that debug output reads as a plain nested array
        impl<X: fmt::Debug> fmt::Debug for $Cn<X> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    )*};
}

impl_array_like!{
    {RowVector2 [X; 2]} {RowVector3 [X; 3]}
    {ColVector2 [X; 2]} {ColVector3 [X; 3]}
    {Square2 [[X; 2]; 2]} {Square3 [[X; 3]; 3]}
}

// ---------------------------------------------------------------------------
// Construction.
//
// `From` impls take exactly-sized arrays.  `from_slice` reads row-major,
// ignores excess elements, and fails fast on undersized input rather than
// reading out of bounds.

macro_rules! impl_vector_ctors {
    ($( {$Vn:ident $n:tt [$($i:tt)*]} )*) => {$(
        impl<X> From<[X; $n]> for $Vn<X> {
            #[inline(always)]
            fn from(arr: [X; $n]) -> Self
            { $Vn(arr) }
        }

        impl<X: Copy> $Vn<X> {
            /// Build from the leading elements of a slice.
            ///
            /// Extra elements are ignored; an undersized slice is an error.
            pub fn from_slice(xs: &[X]) -> Result<Self, MalformedInputError> {
                if xs.len() < $n {
                    return Err(MalformedInputError {
                        type_name: stringify!($Vn),
                        expected: $n,
                        found: xs.len(),
                    });
                }
                Ok($Vn([$(xs[$i]),*]))
            }
        }
    )*};
}

impl_vector_ctors!{
    {RowVector2 2 [0 1]} {RowVector3 3 [0 1 2]}
    {ColVector2 2 [0 1]} {ColVector3 3 [0 1 2]}
}

macro_rules! impl_square_ctors {
    ($( {$Mn:ident $n:tt $count:tt [$([$($i:tt)*])*]} )*) => {$(
        impl<X> From<[[X; $n]; $n]> for $Mn<X> {
            #[inline(always)]
            fn from(rows: [[X; $n]; $n]) -> Self
            { $Mn(rows) }
        }

        impl<X> $Mn<X> {
            /// Build from nested rows.
            #[inline(always)]
            pub fn from_rows(rows: [[X; $n]; $n]) -> Self
            { $Mn(rows) }
        }

        impl<X: Copy> $Mn<X> {
            /// Build from a flat slice, read row-major.
            ///
            /// Extra elements are ignored; an undersized slice is an error.
            pub fn from_slice(xs: &[X]) -> Result<Self, MalformedInputError> {
                if xs.len() < $count {
                    return Err(MalformedInputError {
                        type_name: stringify!($Mn),
                        expected: $count,
                        found: xs.len(),
                    });
                }
                Ok($Mn([$([$(xs[$i]),*]),*]))
            }
        }
    )*};
}

impl_square_ctors!{
    {Square2 2 4 [[0 1][2 3]]}
    {Square3 3 9 [[0 1 2][3 4 5][6 7 8]]}
}

// ---------------------------------------------------------------------------
// Defaults.
//
// The no-argument constructor is a documented contract: every vector type
// and Square3 default to all-zero, while Square2 defaults to the identity.
// The asymmetry between the two square types is deliberate and preserved.

macro_rules! impl_zero_default {
    ($($Cn:ident)*) => {$(
        impl<X: Semiring> Default for $Cn<X>
        where X: PrimitiveSemiring,
        {
            #[inline]
            fn default() -> Self
            { Self::zero() }
        }

        impl<X: Semiring> $Cn<X>
        where X: PrimitiveSemiring,
        {
            /// The all-zero value.  This is the documented no-argument
            /// default for this type.
            #[inline]
            pub fn new() -> Self
            { Self::zero() }
        }
    )*};
}

impl_zero_default!{ RowVector2 RowVector3 ColVector2 ColVector3 Square3 }

impl<X: Semiring> Default for Square2<X>
where X: PrimitiveSemiring,
{
    #[inline]
    fn default() -> Self
    { Self::identity() }
}

impl<X: Semiring> Square2<X>
where X: PrimitiveSemiring,
{
    /// The identity matrix.
    ///
    /// Unlike every other type in this crate, the no-argument default for
    /// `Square2` is the *multiplicative* identity, not the zero matrix.
    /// (`Square3::new` is all-zero.)  The asymmetry is an inherited,
    /// documented contract; do not "fix" it.
    #[inline]
    pub fn new() -> Self
    { Self::identity() }
}

// ---------------------------------------------------------------------------
// Textual representation: `TypeName = (v0, v1, ...)`, with nested parens
// for the square types.

macro_rules! impl_vector_display {
    ($($Vn:ident)*) => {$(
        impl<X: fmt::Display> fmt::Display for $Vn<X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($Vn), " = ("))?;
                for (i, x) in self.0.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    fmt::Display::fmt(x, f)?;
                }
                write!(f, ")")
            }
        }
    )*};
}

impl_vector_display!{ RowVector2 RowVector3 ColVector2 ColVector3 }

macro_rules! impl_square_display {
    ($($Mn:ident)*) => {$(
        impl<X: fmt::Display> fmt::Display for $Mn<X> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($Mn), " = ("))?;
                for (r, row) in self.0.iter().enumerate() {
                    if r > 0 { write!(f, ", ")?; }
                    write!(f, "(")?;
                    for (c, x) in row.iter().enumerate() {
                        if c > 0 { write!(f, ", ")?; }
                        fmt::Display::fmt(x, f)?;
                    }
                    write!(f, ")")?;
                }
                write!(f, ")")
            }
        }
    )*};
}

impl_square_display!{ Square2 Square3 }

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(RowVector2::new(), RowVector2([0.0, 0.0]));
        assert_eq!(ColVector3::new(), ColVector3([0.0, 0.0, 0.0]));
        assert_eq!(Square3::new(), Square3([[0.0; 3]; 3]));
        // Square2 alone defaults to the identity.
        assert_eq!(Square2::new(), Square2([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(Square2::<f64>::default(), Square2::<f64>::identity());
    }

    #[test]
    fn from_slice_truncates() {
        let v = RowVector3::from_slice(&[1, 2, 3, 4, 5]).unwrap();
        assert_eq!(v, RowVector3([1, 2, 3]));

        let m = Square2::from_slice(&[1, 2, 3, 4, 99]).unwrap();
        assert_eq!(m, Square2([[1, 2], [3, 4]]));
    }

    #[test]
    fn from_slice_flat_row_major() {
        let m = Square3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(m, Square3([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
    }

    #[test]
    fn from_slice_undersized() {
        let e = Square3::<f64>::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(e.type_name, "Square3");
        assert_eq!(e.expected, 9);
        assert_eq!(e.found, 2);

        assert!(ColVector2::<f64>::from_slice(&[1.0]).is_err());
    }

    #[test]
    fn indexing() {
        let m = Square2([[1, 2], [3, 4]]);
        assert_eq!(m[0][1], 2);
        assert_eq!(m.get(5), None);
        assert_eq!(m.get(1), Some(&[3, 4]));

        let v = RowVector2([5, 6]);
        assert_eq!(v[1], 6);
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn display_contract() {
        assert_eq!(
            format!("{}", RowVector2([1.5, 2.0])),
            "RowVector2 = (1.5, 2)",
        );
        assert_eq!(
            format!("{}", Square2([[1, 2], [3, 4]])),
            "Square2 = ((1, 2), (3, 4))",
        );
        assert_eq!(
            format!("{}", Square3::<i32>::identity()),
            "Square3 = ((1, 0, 0), (0, 1, 0), (0, 0, 1))",
        );
    }

    #[test]
    fn debug_is_plain_arrays() {
        assert_eq!(format!("{:?}", RowVector2([1, 2])), "[1, 2]");
        assert_eq!(format!("{:?}", Square2([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
    }
}
