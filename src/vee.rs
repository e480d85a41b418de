/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operations on the fixed-size vector types.
//!
//! The only cross-type product a vector supports is row `.` column of the
//! same dimension, which yields a scalar.  Everything else a row or column
//! vector can do is scaling.  There is no silent coercion between row and
//! column vectors; if a product is not defined here or in `ops`, it does
//! not exist.

use crate::types::{RowVector2, RowVector3, ColVector2, ColVector3};
use crate::traits::Semiring;
use crate::traits::internal::PrimitiveSemiring;

use num_traits::Zero;

// ---------------------------------------------------------------------------

/// Inner product of a row vector with the matching column vector.
///
/// This is `RowVector2 * ColVector2` (and the 3d equivalent) as a free
/// function.  The sum runs over pairwise products, left to right.
#[inline(always)]
pub fn dot<A: Dot<B>, B>(a: &A, b: &B) -> A::Output
{ Dot::dot(a, b) }

/// Implementation detail of the free function `vee::dot`.
///
/// Exists so that `dot` can be generic over both dimensions while staying
/// closed over the row-times-column pairings that actually make sense.
pub trait Dot<Rhs> {
    type Output;

    fn dot(&self, other: &Rhs) -> Self::Output;
}

macro_rules! impl_dot {
    ($( {$Row:ident $Col:ident $n:tt} )*) => {$(
        impl<X: Semiring> Dot<$Col<X>> for $Row<X>
        where X: PrimitiveSemiring,
        {
            type Output = X;

            #[inline]
            fn dot(&self, other: &$Col<X>) -> X
            { (1..$n).fold(self[0] * other[0], |s, i| s + self[i] * other[i]) }
        }
    )*};
}

impl_dot!{
    {RowVector2 ColVector2 2}
    {RowVector3 ColVector3 3}
}

// ---------------------------------------------------------------------------

macro_rules! impl_vector_methods {
    ($( {$Vn:ident $n:tt [$($i:tt)*]} )*) => {$(
        impl<X> $Vn<X> {
            /// Get a zero vector.
            ///
            /// This static method just provides an easy way to supply a
            /// type hint.
            #[inline(always)]
            pub fn zero() -> Self
            where X: Semiring + PrimitiveSemiring,
            { $Vn([X::zero(); $n]) }

            /// Construct a vector from a function on indices.
            #[inline]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize) -> X,
            { $Vn([$(f($i)),*]) }

            /// Multiply every component by a scalar, producing a new vector.
            ///
            /// Also available as `vector * scalar`.
            #[inline]
            pub fn scale(&self, scalar: X) -> Self
            where X: Semiring + PrimitiveSemiring,
            { Self::from_fn(|i| self[i] * scalar) }

            /// Apply a function to each element.
            #[inline]
            pub fn map<B, F>(self, mut f: F) -> $Vn<B>
            where F: FnMut(X) -> B, X: Copy,
            { $Vn([$(f(self.0[$i])),*]) }
        }
    )*};
}

impl_vector_methods!{
    {RowVector2 2 [0 1]}
    {RowVector3 3 [0 1 2]}
    {ColVector2 2 [0 1]}
    {ColVector3 3 [0 1 2]}
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_products() {
        assert_eq!(dot(&RowVector2([1, 2]), &ColVector2([1, 2])), 5);
        assert_eq!(dot(&RowVector3([1, 2, 3]), &ColVector3([1, 2, 3])), 14);
    }

    #[test]
    fn scale_is_elementwise() {
        assert_eq!(RowVector3([1, 2, 3]).scale(4), RowVector3([4, 8, 12]));
        assert_eq!(ColVector2([1.0, -2.0]).scale(0.5), ColVector2([0.5, -1.0]));
    }

    #[test]
    fn scale_does_not_mutate() {
        let v = ColVector3([1, 2, 3]);
        let _ = v.scale(10);
        assert_eq!(v, ColVector3([1, 2, 3]));
    }

    #[test]
    fn zero_vector() {
        assert_eq!(RowVector2::zero(), RowVector2([0.0, 0.0]));
        assert!(ColVector3::<i64>::zero().iter().all(|&x| x == 0));
    }

    #[test]
    fn map_changes_element_type() {
        let v = RowVector2([1, 2]).map(|x| x as f64 * 0.5);
        assert_eq!(v, RowVector2([0.5, 1.0]));
    }
}
