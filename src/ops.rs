// NOTE: Operator impls exist only for the combinations the algebra defines:
//       anything-times-scalar, row-times-matching-column, and
//       square-times-(matching column | same square).  An unsupported
//       operand pairing is a type error, not a runtime error.
//
//       All types are Copy, so operands are taken by value.

use std::ops::Mul;

use crate::types::{RowVector2, RowVector3, ColVector2, ColVector3, Square2, Square3};
use crate::traits::{Semiring, Ring};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing};
use crate::{vee, mat};

// ---------------------------------------------------------------------------
// anything * scalar

macro_rules! impl_scalar_mul {
    ($($Cn:ident)*) => {$(
        impl<X: Semiring> Mul<X> for $Cn<X>
        where X: PrimitiveSemiring,
        {
            type Output = $Cn<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { self.scale(scalar) }
        }
    )*};
}

impl_scalar_mul!{ RowVector2 RowVector3 ColVector2 ColVector3 Square2 Square3 }

// scalar * anything
//
// The orphan rules prevent a single impl generic over X here, so one set of
// impls is generated per primitive scalar type.
macro_rules! impl_scalar_mul_reversed {
    ($($X:ty)*) => {$(
        impl Mul<RowVector2<$X>> for $X {
            type Output = RowVector2<$X>;

            #[inline(always)]
            fn mul(self, vector: RowVector2<$X>) -> Self::Output
            { vector.scale(self) }
        }

        impl Mul<RowVector3<$X>> for $X {
            type Output = RowVector3<$X>;

            #[inline(always)]
            fn mul(self, vector: RowVector3<$X>) -> Self::Output
            { vector.scale(self) }
        }

        impl Mul<ColVector2<$X>> for $X {
            type Output = ColVector2<$X>;

            #[inline(always)]
            fn mul(self, vector: ColVector2<$X>) -> Self::Output
            { vector.scale(self) }
        }

        impl Mul<ColVector3<$X>> for $X {
            type Output = ColVector3<$X>;

            #[inline(always)]
            fn mul(self, vector: ColVector3<$X>) -> Self::Output
            { vector.scale(self) }
        }

        impl Mul<Square2<$X>> for $X {
            type Output = Square2<$X>;

            #[inline(always)]
            fn mul(self, matrix: Square2<$X>) -> Self::Output
            { matrix.scale(self) }
        }

        impl Mul<Square3<$X>> for $X {
            type Output = Square3<$X>;

            #[inline(always)]
            fn mul(self, matrix: Square3<$X>) -> Self::Output
            { matrix.scale(self) }
        }
    )*};
}

impl_scalar_mul_reversed!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }

// ---------------------------------------------------------------------------
// row vector * matching column vector (the dot product)

macro_rules! impl_row_col_mul {
    ($( {$Row:ident $Col:ident} )*) => {$(
        impl<X: Semiring> Mul<$Col<X>> for $Row<X>
        where X: PrimitiveSemiring,
        {
            type Output = X;

            #[inline]
            fn mul(self, other: $Col<X>) -> Self::Output
            { vee::dot(&self, &other) }
        }
    )*};
}

impl_row_col_mul!{
    {RowVector2 ColVector2}
    {RowVector3 ColVector3}
}

// ---------------------------------------------------------------------------
// square * matching column vector, square * same square

impl<X: Semiring> Mul<ColVector2<X>> for Square2<X>
where X: PrimitiveSemiring,
{
    type Output = ColVector2<X>;

    #[inline]
    fn mul(self, other: ColVector2<X>) -> Self::Output
    { mat::mul_2x1(&self, &other) }
}

impl<X: Semiring> Mul<Square2<X>> for Square2<X>
where X: PrimitiveSemiring,
{
    type Output = Square2<X>;

    #[inline]
    fn mul(self, other: Square2<X>) -> Self::Output
    { mat::mul_2x2(&self, &other) }
}

impl<X: Semiring> Mul<ColVector3<X>> for Square3<X>
where X: PrimitiveSemiring,
{
    type Output = ColVector3<X>;

    #[inline]
    fn mul(self, other: ColVector3<X>) -> Self::Output
    { mat::mul_3x1(&self, &other) }
}

// Ring, not Semiring: the Laderman routine subtracts.
impl<X: Ring> Mul<Square3<X>> for Square3<X>
where X: PrimitiveRing,
{
    type Output = Square3<X>;

    #[inline]
    fn mul(self, other: Square3<X>) -> Self::Output
    { mat::mul_3x3(&self, &other) }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::types::*;

    #[test]
    fn scalar_both_sides() {
        let v = RowVector3([1, 2, 3]);
        assert_eq!(v * 2, RowVector3([2, 4, 6]));
        assert_eq!(2 * v, RowVector3([2, 4, 6]));

        let m = Square2([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m * 0.5, Square2([[0.5, 1.0], [1.5, 2.0]]));
        assert_eq!(0.5 * m, m * 0.5);
    }

    #[test]
    fn row_times_col_is_scalar() {
        assert_eq!(RowVector2([1, 2]) * ColVector2([1, 2]), 5);
        assert_eq!(RowVector3([1, 2, 3]) * ColVector3([1, 2, 3]), 14);
    }

    #[test]
    fn square_times_col() {
        let m = Square3([[1, 0, 0], [0, 2, 0], [0, 0, 3]]);
        assert_eq!(m * ColVector3([5, 5, 5]), ColVector3([5, 10, 15]));
    }

    #[test]
    fn square_times_square() {
        let a = Square2([[1, 2], [3, 4]]);
        let b = Square2([[0, 1], [1, 0]]);
        assert_eq!(a * b, Square2([[2, 1], [4, 3]]));
        assert_eq!(Square3::<i32>::identity() * Square3::identity(), Square3::identity());
    }

    #[test]
    fn operands_survive() {
        // Copy semantics: using a value in a product leaves it usable.
        let a = Square2([[1, 2], [3, 4]]);
        let _ = a * a;
        assert_eq!(a, Square2([[1, 2], [3, 4]]));
    }
}
