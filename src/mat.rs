/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Operations on the square matrix types.
//!
//! The free functions at the bottom are the multiplication routines; the
//! `Mul` operator impls in `ops` forward to them.  Everything takes its
//! operands immutably and returns a fresh value.

use crate::types::{ColVector2, ColVector3, Square2, Square3};
use crate::errors::SingularMatrixError;
use crate::traits::{Semiring, Ring, Field};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};

use log::trace;
use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// Methods common to both square shapes.

macro_rules! impl_square_methods {
    ($( {$Mn:ident $n:tt [$( {$r:tt [$($c:tt)*]} )*]} )*) => {$(
        impl<X> $Mn<X> {
            /// Get the zero matrix.
            ///
            /// Note that for `Square2` this is *not* the same as `new`,
            /// which gives the identity.
            #[inline(always)]
            pub fn zero() -> Self
            where X: Semiring + PrimitiveSemiring,
            { $Mn([[X::zero(); $n]; $n]) }

            /// Get the identity matrix.
            #[inline(always)]
            pub fn identity() -> Self
            where X: Semiring + PrimitiveSemiring,
            {
                Self::from_fn(|r, c| match r == c {
                    true => X::one(),
                    false => X::zero(),
                })
            }

            /// Construct a matrix from a function on `(row, col)` indices.
            #[inline]
            pub fn from_fn<F>(mut f: F) -> Self
            where F: FnMut(usize, usize) -> X,
            { $Mn([$([$(f($r, $c)),*]),*]) }

            /// Multiply every element by a scalar, producing a new matrix.
            ///
            /// Also available as `matrix * scalar`.
            #[inline]
            pub fn scale(&self, scalar: X) -> Self
            where X: Semiring + PrimitiveSemiring,
            { Self::from_fn(|r, c| self[r][c] * scalar) }

            /// Matrix transpose.
            #[inline]
            pub fn transpose(&self) -> Self
            where X: Copy,
            { Self::from_fn(|r, c| self[c][r]) }
        }
    )*};
}

impl_square_methods!{
    {Square2 2 [ {0 [0 1]} {1 [0 1]} ]}
    {Square3 3 [ {0 [0 1 2]} {1 [0 1 2]} {2 [0 1 2]} ]}
}

// ---------------------------------------------------------------------------
// Determinants.

impl<X: Ring> Square2<X>
where X: PrimitiveRing,
{
    /// Matrix determinant.
    pub fn determinant(&self) -> X {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }
}

impl<X: Ring> Square3<X>
where X: PrimitiveRing,
{
    /// Matrix determinant, by cofactor expansion along the first row.
    pub fn determinant(&self) -> X {
        let [
            [a0, a1, a2],
            [b0, b1, b2],
            [c0, c1, c2],
        ] = self.0;

        a0 * (b1 * c2 - b2 * c1)
        - a1 * (b0 * c2 - b2 * c0)
        + a2 * (b0 * c1 - b1 * c0)
    }
}

// ---------------------------------------------------------------------------
// Adjoint and inverse.

impl<X: Field> Square2<X>
where X: PrimitiveFloat,
{
    /// Matrix inverse: the adjugate divided by the determinant.
    ///
    /// Fails when the determinant is exactly zero; see
    /// [`SingularMatrixError`] for what "exactly" buys and costs.
    pub fn inverse(&self) -> Result<Self, SingularMatrixError> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(SingularMatrixError);
        }
        trace!("inverting Square2, det = {:?}", det);

        let [[a, b], [c, d]] = self.0;
        Ok(Square2([
            [ d / det, -b / det],
            [-c / det,  a / det],
        ]))
    }
}

impl<X: Ring> Square3<X>
where X: PrimitiveRing,
{
    /// The adjugate: the transpose of the cofactor matrix.
    ///
    /// Each cofactor is the determinant of the 2x2 minor left by deleting
    /// the cell's row and column, with checkerboard sign starting `+` at
    /// `(0, 0)`.
    pub fn adjoint(&self) -> Self {
        let cofactors = Square3::from_fn(|r, c| {
            let det = self.minor(r, c).determinant();
            match (r + c) % 2 {
                0 => det,
                _ => -det,
            }
        });
        cofactors.transpose()
    }

    // The 2x2 submatrix left by deleting `row` and `col`.
    fn minor(&self, row: usize, col: usize) -> Square2<X> {
        Square2::from_fn(|r, c| {
            let rr = if r < row { r } else { r + 1 };
            let cc = if c < col { c } else { c + 1 };
            self[rr][cc]
        })
    }
}

impl<X: Field> Square3<X>
where X: PrimitiveFloat,
{
    /// Matrix inverse: `adjoint() * (1/determinant())`.
    ///
    /// Fails when the determinant is exactly zero; see
    /// [`SingularMatrixError`] for what "exactly" buys and costs.
    pub fn inverse(&self) -> Result<Self, SingularMatrixError> {
        let det = self.determinant();
        if det.is_zero() {
            return Err(SingularMatrixError);
        }
        trace!("inverting Square3, det = {:?}", det);

        Ok(self.adjoint().scale(X::one() / det))
    }
}

// ---------------------------------------------------------------------------
// Multiplication routines.  The `Mul` impls in `ops` are thin wrappers
// around these.

/// 2x2 matrix times 2x1 column vector.
#[inline]
pub fn mul_2x1<X: Semiring>(a: &Square2<X>, b: &ColVector2<X>) -> ColVector2<X>
where X: PrimitiveSemiring,
{ ColVector2::from_fn(|r| (0..2).map(|k| a[r][k] * b[k]).sum()) }

/// 2x2 matrix times 2x2 matrix.
#[inline]
pub fn mul_2x2<X: Semiring>(a: &Square2<X>, b: &Square2<X>) -> Square2<X>
where X: PrimitiveSemiring,
{ Square2::from_fn(|r, c| (0..2).map(|k| a[r][k] * b[k][c]).sum()) }

/// 3x3 matrix times 3x1 column vector.
#[inline]
pub fn mul_3x1<X: Semiring>(a: &Square3<X>, b: &ColVector3<X>) -> ColVector3<X>
where X: PrimitiveSemiring,
{ ColVector3::from_fn(|r| (0..3).map(|k| a[r][k] * b[k]).sum()) }

/// 3x3 matrix times 3x3 matrix.
///
/// Uses Laderman's 23-multiplication bilinear scheme rather than the naive
/// 27-multiplication triple loop:
///
/// http://www.ams.org/journals/bull/1976-82-01/S0002-9904-1976-13988-2/S0002-9904-1976-13988-2.pdf
///
/// The result is identical to ordinary matrix multiplication up to float
/// associativity.  Needs `Ring` rather than `Semiring` because the scheme
/// subtracts.
pub fn mul_3x3<X: Ring>(a: &Square3<X>, b: &Square3<X>) -> Square3<X>
where X: PrimitiveRing,
{
    let [
        [a11, a12, a13],
        [a21, a22, a23],
        [a31, a32, a33],
    ] = a.0;
    let [
        [b11, b12, b13],
        [b21, b22, b23],
        [b31, b32, b33],
    ] = b.0;

    let m1 = (a11 + a12 + a13 - a21 - a22 - a32 - a33) * b22;
    let m2 = (a11 - a21) * (b22 - b12);
    let m3 = a22 * (b12 + b21 - b11 - b22 - b23 - b31 + b33);
    let m4 = (a21 + a22 - a11) * (b11 - b12 + b22);
    let m5 = (a21 + a22) * (b12 - b11);
    let m6 = a11 * b11;
    let m7 = (a31 + a32 - a11) * (b11 - b13 + b23);
    let m8 = (a31 - a11) * (b13 - b23);
    let m9 = (a31 + a32) * (b13 - b11);
    let m10 = (a11 + a12 + a13 - a22 - a23 - a31 - a32) * b23;
    let m11 = a32 * (b13 + b21 - b11 - b22 - b23 - b31 + b32);
    let m12 = (a32 + a33 - a13) * (b22 + b31 - b32);
    let m13 = (a13 - a33) * (b22 - b32);
    let m14 = a13 * b31;
    let m15 = (a32 + a33) * (b32 - b31);
    let m16 = (a22 + a23 - a13) * (b23 + b31 - b33);
    let m17 = (a13 - a23) * (b23 - b33);
    let m18 = (a22 + a23) * (b33 - b31);
    let m19 = a12 * b21;
    let m20 = a23 * b32;
    let m21 = a21 * b13;
    let m22 = a31 * b12;
    let m23 = a33 * b33;

    Square3([
        [
            m6 + m14 + m19,
            m1 + m4 + m5 + m6 + m12 + m14 + m15,
            m6 + m7 + m9 + m10 + m14 + m16 + m18,
        ],
        [
            m2 + m3 + m4 + m6 + m14 + m16 + m17,
            m2 + m4 + m5 + m6 + m20,
            m14 + m16 + m17 + m18 + m21,
        ],
        [
            m6 + m7 + m8 + m11 + m12 + m13 + m14,
            m12 + m13 + m14 + m15 + m22,
            m6 + m7 + m8 + m9 + m23,
        ],
    ])
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use smallmat_assert_close::assert_close;

    // the pair of fixtures from the original regression data
    fn fixture_3x3() -> Square3<f64>
    { Square3::from_slice(&[1., 2., -1., 2., 1., 2., -1., 2., 1.]).unwrap() }

    fn fixture_2x2() -> Square2<f64>
    { Square2::from_slice(&[1., 2., 3., 4.]).unwrap() }

    #[test]
    fn zero_and_identity() {
        assert_eq!(Square2::zero(), Square2([[0, 0], [0, 0]]));
        assert_eq!(Square2::identity(), Square2([[1, 0], [0, 1]]));
        assert_eq!(Square3::zero(), Square3([[0; 3]; 3]));
        assert_eq!(
            Square3::identity(),
            Square3([[1, 0, 0], [0, 1, 0], [0, 0, 1]]),
        );
    }

    #[test]
    fn determinant_2x2() {
        assert_eq!(fixture_2x2().determinant(), -2.0);
        assert_eq!(Square2([[1, 1], [2, 2]]).determinant(), 0);
    }

    #[test]
    fn determinant_3x3() {
        assert_eq!(fixture_3x3().determinant(), -16.0);
        assert_eq!(Square3::<i32>::identity().determinant(), 1);
    }

    #[test]
    fn transpose_2x2() {
        assert_eq!(fixture_2x2().transpose(), Square2([[1., 3.], [2., 4.]]));
    }

    #[test]
    fn transpose_3x3() {
        let m = Square3([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.transpose(), Square3([[1, 4, 7], [2, 5, 8], [3, 6, 9]]));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn inverse_2x2_exact() {
        // det == -2, so every entry of the inverse is exact in floats
        let inv = fixture_2x2().inverse().unwrap();
        assert_eq!(inv, Square2([[-2.0, 1.0], [1.5, -0.5]]));
    }

    #[test]
    fn inverse_2x2_singular() {
        let m = Square2::from_slice(&[1., 1., 2., 2.]).unwrap();
        assert!(m.inverse().is_err());
    }

    #[test]
    fn adjoint_3x3() {
        let adj = fixture_3x3().adjoint();
        assert_eq!(adj[0][1], -4.0);
    }

    #[test]
    fn inverse_3x3() {
        let inv = fixture_3x3().inverse().unwrap();
        assert_close!(abs=1e-12, inv[0][0], 3.0 / 16.0);
    }

    #[test]
    fn inverse_3x3_singular() {
        let m = Square3::from_slice(&[1., 2., 3., 0., 2., 2., 1., 4., 5.]).unwrap();
        assert!(m.inverse().is_err());
    }

    #[test]
    fn inverse_does_not_mutate() {
        let m = fixture_3x3();
        let _ = m.inverse().unwrap();
        assert_eq!(m, fixture_3x3());
    }

    #[test]
    fn laderman_sample() {
        let a = Square3([[2., 3., 1.], [7., 4., 1.], [9., -2., 1.]]);
        let b = Square3([[9., -2., -1.], [5., 7., 3.], [8., 1., 0.]]);
        let expected = Square3([[41., 18., 7.], [91., 15., 5.], [79., -31., -15.]]);
        assert_eq!(mul_3x3(&a, &b), expected);
    }

    #[test]
    fn laderman_matches_naive() {
        // exact in integers, so no tolerances needed
        let a = Square3([[3, -1, 4], [1, 5, -9], [2, 6, -5]]);
        let b = Square3([[-3, 5, 8], [9, -7, 9], [3, 2, 3]]);
        let naive = Square3::from_fn(|r, c| {
            (0..3).map(|k| a[r][k] * b[k][c]).sum()
        });
        assert_eq!(mul_3x3(&a, &b), naive);
    }

    #[test]
    fn mul_identities() {
        let m = fixture_3x3();
        assert_eq!(mul_3x3(&Square3::identity(), &m), m);
        assert_eq!(mul_3x3(&m, &Square3::identity()), m);

        let m = fixture_2x2();
        assert_eq!(mul_2x2(&Square2::identity(), &m), m);
        assert_eq!(mul_2x2(&m, &Square2::identity()), m);
    }

    #[test]
    fn mat_vec() {
        let m = fixture_3x3();
        let v = ColVector3([1., 2., 1.]);
        assert_eq!(mul_3x1(&m, &v), ColVector3([4., 6., 4.]));

        let m = Square2([[1, 2], [3, 4]]);
        assert_eq!(mul_2x1(&m, &ColVector2([1, 1])), ColVector2([3, 7]));
    }
}
