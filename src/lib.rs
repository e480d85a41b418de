//! Small, fixed-dimension matrix and vector types for 2D/3D work.
//!
//! This crate provides one type per shape ([`RowVector2`], [`RowVector3`],
//! [`ColVector2`], [`ColVector3`], [`Square2`], [`Square3`]), backed by
//! stack arrays in row-major order, together with scalar multiplication,
//! matrix-matrix and matrix-vector products, transpose, determinant,
//! adjoint, and inverse.  It is deliberately not a general linear algebra
//! library; if you need dimensions other than 2 and 3, look elsewhere.
//!
//! All types are plain `Copy` values and every operation is pure: sources
//! are never mutated, results are freshly constructed.  Shared read-only
//! instances are therefore thread-safe without any synchronization.
//!
//! Row vectors and column vectors of the same dimension are distinct types
//! on purpose; which products exist depends on which side is row and which
//! is column.  Operand compatibility is checked entirely at compile time:
//! a product between incompatible shapes, or an `==` between two different
//! shapes, simply does not typecheck.  The runtime error surface that
//! remains is small:
//!
//! * `inverse` fails with [`SingularMatrixError`] when the determinant is
//!   exactly zero (an exact comparison; a matrix that is merely *nearly*
//!   singular will invert, badly);
//! * `from_slice` fails with [`MalformedInputError`] when given fewer
//!   scalars than the shape requires (extra elements are silently ignored);
//! * indexing past the fixed dimension panics, as it does for the backing
//!   array.  Slice `get` is available through deref for the checked form.

pub use crate::types::{RowVector2, RowVector3, ColVector2, ColVector3, Square2, Square3};
pub use crate::errors::{MalformedInputError, SingularMatrixError};
pub use crate::traits::{Semiring, Ring, Field};

mod types;
mod traits;
mod errors;
mod ops;

pub mod vee;
pub mod mat;
