/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use thiserror::Error;

/// Returned by `inverse` when the determinant is exactly zero.
///
/// The check is an exact comparison against zero, not a tolerance check.
/// A matrix whose determinant rounds to a subnormal but nonzero float will
/// invert (producing enormous entries), and a matrix that is singular in
/// exact arithmetic but whose computed determinant misses zero will too.
/// Callers who care about conditioning need to look at the determinant
/// themselves.
#[derive(Debug, Error)]
#[error("determinant is 0: unable to calculate inverse")]
pub struct SingularMatrixError;

/// Returned by `from_slice` when the input holds fewer scalars than the
/// shape requires.
///
/// Oversized input is not an error; the excess is ignored.
#[derive(Debug, Error)]
#[error("malformed input for {type_name}: expected {expected} scalars, found {found}")]
pub struct MalformedInputError {
    pub type_name: &'static str,
    pub expected: usize,
    pub found: usize,
}
