/* ************************************************************************ **
** This file is part of smallmat, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Scalar tiers for the element type of a matrix or vector.
//!
//! Each operation asks for the weakest tier that can express it:
//! products and dot products need `Semiring`, determinants and adjoints
//! need `Ring` (subtraction), and only `inverse` needs `Field` (division).
//! Integer-element matrices therefore get everything except `inverse`,
//! which is restricted to floats at compile time.

/// Trait for scalars with addition and multiplication.
///
/// Implemented for all primitive integers and floats, and sealed against
/// everything else; this crate is not in the business of committing to an
/// abstract-algebra API.
pub trait Semiring: sealed::Semiring {}

/// Trait for scalars that additionally support subtraction and negation.
///
/// Unsigned integers are excluded; a ring must be closed under negation.
pub trait Ring: Semiring + sealed::Ring {}

/// Trait for scalars that additionally support division.
///
/// Just the primitive floats.
pub trait Field: Ring + sealed::Field {}

mod sealed {
    pub trait Semiring {}
    pub trait Ring {}
    pub trait Field {}
}

macro_rules! impl_semiring {
    ($($X:ty)*) => {$(
        impl Semiring for $X {}
        impl sealed::Semiring for $X {}
    )*};
}

macro_rules! impl_ring {
    ($($X:ty)*) => {$(
        impl Ring for $X {}
        impl sealed::Ring for $X {}
    )*};
}

macro_rules! impl_field {
    ($($X:ty)*) => {$(
        impl Field for $X {}
        impl sealed::Field for $X {}
    )*};
}

impl_semiring!{ u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }
impl_ring!{ i8 i16 i32 i64 isize f32 f64 }
impl_field!{ f32 f64 }

/// Internal-use supertraits that carry the actual operator bounds.
///
/// The public tiers above are bare markers so that client code never sees
/// a wall of `std::ops` bounds; implementations bound on these instead.
#[doc(hidden)]
pub mod internal {
    use std::fmt;
    use std::iter::Sum;
    use std::ops::{Add, Sub, Mul, Div, Neg};

    use num_traits::{Zero, One};

    pub trait PrimitiveSemiring
        : Sized + Copy + Default + fmt::Debug
        + PartialEq + PartialOrd
        + Add<Output=Self> + Mul<Output=Self>
        + Zero + One + Sum
    {}

    pub trait PrimitiveRing
        : PrimitiveSemiring
        + Sub<Output=Self> + Neg<Output=Self>
    {}

    pub trait PrimitiveFloat
        : PrimitiveRing
        + Div<Output=Self>
    {}

    macro_rules! impl_primitive_markers {
        ($Marker:ident: $($X:ty)*) => {$(
            impl $Marker for $X {}
        )*};
    }

    impl_primitive_markers!{ PrimitiveSemiring: u8 u16 u32 u64 usize i8 i16 i32 i64 isize f32 f64 }
    impl_primitive_markers!{ PrimitiveRing: i8 i16 i32 i64 isize f32 f64 }
    impl_primitive_markers!{ PrimitiveFloat: f32 f64 }
}
