// src/math/scalar.rs
/*!
A single minimal `Scalar` trait unifying the real numeric element types
(integers and floats) that assay payloads are generic over.

Design goals:
- One public trait (`Scalar`) you can bound on everywhere.
- Works for unsigned ints, signed ints, and floats.
- Minimal shared bounds plus `PartialOrd` (needed by the aggregation
  helpers; every covered type is real, so ordering is well defined).
- Uniform API: lossless-ish f64 view for statistics, checked construction
  back from f64, finite check.

Conventions:
- `to_f64` widens: exact for floats and for integers up to 2^53; large
  64/128-bit integers round (acceptable for assay statistics).
- `from_f64` is checked: `None` when the value cannot be represented
  (overflow, NaN for integer targets). Float targets accept any value.
- Integers are always finite.
*/

use core::fmt::{Debug, Display};
use core::iter::{Product, Sum};
use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};
use num_traits::{Num, NumCast, One, Zero};

// ==============================================================================
// ------------------- Sealing: keep impl surface controlled --------------------
// ==============================================================================

mod sealed {
    pub trait Sealed {}
    macro_rules! impl_sealed_for {
        ($($t:ty),* $(,)?) => { $(impl Sealed for $t {})* };
    }
    impl_sealed_for!(
        // unsigned
        u8, u16, u32, u64, usize,
        // signed
        i8, i16, i32, i64, isize,
        // floats
        f32, f64,
    );
}
use sealed::Sealed;

// ==============================================================================
// --------------------------------- Trait Def ----------------------------------
// ==============================================================================

/// A minimal, unified scalar trait for real measurement values.
pub trait Scalar:
    Num
    + NumCast
    + Zero
    + One
    + PartialOrd
    + Copy
    + Clone
    + Default
    + Send
    + Sync
    + 'static
    + Debug
    + Display
    + Sum<Self>
    + Product<Self>
    + Sealed
{
    /// Widen to `f64` for aggregation arithmetic.
    fn to_f64(self) -> f64;

    /// Checked construction from `f64`; `None` on overflow or an
    /// unrepresentable value (e.g. NaN into an integer).
    fn from_f64(x: f64) -> Option<Self>;

    /// Finite check (native for floats; integers are always finite).
    fn is_finite_value(self) -> bool;
}

// ==============================================================================
// -------------------------------- IMPL: Float ---------------------------------
// ==============================================================================

impl Scalar for f32 {
    #[inline] fn to_f64(self) -> f64 { self as f64 }
    #[inline] fn from_f64(x: f64) -> Option<Self> { Some(x as f32) }
    #[inline] fn is_finite_value(self) -> bool { self.is_finite() }
}

impl Scalar for f64 {
    #[inline] fn to_f64(self) -> f64 { self }
    #[inline] fn from_f64(x: f64) -> Option<Self> { Some(x) }
    #[inline] fn is_finite_value(self) -> bool { self.is_finite() }
}

// ==============================================================================
// ------------------------------- IMPL: Integers --------------------------------
// ==============================================================================

macro_rules! impl_scalar_int {
    ($($t:ty),* $(,)?) => {$(
        impl Scalar for $t {
            #[inline] fn to_f64(self) -> f64 { self as f64 }

            #[inline]
            fn from_f64(x: f64) -> Option<Self> {
                // NumCast rejects NaN, infinities, and out-of-range values.
                NumCast::from(x)
            }

            #[inline] fn is_finite_value(self) -> bool { true }
        }
    )*}
}
impl_scalar_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

// ==============================================================================
// ----------------------------- Integer refinement ------------------------------
// ==============================================================================

/// Scalars supporting bitwise and shift kernels (the integer subset).
///
/// Blanket-implemented; floats are excluded by their missing `core::ops`
/// bitwise impls.
pub trait IntScalar:
    Scalar
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
}

impl<T> IntScalar for T where
    T: Scalar
        + BitAnd<Output = T>
        + BitOr<Output = T>
        + BitXor<Output = T>
        + Shl<u32, Output = T>
        + Shr<u32, Output = T>
{
}
