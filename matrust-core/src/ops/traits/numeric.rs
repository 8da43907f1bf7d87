use num_traits::{Float, NumAssignOps, NumOps, ToPrimitive};
use std::fmt::Debug;

/// A trait representing numeric types usable in MatRust matrix operations.
///
/// This trait bounds the types (like `f32`, `f64`) that can be used within
/// the generic kernels of matrix operations. It ensures that the type
/// supports necessary mathematical operations, comparisons, and other properties.
pub trait MatNumeric:
    Float // Includes Num + Copy + Bounded + Signed + etc.
    + NumAssignOps // Includes AddAssign, SubAssign, MulAssign, DivAssign, RemAssign
    + NumOps // Includes Add, Sub, Mul, Div, Rem (needed explicitly beyond Float's ops for some generic contexts)
    + ToPrimitive // For reporting determinants in errors regardless of T
    + PartialOrd
    + Debug
    + Copy // Float requires Copy, explicitly listed for clarity
    + Send
    + Sync
    + 'static
{
    /// Magnitude below which a value is treated as zero.
    ///
    /// Used by the singularity check in the inverse and by the structural
    /// predicates (diagonal, triangular, symmetric) to absorb rounding noise.
    fn zero_tolerance() -> Self;
}

// Implement the trait for f32 and f64.
// The compiler checks if f32/f64 satisfy all the bounds of MatNumeric.
impl MatNumeric for f32 {
    fn zero_tolerance() -> Self {
        1e-6
    }
}

impl MatNumeric for f64 {
    fn zero_tolerance() -> Self {
        1e-10
    }
}
