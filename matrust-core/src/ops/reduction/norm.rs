// matrust-core/src/ops/reduction/norm.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Computes the Frobenius norm: the square root of the sum of all squared
/// elements.
///
/// Defined for every shape, so it cannot fail; the empty matrix has norm
/// zero.
pub fn frobenius_norm_op<T: MatNumeric>(m: &Matrix<T>) -> T {
    let mut acc = T::zero();
    for &v in m.as_slice() {
        acc += v * v;
    }
    acc.sqrt()
}

// --- Tests ---
