// matrust-core/src/ops/structure/symmetric.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Checks whether a matrix is symmetric: square, with `m[i, j]` equal to
/// `m[j, i]` within the element type's zero tolerance.
///
/// Non-square matrices are never symmetric; 0x0 and 1x1 matrices vacuously
/// are. Only the pairs below the diagonal are visited, each compared against
/// its mirror.
pub fn is_symmetric_op<T: MatNumeric>(m: &Matrix<T>) -> bool {
    if !m.is_square() {
        return false;
    }

    let n = m.rows();
    let d = m.as_slice();
    let tol = T::zero_tolerance();
    for i in 0..n {
        for j in 0..i {
            if (d[i * n + j] - d[j * n + i]).abs() > tol {
                return false;
            }
        }
    }
    true
}

// --- Tests ---
