// matrust-core/src/ops/structure/diagonal.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Checks whether a matrix is diagonal: square, with every off-diagonal
/// element zero within the element type's zero tolerance.
///
/// Non-square matrices are never diagonal; 0x0 and 1x1 matrices vacuously
/// are (they have no off-diagonal elements).
pub fn is_diagonal_op<T: MatNumeric>(m: &Matrix<T>) -> bool {
    if !m.is_square() {
        return false;
    }

    let n = m.rows();
    let d = m.as_slice();
    let tol = T::zero_tolerance();
    for i in 0..n {
        for j in 0..n {
            if i != j && d[i * n + j].abs() > tol {
                return false;
            }
        }
    }
    true
}

// --- Tests ---
