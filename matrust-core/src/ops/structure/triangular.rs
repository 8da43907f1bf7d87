// matrust-core/src/ops/structure/triangular.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Checks whether a matrix is upper triangular: square, with every element
/// below the main diagonal zero within the element type's zero tolerance.
///
/// Non-square matrices are never triangular; 0x0 and 1x1 matrices vacuously
/// are.
pub fn is_upper_triangular_op<T: MatNumeric>(m: &Matrix<T>) -> bool {
    if !m.is_square() {
        return false;
    }

    let n = m.rows();
    let d = m.as_slice();
    let tol = T::zero_tolerance();
    for i in 0..n {
        for j in 0..i {
            if d[i * n + j].abs() > tol {
                return false;
            }
        }
    }
    true
}

/// Checks whether a matrix is lower triangular: square, with every element
/// above the main diagonal zero within the element type's zero tolerance.
pub fn is_lower_triangular_op<T: MatNumeric>(m: &Matrix<T>) -> bool {
    if !m.is_square() {
        return false;
    }

    let n = m.rows();
    let d = m.as_slice();
    let tol = T::zero_tolerance();
    for i in 0..n {
        for j in (i + 1)..n {
            if d[i * n + j].abs() > tol {
                return false;
            }
        }
    }
    true
}

// --- Tests ---
