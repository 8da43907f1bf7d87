// matrust-core/src/ops/arithmetic/scale.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Multiplies every element of a matrix by a scalar.
///
/// Defined for every shape, including zero-sized matrices, so it cannot
/// fail.
pub fn scale_op<T: MatNumeric>(m: &Matrix<T>, k: T) -> Matrix<T> {
    let data: Vec<T> = m.as_slice().iter().map(|&x| x * k).collect();
    Matrix {
        data,
        rows: m.rows(),
        cols: m.cols(),
    }
}

// --- Tests ---
