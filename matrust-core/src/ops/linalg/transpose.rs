// matrust-core/src/ops/linalg/transpose.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Transposes a matrix.
///
/// The result is `cols x rows` with `out[j, i] = m[i, j]`. Unlike a strided
/// view, the result owns a freshly allocated buffer. Defined for every
/// shape, so it cannot fail.
pub fn transpose_op<T: MatNumeric>(m: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = m.shape();
    let src = m.as_slice();
    let mut data = vec![T::zero(); rows * cols];

    for i in 0..rows {
        for j in 0..cols {
            data[j * rows + i] = src[i * cols + j];
        }
    }

    Matrix {
        data,
        rows: cols,
        cols: rows,
    }
}

// --- Tests ---
