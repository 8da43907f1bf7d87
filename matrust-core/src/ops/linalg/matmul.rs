// matrust-core/src/ops/linalg/matmul.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Performs matrix multiplication C = A @ B.
///
/// A: [M, K], B: [K, N] -> C: [M, N], with
/// `c[i, j] = sum_l a[i, l] * b[l, j]` accumulated in ascending `l`.
/// Incompatible inner dimensions fail with `DimensionMismatch`.
/// Uses the naive triple-loop algorithm.
pub fn matmul_op<T: MatNumeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
    // --- Shape Check ---
    if a.cols() != b.rows() {
        return Err(MatRustError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
            operation: "matmul".to_string(),
        });
    }

    let m = a.rows();
    let k = a.cols(); // == b.rows()
    let n = b.cols();

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut output_data = vec![T::zero(); m * n];

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                sum += a_data[i * k + l] * b_data[l * n + j];
            }
            output_data[i * n + j] = sum;
        }
    }

    Matrix::new(output_data, m, n)
}

// --- Tests ---
#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
