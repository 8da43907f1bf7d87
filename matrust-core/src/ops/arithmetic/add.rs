// matrust-core/src/ops/arithmetic/add.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Performs element-wise addition of two matrices.
///
/// The shapes must be identical; there is no broadcasting. Returns a new
/// matrix, or `DimensionMismatch` when the shapes differ (no partially
/// filled result is ever produced).
pub fn add_op<T: MatNumeric>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
    // --- Shape Check ---
    if a.shape() != b.shape() {
        return Err(MatRustError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
            operation: "add".to_string(),
        });
    }

    let data: Vec<T> = a
        .as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(&x, &y)| x + y)
        .collect();

    Matrix::new(data, a.rows(), a.cols())
}

// --- Tests ---
