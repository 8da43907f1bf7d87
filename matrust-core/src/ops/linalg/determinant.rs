// matrust-core/src/ops/linalg/determinant.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Validates that `m` is exactly `expected x expected`.
pub(crate) fn check_fixed_shape<T: MatNumeric>(
    m: &Matrix<T>,
    expected: usize,
    operation: &str,
) -> Result<(), MatRustError> {
    if m.shape() != (expected, expected) {
        return Err(MatRustError::WrongFixedShape {
            expected,
            actual_rows: m.rows(),
            actual_cols: m.cols(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

/// Computes the determinant of a 2x2 matrix: `a*d - b*c`.
///
/// Any other shape fails with `WrongFixedShape`; there is no general-size
/// determinant in this library.
pub fn det_2x2_op<T: MatNumeric>(m: &Matrix<T>) -> Result<T, MatRustError> {
    check_fixed_shape(m, 2, "det_2x2")?;
    let d = m.as_slice();
    Ok(d[0] * d[3] - d[1] * d[2])
}

/// Computes the determinant of a 3x3 matrix by first-row Laplace expansion:
/// `a(ei - fh) - b(di - fg) + c(dh - eg)`.
pub fn det_3x3_op<T: MatNumeric>(m: &Matrix<T>) -> Result<T, MatRustError> {
    check_fixed_shape(m, 3, "det_3x3")?;
    let d = m.as_slice();
    Ok(d[0] * (d[4] * d[8] - d[5] * d[7]) - d[1] * (d[3] * d[8] - d[5] * d[6])
        + d[2] * (d[3] * d[7] - d[4] * d[6]))
}

// --- Tests ---
#[cfg(test)]
#[path = "determinant_test.rs"]
mod tests;
