// matrust-core/src/ops/linalg/power.rs

use crate::error::MatRustError;
use crate::matrix::create::identity;
use crate::matrix::Matrix;
use crate::ops::linalg::matmul_op;
use crate::ops::traits::MatNumeric;
use log::debug;

/// Raises a square matrix to a non-negative integer power.
///
/// `power_op(m, 0)` delegates to [`identity`] of the same order, so a 0x0
/// input fails with `InvalidOrder` there; `power_op(m, 1)` is a copy; larger
/// exponents left-associate repeated multiplication, `e - 1` products in
/// total.
pub fn power_op<T: MatNumeric>(m: &Matrix<T>, exponent: i32) -> Result<Matrix<T>, MatRustError> {
    // --- Validation ---
    if !m.is_square() {
        return Err(MatRustError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
            operation: "power".to_string(),
        });
    }
    if exponent < 0 {
        return Err(MatRustError::NegativeExponent { exponent });
    }
    if exponent == 0 {
        return identity(m.rows());
    }

    debug!(
        "power: raising {}x{} matrix to exponent {}",
        m.rows(),
        m.cols(),
        exponent
    );

    let mut result = m.clone();
    for _ in 1..exponent {
        result = matmul_op(&result, m)?;
    }
    Ok(result)
}

// --- Tests ---
