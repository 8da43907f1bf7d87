// matrust-core/src/ops/reduction/trace.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Sums the main diagonal of a square matrix.
///
/// Rectangular input fails with `NotSquare`; the 0x0 matrix has trace zero
/// (empty sum).
pub fn trace_op<T: MatNumeric>(m: &Matrix<T>) -> Result<T, MatRustError> {
    if !m.is_square() {
        return Err(MatRustError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
            operation: "trace".to_string(),
        });
    }

    let d = m.as_slice();
    let n = m.rows();
    let mut acc = T::zero();
    for i in 0..n {
        acc += d[i * n + i];
    }
    Ok(acc)
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::create_test_matrix;
    use approx::assert_relative_eq;

    #[test]
    fn test_trace_2x2() {
        let m = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_relative_eq!(trace_op(&m).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trace_3x3() {
        let m = create_test_matrix(vec![2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 5.0, 0.0, 7.0], 3, 3);
        assert_relative_eq!(trace_op(&m).unwrap(), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trace_not_square() {
        let m = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);
        let result = trace_op(&m);
        assert!(result.is_err());
        match result.err().unwrap() {
            MatRustError::NotSquare {
                rows,
                cols,
                operation,
            } => {
                assert_eq!((rows, cols), (3, 2));
                assert_eq!(operation, "trace");
            }
            _ => panic!("Incorrect error type returned"),
        }
    }

    #[test]
    fn test_trace_empty_is_zero() {
        let m = create_test_matrix(vec![], 0, 0);
        assert_eq!(trace_op(&m).unwrap(), 0.0);
    }
}
