// src/matrix/operators.rs

//! `std::ops` operator sugar for matrices. The operators delegate to the
//! checked `_op` functions and panic on precondition violations; the
//! `Result`-returning methods on [`Matrix`] are the checked surface.

use crate::matrix::Matrix;
use crate::ops::arithmetic::{add_op, scale_op, sub_op};
use crate::ops::linalg::matmul_op;
use crate::ops::traits::MatNumeric;
use std::ops::{Add, Mul, Sub};

impl<'a, 'b, T: MatNumeric> Add<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Performs element-wise addition.
    ///
    /// # Panics
    /// Panics if the shapes of the two matrices are not identical.
    fn add(self, other: &'b Matrix<T>) -> Self::Output {
        add_op(self, other).unwrap_or_else(|e| panic!("Matrix addition failed: {:?}", e))
    }
}

impl<'a, 'b, T: MatNumeric> Sub<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Performs element-wise subtraction.
    ///
    /// # Panics
    /// Panics if the shapes of the two matrices are not identical.
    fn sub(self, other: &'b Matrix<T>) -> Self::Output {
        sub_op(self, other).unwrap_or_else(|e| panic!("Matrix subtraction failed: {:?}", e))
    }
}

impl<'a, 'b, T: MatNumeric> Mul<&'b Matrix<T>> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Performs matrix multiplication (not the element-wise product).
    ///
    /// # Panics
    /// Panics if the inner dimensions do not match.
    fn mul(self, other: &'b Matrix<T>) -> Self::Output {
        matmul_op(self, other).unwrap_or_else(|e| panic!("Matrix multiplication failed: {:?}", e))
    }
}

impl<'a, T: MatNumeric> Mul<T> for &'a Matrix<T> {
    type Output = Matrix<T>;

    /// Multiplies every element by a scalar.
    fn mul(self, k: T) -> Self::Output {
        scale_op(self, k)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::testing::{check_matrix_near, create_test_matrix};

    #[test]
    fn test_operator_add_sub() {
        let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = create_test_matrix(vec![5.0, 6.0, 7.0, 8.0], 2, 2);

        let sum = &a + &b;
        check_matrix_near(&sum, 2, 2, &[6.0, 8.0, 10.0, 12.0], 1e-12);

        let diff = &b - &a;
        check_matrix_near(&diff, 2, 2, &[4.0, 4.0, 4.0, 4.0], 1e-12);
    }

    #[test]
    fn test_operator_matmul_and_scale() {
        let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = create_test_matrix(vec![5.0, 6.0, 7.0, 8.0], 2, 2);

        let product = &a * &b;
        check_matrix_near(&product, 2, 2, &[19.0, 22.0, 43.0, 50.0], 1e-12);

        let scaled = &a * 3.0;
        check_matrix_near(&scaled, 2, 2, &[3.0, 6.0, 9.0, 12.0], 1e-12);
    }

    #[test]
    #[should_panic(expected = "Matrix addition failed")]
    fn test_operator_add_shape_mismatch_panics() {
        let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = create_test_matrix(vec![1.0, 2.0, 3.0], 1, 3);
        let _ = &a + &b;
    }

    #[test]
    #[should_panic(expected = "Matrix multiplication failed")]
    fn test_operator_matmul_mismatch_panics() {
        let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = create_test_matrix(vec![1.0, 2.0, 3.0], 3, 1);
        let _ = &a * &b;
    }
}
