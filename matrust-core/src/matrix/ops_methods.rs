// src/matrix/ops_methods.rs

//! Convenience methods on [`Matrix`] that delegate to the free operation
//! functions in [`crate::ops`]. The free functions remain the primary
//! surface; these methods only make call sites read more naturally.

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::arithmetic::{add_op, scale_op, sub_op};
use crate::ops::linalg::{
    det_2x2_op, det_3x3_op, inverse_2x2_op, matmul_op, power_op, transpose_op,
};
use crate::ops::reduction::{frobenius_norm_op, trace_op};
use crate::ops::structure::{
    is_diagonal_op, is_lower_triangular_op, is_symmetric_op, is_upper_triangular_op,
};
use crate::ops::traits::MatNumeric;

impl<T: MatNumeric> Matrix<T> {
    /// Element-wise sum with `other`. See [`add_op`].
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
        add_op(self, other)
    }

    /// Element-wise difference with `other`. See [`sub_op`].
    pub fn sub(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
        sub_op(self, other)
    }

    /// Every element multiplied by `k`. See [`scale_op`].
    pub fn scale(&self, k: T) -> Matrix<T> {
        scale_op(self, k)
    }

    /// Matrix product `self @ other`. See [`matmul_op`].
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
        matmul_op(self, other)
    }

    /// The transposed matrix. See [`transpose_op`].
    pub fn transpose(&self) -> Matrix<T> {
        transpose_op(self)
    }

    /// `self` raised to a non-negative integer power. See [`power_op`].
    pub fn power(&self, exponent: i32) -> Result<Matrix<T>, MatRustError> {
        power_op(self, exponent)
    }

    /// Determinant of a 2x2 matrix. See [`det_2x2_op`].
    pub fn det_2x2(&self) -> Result<T, MatRustError> {
        det_2x2_op(self)
    }

    /// Determinant of a 3x3 matrix. See [`det_3x3_op`].
    pub fn det_3x3(&self) -> Result<T, MatRustError> {
        det_3x3_op(self)
    }

    /// Inverse of a 2x2 matrix. See [`inverse_2x2_op`].
    pub fn inverse_2x2(&self) -> Result<Matrix<T>, MatRustError> {
        inverse_2x2_op(self)
    }

    /// Sum of the main diagonal. See [`trace_op`].
    pub fn trace(&self) -> Result<T, MatRustError> {
        trace_op(self)
    }

    /// Square root of the sum of squared elements. See [`frobenius_norm_op`].
    pub fn frobenius_norm(&self) -> T {
        frobenius_norm_op(self)
    }

    /// Whether the matrix is diagonal. See [`is_diagonal_op`].
    pub fn is_diagonal(&self) -> bool {
        is_diagonal_op(self)
    }

    /// Whether the matrix is upper triangular. See [`is_upper_triangular_op`].
    pub fn is_upper_triangular(&self) -> bool {
        is_upper_triangular_op(self)
    }

    /// Whether the matrix is lower triangular. See [`is_lower_triangular_op`].
    pub fn is_lower_triangular(&self) -> bool {
        is_lower_triangular_op(self)
    }

    /// Whether the matrix is symmetric. See [`is_symmetric_op`].
    pub fn is_symmetric(&self) -> bool {
        is_symmetric_op(self)
    }
}
