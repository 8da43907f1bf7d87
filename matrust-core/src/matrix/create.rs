// src/matrix/create.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;

/// Creates a new matrix filled with zeros with the specified dimensions.
pub fn zeros<T: MatNumeric>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix {
        data: vec![T::zero(); rows * cols],
        rows,
        cols,
    }
}

/// Creates a new matrix filled with ones with the specified dimensions.
pub fn ones<T: MatNumeric>(rows: usize, cols: usize) -> Matrix<T> {
    Matrix {
        data: vec![T::one(); rows * cols],
        rows,
        cols,
    }
}

/// Creates a new matrix filled with a specific value with the specified dimensions.
pub fn full<T: MatNumeric>(rows: usize, cols: usize, value: T) -> Matrix<T> {
    Matrix {
        data: vec![value; rows * cols],
        rows,
        cols,
    }
}

/// Creates a new Matrix from a flat row-major `Vec` and dimensions.
/// (Convenience wrapper over `Matrix::new`, kept next to the other constructors.)
pub fn from_vec<T: MatNumeric>(
    data: Vec<T>,
    rows: usize,
    cols: usize,
) -> Result<Matrix<T>, MatRustError> {
    Matrix::new(data, rows, cols)
}

/// Creates the identity matrix of the given order.
///
/// Ones on the main diagonal, zeros elsewhere. The order must be at least 1;
/// order 0 fails with [`MatRustError::InvalidOrder`].
pub fn identity<T: MatNumeric>(order: usize) -> Result<Matrix<T>, MatRustError> {
    if order == 0 {
        return Err(MatRustError::InvalidOrder { order });
    }
    let mut data = vec![T::zero(); order * order];
    for i in 0..order {
        data[i * order + i] = T::one();
    }
    Ok(Matrix {
        data,
        rows: order,
        cols: order,
    })
}

// Note: random and randn produce f64 matrices; callers wanting f32 can
// currently go through `Matrix::new` with their own data.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a matrix of uniform random values in `[0, 1)`.
pub fn random(rows: usize, cols: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..rows * cols).map(|_| rng.gen::<f64>()).collect();
    Matrix { data, rows, cols }
}

/// Creates a matrix of standard-normal random values.
pub fn randn(rows: usize, cols: usize) -> Matrix<f64> {
    let mut rng = rand::thread_rng();
    let data: Vec<f64> = (0..rows * cols)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Matrix { data, rows, cols }
}
