// src/matrix/mod.rs

use crate::error::MatRustError;
use crate::ops::traits::MatNumeric;

// --- Implementation modules ---
mod operators;
mod ops_methods;
mod traits;
pub mod create; // Make the create module public

// Re-export creation functions to make them public
pub use create::{from_vec, full, identity, ones, random, randn, zeros};

/// A dense 2-D matrix of floating-point values stored in row-major order.
///
/// `Matrix` owns its element buffer outright as a flat `Vec<T>` of length
/// `rows * cols`; the element at row `i`, column `j` lives at
/// `data[i * cols + j]`. The shape is fixed at construction and operations
/// never mutate their inputs, they borrow and return freshly allocated
/// results.
///
/// Equality compares shape and element values.
#[derive(Clone, PartialEq)]
pub struct Matrix<T: MatNumeric> {
    pub(crate) data: Vec<T>,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
}

// --- Matrix Implementation ---
impl<T: MatNumeric> Matrix<T> {
    /// Creates a new Matrix with the given row-major data and dimensions.
    ///
    /// This is the primary constructor for creating matrices from raw data.
    /// Fails with [`MatRustError::CreationError`] when `data.len()` does not
    /// equal `rows * cols`.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatRustError> {
        if data.len() != rows * cols {
            return Err(MatRustError::CreationError {
                data_len: data.len(),
                rows,
                cols,
            });
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Creates a new Matrix from a vector of rows.
    ///
    /// All rows must have the same length as the first one; a ragged input
    /// fails with [`MatRustError::RaggedRows`]. An empty outer vector yields
    /// the 0x0 matrix.
    pub fn from_rows(rows_vec: Vec<Vec<T>>) -> Result<Self, MatRustError> {
        let rows = rows_vec.len();
        let cols = rows_vec.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in rows_vec.into_iter().enumerate() {
            if row.len() != cols {
                return Err(MatRustError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix { data, rows, cols })
    }

    // Basic accessors. These just read the corresponding field.

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as a `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of elements in the matrix.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    /// Checks whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Checks whether the matrix holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `(row, col)`.
    ///
    /// Fails with [`MatRustError::IndexOutOfBounds`] when the position lies
    /// outside the matrix. For panicking sugar, index with `m[(row, col)]`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatRustError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatRustError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Returns the underlying row-major storage as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns row `row` as a slice.
    pub fn row_slice(&self, row: usize) -> Result<&[T], MatRustError> {
        if row >= self.rows {
            return Err(MatRustError::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let start = row * self.cols;
        Ok(&self.data[start..start + self.cols])
    }
}
