// src/matrix/traits.rs

use crate::matrix::Matrix;
use crate::ops::traits::MatNumeric;
use std::fmt::{self, Debug};
use std::ops::Index;

// --- Trait Implementations ---

impl<T: MatNumeric> Debug for Matrix<T> {
    /// Formats the Matrix for debugging. Shows the shape and a preview of
    /// the row-major data.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PREVIEW: usize = 8;
        write!(f, "Matrix({}x{}, data=[", self.rows, self.cols)?;
        for (i, v) in self.data.iter().take(PREVIEW).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", v)?;
        }
        if self.data.len() > PREVIEW {
            write!(f, ", ... {} more", self.data.len() - PREVIEW)?;
        }
        write!(f, "])")
    }
}

impl<T: MatNumeric> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Returns a reference to the element at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the position lies outside the matrix. Use [`Matrix::get`]
    /// for a checked read.
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "Index ({}, {}) out of bounds for a {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
