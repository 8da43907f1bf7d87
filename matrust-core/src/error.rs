use thiserror::Error;

/// Custom error type for the MatRust library.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing, Clone added
pub enum MatRustError {
    #[error("Matrix creation error: data length {data_len} does not match {rows}x{cols}")]
    CreationError {
        data_len: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid order {order} for identity matrix (must be >= 1)")]
    InvalidOrder { order: usize },

    #[error("Index out of bounds: ({row}, {col}) for a {rows}x{cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension mismatch during operation {operation}: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
        operation: String,
    },

    #[error("Operation {operation} requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        rows: usize,
        cols: usize,
        operation: String,
    },

    #[error("Operation {operation} requires a {expected}x{expected} matrix, got {actual_rows}x{actual_cols}")]
    WrongFixedShape {
        expected: usize,
        actual_rows: usize,
        actual_cols: usize,
        operation: String,
    },

    #[error("Negative exponent {exponent} is not supported for matrix power")]
    NegativeExponent { exponent: i32 },

    #[error("Matrix is singular (determinant {determinant}), cannot invert")]
    Singular { determinant: f64 },
    // Add more specific errors as needed
}
