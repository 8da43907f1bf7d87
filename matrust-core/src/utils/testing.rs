use crate::matrix::Matrix;
use approx::abs_diff_eq;

/// Checks if a matrix matches expectations (shape and data within tolerance).
/// Panics if the shape differs or any element differs by more than the
/// tolerance.
pub fn check_matrix_near(
    actual: &Matrix<f64>,
    expected_rows: usize,
    expected_cols: usize,
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(
        actual.shape(),
        (expected_rows, expected_cols),
        "Shape mismatch"
    );

    let actual_data = actual.as_slice();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        if !abs_diff_eq!(*a, *e, epsilon = tolerance) {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                a,
                e,
                (*a - *e).abs(),
                tolerance
            );
        }
    }
}

/// Helper to create a simple f64 matrix for testing purposes.
pub fn create_test_matrix(data: Vec<f64>, rows: usize, cols: usize) -> Matrix<f64> {
    Matrix::new(data, rows, cols).expect("Failed to create test matrix")
}
