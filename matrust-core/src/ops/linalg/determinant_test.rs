// matrust-core/src/ops/linalg/determinant_test.rs

use crate::error::MatRustError;
use crate::ops::linalg::{det_2x2_op, det_3x3_op};
use crate::utils::testing::create_test_matrix;
use approx::assert_relative_eq;

#[test]
fn test_det_2x2_values() {
    let m = create_test_matrix(vec![4.0, 7.0, 2.0, 6.0], 2, 2);
    assert_relative_eq!(det_2x2_op(&m).unwrap(), 10.0, epsilon = 1e-12);

    let n = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    assert_relative_eq!(det_2x2_op(&n).unwrap(), -2.0, epsilon = 1e-12);
}

#[test]
fn test_det_2x2_singular_matrix_is_zero() {
    let m = create_test_matrix(vec![1.0, 2.0, 2.0, 4.0], 2, 2);
    assert_relative_eq!(det_2x2_op(&m).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_det_2x2_wrong_shape() {
    let m = create_test_matrix(vec![1.0; 9], 3, 3);
    let result = det_2x2_op(&m);
    assert!(result.is_err());
    match result.err().unwrap() {
        MatRustError::WrongFixedShape {
            expected,
            actual_rows,
            actual_cols,
            operation,
        } => {
            assert_eq!(expected, 2);
            assert_eq!((actual_rows, actual_cols), (3, 3));
            assert_eq!(operation, "det_2x2");
        }
        _ => panic!("Incorrect error type returned"),
    }
}

#[test]
fn test_det_3x3_values() {
    let m = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0], 3, 3);
    assert_relative_eq!(det_3x3_op(&m).unwrap(), -3.0, epsilon = 1e-12);
}

#[test]
fn test_det_3x3_identity_is_one() {
    let m = create_test_matrix(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0], 3, 3);
    assert_relative_eq!(det_3x3_op(&m).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_det_3x3_linearly_dependent_rows() {
    // Third row is the sum of the first two.
    let m = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 5.0, 7.0, 9.0], 3, 3);
    assert_relative_eq!(det_3x3_op(&m).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_det_3x3_wrong_shape() {
    let m = create_test_matrix(vec![1.0; 4], 2, 2);
    let result = det_3x3_op(&m);
    assert!(result.is_err());
    match result.err().unwrap() {
        MatRustError::WrongFixedShape {
            expected,
            actual_rows,
            actual_cols,
            operation,
        } => {
            assert_eq!(expected, 3);
            assert_eq!((actual_rows, actual_cols), (2, 2));
            assert_eq!(operation, "det_3x3");
        }
        _ => panic!("Incorrect error type returned"),
    }
}

#[test]
fn test_det_rectangular_rejected() {
    let m = create_test_matrix(vec![1.0; 6], 2, 3);
    assert!(det_2x2_op(&m).is_err());
    assert!(det_3x3_op(&m).is_err());
}
