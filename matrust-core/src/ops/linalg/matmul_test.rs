// matrust-core/src/ops/linalg/matmul_test.rs

use crate::error::MatRustError;
use crate::matrix::create::{identity, random};
use crate::ops::linalg::matmul_op;
use crate::utils::testing::{check_matrix_near, create_test_matrix};

#[test]
fn test_matmul_square() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = create_test_matrix(vec![5.0, 6.0, 7.0, 8.0], 2, 2);

    let result = matmul_op(&a, &b).unwrap();
    check_matrix_near(&result, 2, 2, &[19.0, 22.0, 43.0, 50.0], 1e-12);
}

#[test]
fn test_matmul_rectangular() {
    // (2x3) @ (3x2) -> (2x2)
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    let b = create_test_matrix(vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0], 3, 2);

    let result = matmul_op(&a, &b).unwrap();
    check_matrix_near(&result, 2, 2, &[58.0, 64.0, 139.0, 154.0], 1e-12);
}

#[test]
fn test_matmul_inner_dimension_mismatch() {
    let a = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
    let b = create_test_matrix(vec![1.0, 2.0, 3.0], 3, 1);

    let result = matmul_op(&a, &b);
    assert!(result.is_err());
    match result.err().unwrap() {
        MatRustError::DimensionMismatch {
            left,
            right,
            operation,
        } => {
            assert_eq!(left, (2, 2));
            assert_eq!(right, (3, 1));
            assert_eq!(operation, "matmul");
        }
        _ => panic!("Incorrect error type returned"),
    }
}

#[test]
fn test_matmul_identity_neutral() {
    let a = random(3, 5);
    let left = identity::<f64>(3).unwrap();
    let right = identity::<f64>(5).unwrap();

    let ia = matmul_op(&left, &a).unwrap();
    let ai = matmul_op(&a, &right).unwrap();
    check_matrix_near(&ia, 3, 5, a.as_slice(), 1e-12);
    check_matrix_near(&ai, 3, 5, a.as_slice(), 1e-12);
}

#[test]
fn test_matmul_zero_inner_dimension() {
    // (2x0) @ (0x3) -> (2x3) of zeros: empty accumulation sums.
    let a = create_test_matrix(vec![], 2, 0);
    let b = create_test_matrix(vec![], 0, 3);

    let result = matmul_op(&a, &b).unwrap();
    check_matrix_near(&result, 2, 3, &[0.0; 6], 1e-12);
}

#[test]
fn test_matmul_zero_outer_dimension() {
    let a = create_test_matrix(vec![], 0, 3);
    let b = create_test_matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2);

    let result = matmul_op(&a, &b).unwrap();
    assert_eq!(result.shape(), (0, 2));
    assert!(result.is_empty());
}
