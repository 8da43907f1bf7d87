//! Verifies the classic matrix identities end to end on random inputs:
//! commutative addition, the transpose involution, neutral identity
//! factors, inverse products, powers as repeated multiplication, and
//! symmetry built from transposes. Each section panics on the first
//! mismatch, so a silent run is a passing run.

use matrust_core::matrix::create::{identity, random};
use matrust_core::ops::linalg::matmul_op;
use matrust_core::utils::testing::check_matrix_near;
use matrust_core::MatRustError;

fn main() -> Result<(), MatRustError> {
    println!("--- Addition commutes ---");
    let a = random(3, 4);
    let b = random(3, 4);
    let ab = a.add(&b)?;
    let ba = b.add(&a)?;
    check_matrix_near(&ab, 3, 4, ba.as_slice(), 1e-12);
    println!("a + b == b + a on a random 3x4 pair");

    println!("--- Transpose is an involution ---");
    let m = random(5, 2);
    let back = m.transpose().transpose();
    check_matrix_near(&back, 5, 2, m.as_slice(), 1e-12);
    println!("transpose(transpose(m)) == m on a random 5x2 matrix");

    println!("--- Identity is neutral for multiplication ---");
    let c = random(3, 5);
    let left = matmul_op(&identity::<f64>(3)?, &c)?;
    let right = matmul_op(&c, &identity::<f64>(5)?)?;
    check_matrix_near(&left, 3, 5, c.as_slice(), 1e-12);
    check_matrix_near(&right, 3, 5, c.as_slice(), 1e-12);
    println!("I @ c == c and c @ I == c on a random 3x5 matrix");

    println!("--- Inverse multiplies back to the identity ---");
    let m = matrust_core::Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;
    let inv = m.inverse_2x2()?;
    check_matrix_near(&inv, 2, 2, &[0.6, -0.7, -0.2, 0.4], 1e-12);
    let product = m.matmul(&inv)?;
    check_matrix_near(&product, 2, 2, identity::<f64>(2)?.as_slice(), 1e-9);
    println!("m @ inverse(m) == I for [[4, 7], [2, 6]]");

    println!("--- Powers are repeated multiplication ---");
    let s = random(3, 3);
    check_matrix_near(&s.power(0)?, 3, 3, identity::<f64>(3)?.as_slice(), 1e-12);
    check_matrix_near(&s.power(1)?, 3, 3, s.as_slice(), 1e-12);
    let cubed = matmul_op(&matmul_op(&s, &s)?, &s)?;
    check_matrix_near(&s.power(3)?, 3, 3, cubed.as_slice(), 1e-9);
    println!("s^0 == I, s^1 == s, s^3 == s @ s @ s on a random 3x3 matrix");

    println!("--- A + A^T is symmetric ---");
    let a = random(4, 4);
    let sum = a.add(&a.transpose())?;
    assert!(sum.is_symmetric());
    println!("a + transpose(a) is symmetric on a random 4x4 matrix");

    println!("\nAll identities verified.");
    Ok(())
}
