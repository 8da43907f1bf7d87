//! Demonstration driver sequencing every matrix operation with small
//! literal examples, interactive entry included. Piping numbers on stdin
//! feeds the entry section; an exhausted stdin falls back to a built-in
//! matrix so the rest of the demonstration still runs.

use anyhow::Result;
use matrust_console::input::read_matrix;
use matrust_console::render::print_matrix;
use matrust_core::matrix::create::identity;
use matrust_core::Matrix;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    println!("===============================================");
    println!("       MATRIX OPERATIONS DEMONSTRATION");
    println!("===============================================\n");

    // --- Matrix entry ---
    println!("--- Matrix entry ---");
    println!("Enter a 2x2 matrix:");
    let stdin = io::stdin();
    let entered = match read_matrix(&mut stdin.lock(), &mut io::stdout(), 2, 2) {
        Ok(m) => m,
        Err(e) => {
            println!("No usable input ({}), continuing with a built-in matrix.", e);
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?
        }
    };
    println!("Matrix read:");
    print_matrix(&entered);

    // --- Scalar multiplication ---
    println!("\n--- Scalar multiplication ---");
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    println!("Original matrix:");
    print_matrix(&a);
    let scalar = 3.0;
    println!("Matrix multiplied by {}:", scalar);
    print_matrix(&a.scale(scalar));

    // --- Addition ---
    println!("\n--- Addition ---");
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]])?;
    println!("Matrix A:");
    print_matrix(&a);
    println!("Matrix B:");
    print_matrix(&b);
    println!("Sum A + B:");
    print_matrix(&a.add(&b)?);

    // --- Multiplication ---
    println!("\n--- Multiplication ---");
    let c = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let d = Matrix::from_rows(vec![
        vec![7.0, 8.0],
        vec![9.0, 10.0],
        vec![11.0, 12.0],
    ])?;
    println!("Matrix C (2x3):");
    print_matrix(&c);
    println!("Matrix D (3x2):");
    print_matrix(&d);
    println!("Product C x D:");
    print_matrix(&c.matmul(&d)?);

    // --- 2x2 inverse ---
    println!("\n--- 2x2 inverse ---");
    let e = Matrix::from_rows(vec![vec![4.0, 7.0], vec![2.0, 6.0]])?;
    println!("Original matrix:");
    print_matrix(&e);
    let inverse = e.inverse_2x2()?;
    println!("Inverse matrix:");
    print_matrix(&inverse);
    println!("Verification: A x A^(-1) should be the identity:");
    print_matrix(&e.matmul(&inverse)?);

    println!("\nSingular matrix:");
    let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]])?;
    print_matrix(&singular);
    match singular.inverse_2x2() {
        Ok(_) => println!("unexpected: the singular matrix was inverted"),
        Err(err) => println!("Error: {}", err),
    }

    // --- Determinants ---
    println!("\n--- Determinants ---");
    println!("2x2 matrix:");
    print_matrix(&e);
    println!("Determinant: {}", e.det_2x2()?);
    let f = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 10.0],
    ])?;
    println!("3x3 matrix:");
    print_matrix(&f);
    println!("Determinant: {}", f.det_3x3()?);

    // --- Transpose ---
    println!("\n--- Transpose ---");
    let g = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    println!("Original matrix (2x3):");
    print_matrix(&g);
    println!("Transposed matrix (3x2):");
    print_matrix(&g.transpose());

    // --- Diagonal check ---
    println!("\n--- Diagonal check ---");
    let diag = Matrix::from_rows(vec![
        vec![5.0, 0.0, 0.0],
        vec![0.0, 3.0, 0.0],
        vec![0.0, 0.0, 7.0],
    ])?;
    println!("Matrix 1:");
    print_matrix(&diag);
    println!("Diagonal? {}", diag.is_diagonal());
    let not_diag = Matrix::from_rows(vec![
        vec![5.0, 1.0, 0.0],
        vec![0.0, 3.0, 0.0],
        vec![0.0, 0.0, 7.0],
    ])?;
    println!("\nMatrix 2:");
    print_matrix(&not_diag);
    println!("Diagonal? {}", not_diag.is_diagonal());

    // --- Upper triangular check ---
    println!("\n--- Upper triangular check ---");
    let tri = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![0.0, 4.0, 5.0],
        vec![0.0, 0.0, 6.0],
    ])?;
    println!("Matrix 1:");
    print_matrix(&tri);
    println!("Upper triangular? {}", tri.is_upper_triangular());
    let not_tri = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![1.0, 4.0, 5.0],
        vec![0.0, 0.0, 6.0],
    ])?;
    println!("\nMatrix 2:");
    print_matrix(&not_tri);
    println!("Upper triangular? {}", not_tri.is_upper_triangular());

    // --- Trace ---
    println!("\n--- Trace ---");
    let h = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    println!("Matrix:");
    print_matrix(&h);
    println!("Trace (diagonal sum): {}", h.trace()?);

    // --- Identity ---
    println!("\n--- Identity ---");
    println!("4x4 identity matrix:");
    print_matrix(&identity::<f64>(4)?);

    // --- Power ---
    println!("\n--- Power ---");
    println!("Original matrix:");
    print_matrix(&a);
    println!("Matrix raised to the power 3:");
    print_matrix(&a.power(3)?);

    // --- Symmetry check ---
    println!("\n--- Symmetry check ---");
    let sym = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 4.0, 5.0],
        vec![3.0, 5.0, 6.0],
    ])?;
    println!("Matrix:");
    print_matrix(&sym);
    println!("Symmetric? {}", sym.is_symmetric());

    // --- Subtraction ---
    println!("\n--- Subtraction ---");
    println!("Matrix A:");
    print_matrix(&a);
    println!("Matrix B:");
    print_matrix(&b);
    println!("Difference A - B:");
    print_matrix(&a.sub(&b)?);

    // --- Lower triangular check ---
    println!("\n--- Lower triangular check ---");
    let tri_low = Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![2.0, 3.0, 0.0],
        vec![4.0, 5.0, 6.0],
    ])?;
    println!("Matrix:");
    print_matrix(&tri_low);
    println!("Lower triangular? {}", tri_low.is_lower_triangular());

    // --- Frobenius norm ---
    println!("\n--- Frobenius norm ---");
    let norm_m = Matrix::from_rows(vec![vec![3.0, 4.0]])?;
    println!("Matrix:");
    print_matrix(&norm_m);
    println!("Frobenius norm: {}", norm_m.frobenius_norm());

    // --- Precondition errors ---
    println!("\n--- Precondition errors ---");
    match a.add(&c) {
        Ok(_) => println!("unexpected: mismatched shapes were added"),
        Err(err) => println!("Error: {}", err),
    }
    match c.trace() {
        Ok(_) => println!("unexpected: trace of a rectangular matrix"),
        Err(err) => println!("Error: {}", err),
    }

    println!("\n===============================================");
    println!("            END OF DEMONSTRATION");
    println!("===============================================");

    Ok(())
}
