// matrust-console/src/render.rs

use matrust_core::Matrix;

/// Formats a matrix with each element right-aligned in an 8-character field
/// with 2 decimal digits, one `[ ... ]`-wrapped row per line.
pub fn format_matrix(m: &Matrix<f64>) -> String {
    let mut out = String::new();
    for i in 0..m.rows() {
        out.push_str("[ ");
        for j in 0..m.cols() {
            out.push_str(&format!("{:8.2} ", m[(i, j)]));
        }
        out.push_str("]\n");
    }
    out
}

/// Prints a matrix to stdout in the [`format_matrix`] layout.
pub fn print_matrix(m: &Matrix<f64>) {
    print!("{}", format_matrix(m));
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cells_are_eight_wide() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.5], vec![-3.0, 40.0]]).unwrap();
        let rendered = format_matrix(&m);
        assert_eq!(rendered, "[     1.00     2.50 ]\n[    -3.00    40.00 ]\n");
    }

    #[test]
    fn test_format_wide_value_overflows_field() {
        // Values wider than the field push the row out instead of truncating.
        let m = Matrix::from_rows(vec![vec![123456789.5]]).unwrap();
        assert_eq!(format_matrix(&m), "[ 123456789.50 ]\n");
    }

    #[test]
    fn test_format_empty_matrix() {
        let m = Matrix::<f64>::from_rows(vec![]).unwrap();
        assert_eq!(format_matrix(&m), "");
    }

    #[test]
    fn test_format_zero_cols() {
        let m = Matrix::<f64>::new(vec![], 2, 0).unwrap();
        assert_eq!(format_matrix(&m), "[ ]\n[ ]\n");
    }
}
