// matrust-core/src/ops/linalg/inverse.rs

use crate::error::MatRustError;
use crate::matrix::Matrix;
use crate::ops::linalg::determinant::{check_fixed_shape, det_2x2_op};
use crate::ops::traits::MatNumeric;
use log::debug;

/// Inverts a 2x2 matrix via the adjugate formula.
///
/// The determinant comes from [`det_2x2_op`]; a magnitude below the element
/// type's zero tolerance fails with `Singular`. Otherwise the result is
/// `[[d, -b], [-c, a]]` with each entry divided by the determinant. Shapes
/// other than 2x2 fail with `WrongFixedShape`; there is no general-size
/// inverse in this library.
pub fn inverse_2x2_op<T: MatNumeric>(m: &Matrix<T>) -> Result<Matrix<T>, MatRustError> {
    check_fixed_shape(m, 2, "inverse_2x2")?;

    let det = det_2x2_op(m)?;
    if det.abs() < T::zero_tolerance() {
        debug!("inverse_2x2: rejecting singular matrix (det = {:?})", det);
        return Err(MatRustError::Singular {
            determinant: det.to_f64().unwrap_or(f64::NAN),
        });
    }

    let d = m.as_slice();
    let data = vec![d[3] / det, -d[1] / det, -d[2] / det, d[0] / det];
    Matrix::new(data, 2, 2)
}

// --- Tests ---
