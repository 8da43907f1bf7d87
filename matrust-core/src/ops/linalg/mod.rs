// src/ops/linalg/mod.rs
// Module for the linear-algebra operations (matmul, transpose, power,
// determinant, inverse).

pub mod determinant;
pub mod inverse;
pub mod matmul;
pub mod power;
pub mod transpose;

pub use determinant::{det_2x2_op, det_3x3_op};
pub use inverse::inverse_2x2_op;
pub use matmul::matmul_op;
pub use power::power_op;
pub use transpose::transpose_op;
