// src/ops/structure/mod.rs
// Module for the structural predicates. These return plain `bool`: a
// non-square matrix simply does not have the property, it is not an error.

pub mod diagonal;
pub mod symmetric;
pub mod triangular;

pub use diagonal::is_diagonal_op;
pub use symmetric::is_symmetric_op;
pub use triangular::{is_lower_triangular_op, is_upper_triangular_op};
