// src/ops/reduction/mod.rs
// Module for the matrix-to-scalar reductions (trace, Frobenius norm).

pub mod norm;
pub mod trace;

pub use norm::frobenius_norm_op;
pub use trace::trace_op;
