//! # Matrix Operations Module (`ops`)
//!
//! This module serves as the central hub for defining and organizing matrix
//! operations. Operations are categorized into submodules based on their
//! functionality.
//!
//! ## Structure:
//!
//! - **Submodules:** Operations are grouped logically (`arithmetic`, `linalg`,
//!   `reduction`, `structure`).
//! - **`_op` Functions:** Each operation has a core free function (named
//!   `xxx_op`) that validates its preconditions before computing, returning
//!   `Result` where the operation can fail and the plain value where it
//!   cannot. The `Matrix` struct exposes convenience methods that delegate
//!   to these functions.
//! - **Traits (`ops::traits`):** Defines the `MatNumeric` element trait that
//!   bounds the generic kernels.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise operations (add, sub, scalar multiply).
//! - [`linalg`]: Linear algebra (matmul, transpose, power, determinant,
//!   inverse).
//! - [`reduction`]: Matrix-to-scalar reductions (trace, Frobenius norm).
//! - [`structure`]: Structural predicates (diagonal, triangular, symmetric).

pub mod traits;

// Declare operation submodules
pub mod arithmetic;
pub mod linalg;
pub mod reduction;
pub mod structure;
