// Declare the main modules of the crate
pub mod matrix;
pub mod ops;
pub mod utils;

// Re-export the Matrix type so it is accessible directly via `matrust_core::Matrix`
pub use matrix::Matrix;
// Re-export the creation functions alongside the type
pub use matrix::create::{full, identity, ones, random, randn, zeros};
// Re-export traits required by public functions/structs
pub use num_traits;
pub use ops::traits::MatNumeric;

pub mod error;
pub use error::MatRustError;
