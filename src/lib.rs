//! matvec: dense row-major linear-algebra value types.
//!
//! This crate provides [`Vector`] and [`Matrix`], small owned containers
//! supporting elementwise arithmetic, scalar multiplication, dot products,
//! matrix-vector and matrix-matrix products, and transposition. Operand
//! shapes are validated before anything is computed or mutated, and
//! violations are reported through [`MathError`]; operator sugar on
//! references panics instead, for callers that have already checked shapes.
pub mod error;
pub mod matrix;
pub mod vector;

pub use error::MathError;
pub use matrix::Matrix;
pub use vector::Vector;
