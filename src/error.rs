use std::error::Error;
use std::fmt;

/// Error type for operations on incompatible shapes or indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    LengthMismatch { expected: usize, found: usize },
    RaggedRows { row: usize, expected: usize, found: usize },
    ShapeMismatch { left: (usize, usize), right: (usize, usize) },
    IndexOutOfBounds { index: usize, len: usize },
    EmptyMatrix,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MathError::LengthMismatch { expected, found } => write!(
                f,
                "operands must have equal lengths (expected {}, found {})",
                expected, found
            ),
            MathError::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {} has length {}, expected {}", row, found, expected),
            MathError::ShapeMismatch { left, right } => write!(
                f,
                "incompatible matrix shapes {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
            MathError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            MathError::EmptyMatrix => {
                write!(f, "matrix must have at least one row and one column")
            }
        }
    }
}

impl Error for MathError {}
