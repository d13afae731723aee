//! Errors raised by matrix construction, matrix algebra and transform composition

use std::fmt::Display;

/// Everything that can go wrong in this crate.
///
/// Floating-point edge cases (division by zero, overflow, NaN propagation) are
/// *not* errors; they surface as IEEE 754 values in the returned data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// (RaggedRows) A row's length differs from the first row's length
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// (DimensionMismatch) Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// (EmptyPipeline) A transformer was applied with no registered operators
    EmptyPipeline,
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::RaggedRows { row, expected, found } => write!(
                f,
                "(RaggedRows) Row {} has {} elements, expected {}",
                row, found, expected
            ),
            GeometryError::DimensionMismatch { operation, left, right } => write!(
                f,
                "(DimensionMismatch) Cannot {} a {}x{} matrix with a {}x{} matrix",
                operation, left.0, left.1, right.0, right.1
            ),
            GeometryError::EmptyPipeline => {
                write!(f, "(EmptyPipeline) No transformation has been registered")
            },
        }
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, GeometryError>;
