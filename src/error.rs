//! Error types for matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for matriz operations.
///
/// Every precondition violation is reported synchronously at the call that
/// violated it, with enough context to reconstruct which precondition failed.
/// Nothing is retried or recovered internally; the caller decides.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "2x2".to_string(),
///     actual: "3x3".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrizError {
    /// Non-positive row or column count supplied to construction.
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Backing storage for the element buffer could not be obtained.
    AllocationFailure {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },

    /// Addition operands' shapes differ.
    DimensionMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// Multiplication operands' inner dimensions differ.
    IncompatibleShapes {
        /// Shape of the left operand
        left: (usize, usize),
        /// Shape of the right operand
        right: (usize, usize),
    },

    /// Array-import given an absent or too-short data buffer.
    NullData {
        /// Values required by the requested shape
        needed: usize,
        /// Values actually supplied
        got: usize,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::InvalidDimensions { rows, cols } => {
                write!(f, "Matrix dimensions must be positive: got {rows}x{cols}")
            }
            MatrizError::AllocationFailure { rows, cols } => {
                write!(f, "Failed to allocate storage for a {rows}x{cols} matrix")
            }
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::IncompatibleShapes { left, right } => {
                write!(
                    f,
                    "Incompatible shapes for multiplication: {}x{} * {}x{} (columns of left must equal rows of right)",
                    left.0, left.1, right.0, right.1
                )
            }
            MatrizError::NullData { needed, got } => {
                write!(
                    f,
                    "Matrix data buffer is absent or too short: needed {needed} values, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for MatrizError {}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MatrizError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let err = MatrizError::InvalidDimensions { rows: 0, cols: 5 };
        let msg = err.to_string();
        assert!(msg.contains("must be positive"));
        assert!(msg.contains("0x5"));
    }

    #[test]
    fn test_allocation_failure_display() {
        let err = MatrizError::AllocationFailure {
            rows: usize::MAX,
            cols: 2,
        };
        assert!(err.to_string().contains("Failed to allocate"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "2x2".to_string(),
            actual: "3x3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("2x2"));
        assert!(err.to_string().contains("3x3"));
    }

    #[test]
    fn test_incompatible_shapes_display() {
        let err = MatrizError::IncompatibleShapes {
            left: (2, 3),
            right: (2, 2),
        };
        let msg = err.to_string();
        assert!(msg.contains("Incompatible shapes"));
        assert!(msg.contains("2x3"));
        assert!(msg.contains("2x2"));
    }

    #[test]
    fn test_null_data_display() {
        let err = MatrizError::NullData { needed: 6, got: 0 };
        let msg = err.to_string();
        assert!(msg.contains("absent or too short"));
        assert!(msg.contains("needed 6"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::NullData { needed: 6, got: 0 };
        let text = err.to_string();
        assert!(err == text.as_str());
    }

    #[test]
    fn test_error_kind_distinguishable() {
        let a = MatrizError::InvalidDimensions { rows: 0, cols: 1 };
        let b = MatrizError::AllocationFailure { rows: 0, cols: 1 };
        assert_ne!(a, b);
        assert!(matches!(a, MatrizError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<MatrizError>();
        assert_sync::<MatrizError>();
    }
}
