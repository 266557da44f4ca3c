//! Error types for matrix and vector operations.
//!
//! This module provides a unified error type [`LinalgError`] covering the
//! three failure modes of the crate: malformed values, out-of-bound indices,
//! and operations applied to shapes they do not support.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidValue`](LinalgError::InvalidValue) | Malformed construction arguments, bad slice bounds, non-vector casts |
//! | [`OutOfRange`](LinalgError::OutOfRange) | An index (flat or per-axis) outside its valid bound |
//! | [`ShapeMismatch`](LinalgError::ShapeMismatch) | An operation invoked on an unsupported shape |
//!
//! Every error is raised synchronously at the point the precondition is
//! violated; in-place operations validate everything before writing a single
//! element, so a failed call never leaves the receiver partially modified.
//!
//! # Usage
//!
//! Most fallible functions return [`LinalgResult<T>`], which is
//! `Result<T, LinalgError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use linalg_core::{LinalgError, LinalgResult};
//!
//! fn checked_axis(len: usize, index: usize) -> LinalgResult<usize> {
//!     if index >= len {
//!         return Err(LinalgError::out_of_range(
//!             "checked_axis",
//!             &format!("index {} outside [0, {})", index, len),
//!         ));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(checked_axis(3, 5).is_err());
//! ```

use thiserror::Error;

/// Unified error type for matrix and vector operations.
///
/// Use the constructor methods ([`invalid_value`](Self::invalid_value),
/// [`out_of_range`](Self::out_of_range),
/// [`shape_mismatch`](Self::shape_mismatch)) for consistent error creation.
#[derive(Error, Debug)]
pub enum LinalgError {
    /// A malformed argument: empty or zero-length shape, mismatched data
    /// length, bad slice bounds, zero step, or casting a non-vector matrix.
    #[error("Invalid value in {operation}: {message}")]
    InvalidValue { operation: String, message: String },

    /// An index outside the valid bound for its axis or buffer.
    #[error("Out of range in {operation}: {message}")]
    OutOfRange { operation: String, message: String },

    /// An operation invoked on a shape it does not support.
    #[error("Shape mismatch in {operation}: expected {expected}, found {found}")]
    ShapeMismatch {
        operation: String,
        expected: String,
        found: String,
    },
}

/// Convenience alias for `Result<T, LinalgError>`.
pub type LinalgResult<T> = Result<T, LinalgError>;

impl LinalgError {
    /// Creates an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid_value(operation: &str, message: &str) -> Self {
        Self::InvalidValue {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(operation: &str, message: &str) -> Self {
        Self::OutOfRange {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }

    /// Creates a [`ShapeMismatch`](Self::ShapeMismatch) error.
    pub fn shape_mismatch(operation: &str, expected: &str, found: &str) -> Self {
        Self::ShapeMismatch {
            operation: operation.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_error() {
        let err = LinalgError::invalid_value("Matrix::new", "shape must have at least one axis");
        assert_eq!(
            err.to_string(),
            "Invalid value in Matrix::new: shape must have at least one axis"
        );
    }

    #[test]
    fn test_out_of_range_error() {
        let err = LinalgError::out_of_range("Matrix::get", "index 5 outside [-3, 3) on axis 0");
        assert!(err.to_string().contains("Out of range"));
        assert!(err.to_string().contains("axis 0"));
    }

    #[test]
    fn test_shape_mismatch_error() {
        let err = LinalgError::shape_mismatch("Matrix::transpose", "a 2D matrix", "shape [2, 2, 2]");
        assert!(err
            .to_string()
            .contains("expected a 2D matrix, found shape [2, 2, 2]"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<LinalgError>();
        _assert_sync::<LinalgError>();
    }
}
