//! Error types for vector construction
//!
//! Only validating construction can fail. Arithmetic on already-built vectors
//! never returns an error; IEEE 754 NaN and infinity propagate instead.

use thiserror::Error;

/// Main error type for csgvec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The input had the wrong shape, the wrong element count, a component
    /// that failed numeric parsing, or a component that is not finite
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Extension of the Result type for vector operations
pub type Result<T> = std::result::Result<T, VectorError>;

/// Helper to build an `InvalidArgument` error from anything printable
pub fn invalid_argument(msg: impl Into<String>) -> VectorError {
    VectorError::InvalidArgument(msg.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = invalid_argument("expected 2 or 3 components, got 4");
        assert_eq!(
            err.to_string(),
            "Invalid argument: expected 2 or 3 components, got 4"
        );
        assert!(matches!(err, VectorError::InvalidArgument(_)));
    }
}
