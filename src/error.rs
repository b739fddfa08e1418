// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for mode enumeration and field evaluation.

use thiserror::Error;

/// Errors reported to callers of the enumeration and evaluation APIs.
///
/// All of these are deterministic precondition violations. Nothing here is
/// transient, so nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModeError {
    /// Negative k, non-positive count, empty selection and similar.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Range mode requires `end > start`.
    #[error("invalid range: end index {end} must be greater than start index {start}")]
    InvalidRange { start: i64, end: i64 },

    /// The requested batch exceeds the configured maximum.
    #[error("range too large: {requested} descriptors requested, at most {max} allowed")]
    RangeTooLarge { requested: u64, max: usize },

    /// The k walk was bounded and ran out before the target position.
    #[error("unreachable target: position {target} not reached with k <= {k_limit}")]
    UnreachableTarget { target: u64, k_limit: u64 },

    /// Configuration could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// A numeric routine failed to converge or produced a non-finite value.
    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type ModeResult<T> = Result<T, ModeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = ModeError::InvalidRange { start: 10, end: 3 };
        assert_eq!(
            err.to_string(),
            "invalid range: end index 3 must be greater than start index 10"
        );

        let err = ModeError::RangeTooLarge { requested: 101, max: 100 };
        assert!(err.to_string().contains("101"));
        assert!(err.to_string().contains("100"));
    }
}
