//! Solver error types.
//!
//! The solver has exactly one failure mode: a non-positive game parameter.
//! Validation happens before any work is done, so a failed call never
//! produces a partial elimination order.

use std::fmt;

use thiserror::Error;

/// Game parameter that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    /// Number of participants (`children_count`).
    N,
    /// Elimination interval (`eliminate_each`).
    K,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::N => f.write_str("n"),
            Param::K => f.write_str("k"),
        }
    }
}

/// Errors returned by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A parameter was zero or negative.
    #[error("invalid argument: {0}")]
    InvalidArgument(Param),
}

impl SolveError {
    /// The parameter that was rejected.
    #[must_use]
    pub fn param(&self) -> Param {
        match self {
            SolveError::InvalidArgument(param) => *param,
        }
    }
}

pub type Result<T> = std::result::Result<T, SolveError>;

/// Validate `(n, k)` and convert them to unsigned counts.
///
/// `n` is checked first.
pub(crate) fn validate(n: i32, k: i32) -> Result<(u32, u32)> {
    if n <= 0 {
        return Err(SolveError::InvalidArgument(Param::N));
    }
    if k <= 0 {
        return Err(SolveError::InvalidArgument(Param::K));
    }
    Ok((n as u32, k as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive() {
        assert_eq!(validate(1, 1), Ok((1, 1)));
        assert_eq!(validate(i32::MAX, i32::MAX), Ok((i32::MAX as u32, i32::MAX as u32)));
    }

    #[test]
    fn test_validate_rejects_n_first() {
        assert_eq!(validate(0, 0), Err(SolveError::InvalidArgument(Param::N)));
        assert_eq!(validate(-3, 5), Err(SolveError::InvalidArgument(Param::N)));
    }

    #[test]
    fn test_validate_rejects_k() {
        assert_eq!(validate(5, 0), Err(SolveError::InvalidArgument(Param::K)));
        assert_eq!(validate(5, -1), Err(SolveError::InvalidArgument(Param::K)));
    }

    #[test]
    fn test_error_message() {
        let err = SolveError::InvalidArgument(Param::K);
        assert_eq!(err.to_string(), "invalid argument: k");
        assert_eq!(err.param(), Param::K);
    }
}
