//! Service boundary error types.
//!
//! Transport and encoding failures live here and never reach the solver.
//! [`PlayError`] combines them with solver rejections for the driver.

use std::io;

use thiserror::Error;

use crate::core::SolveError;

/// Failure fetching game data or submitting results.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading or writing the underlying stream failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source has no more games.
    #[error("no more games")]
    Exhausted,

    /// The service refused a submission.
    #[error("rejected with status {status}: {reason}")]
    Rejected {
        /// Status code returned by the service.
        status: u16,
        /// Reason phrase.
        reason: String,
    },
}

/// Failure playing one game end to end.
#[derive(Debug, Error)]
pub enum PlayError {
    /// Fetch or submit failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The fetched parameters were invalid. Nothing was submitted.
    #[error("game {id}: {source}")]
    Solve {
        /// Game ID from the fetched data.
        id: i64,
        #[source]
        source: SolveError,
    },
}

impl PlayError {
    /// True when the source ran out of games.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, PlayError::Service(ServiceError::Exhausted))
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Param;

    #[test]
    fn test_messages() {
        assert_eq!(ServiceError::Exhausted.to_string(), "no more games");

        let rejected = ServiceError::Rejected {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(rejected.to_string(), "rejected with status 503: Service Unavailable");

        let solve = PlayError::Solve {
            id: 9,
            source: SolveError::InvalidArgument(Param::N),
        };
        assert_eq!(solve.to_string(), "game 9: invalid argument: n");
    }

    #[test]
    fn test_is_exhausted() {
        assert!(PlayError::from(ServiceError::Exhausted).is_exhausted());

        let io = ServiceError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!PlayError::from(io).is_exhausted());
    }
}
