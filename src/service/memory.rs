//! In-memory service used by tests and embedding callers.

use std::collections::VecDeque;

use super::collaborator::{GameSink, GameSource};
use super::data::{GameData, GameResult};
use super::error::{Result, ServiceError};

/// Queue of pending games plus a log of submitted results.
///
/// Implements both [`GameSource`] and [`GameSink`]. Submissions can be
/// switched to fail with a status code to exercise error paths.
#[derive(Clone, Debug, Default)]
pub struct InMemoryService {
    pending: VecDeque<GameData>,
    submitted: Vec<GameResult>,
    rejection: Option<(u16, String)>,
}

impl InMemoryService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with the given games queued.
    #[must_use]
    pub fn with_games(games: impl IntoIterator<Item = GameData>) -> Self {
        Self {
            pending: games.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Make every following submission fail.
    pub fn reject_submissions(&mut self, status: u16, reason: impl Into<String>) {
        self.rejection = Some((status, reason.into()));
    }

    /// Games not yet fetched.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Results accepted so far, in submission order.
    #[must_use]
    pub fn submitted(&self) -> &[GameResult] {
        &self.submitted
    }

    /// Submitted result for a game ID, if any.
    #[must_use]
    pub fn result_for(&self, id: i64) -> Option<&GameResult> {
        self.submitted.iter().find(|r| r.id == id)
    }
}

impl GameSource for InMemoryService {
    fn fetch(&mut self) -> Result<GameData> {
        self.pending.pop_front().ok_or(ServiceError::Exhausted)
    }
}

impl GameSink for InMemoryService {
    fn submit(&mut self, result: &GameResult) -> Result<()> {
        if let Some((status, reason)) = &self.rejection {
            return Err(ServiceError::Rejected {
                status: *status,
                reason: reason.clone(),
            });
        }
        self.submitted.push(result.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParticipantId;

    fn result(id: i64) -> GameResult {
        GameResult {
            id,
            last_child: ParticipantId::new(1),
            order_of_elimination: Vec::new(),
        }
    }

    #[test]
    fn test_fetch_fifo() {
        let mut service = InMemoryService::with_games([GameData::new(1, 2, 3), GameData::new(2, 4, 5)]);
        assert_eq!(service.pending(), 2);

        assert_eq!(service.fetch().unwrap().id, 1);
        assert_eq!(service.fetch().unwrap().id, 2);
        assert!(matches!(service.fetch(), Err(ServiceError::Exhausted)));
    }

    #[test]
    fn test_submit_records() {
        let mut service = InMemoryService::new();
        service.submit(&result(5)).unwrap();

        assert_eq!(service.submitted().len(), 1);
        assert!(service.result_for(5).is_some());
        assert!(service.result_for(6).is_none());
    }

    #[test]
    fn test_rejection() {
        let mut service = InMemoryService::new();
        service.reject_submissions(500, "Internal Server Error");

        let err = service.submit(&result(1)).unwrap_err();
        assert!(matches!(err, ServiceError::Rejected { status: 500, .. }));
        assert!(service.submitted().is_empty());
    }
}
