//! Outcome of a single game.

use serde::{Deserialize, Serialize};

use super::ParticipantId;

/// Survivor and chronological elimination order of a finished game.
///
/// For a game of `n` participants, `order` holds exactly `n - 1` distinct
/// IDs and `survivor` is the one ID from `1..=n` missing from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Last participant left in the circle.
    pub survivor: ParticipantId,

    /// Participants in the order they left the circle.
    pub order: Vec<ParticipantId>,
}

impl Solution {
    /// Solution of a single-participant game.
    #[must_use]
    pub fn lone() -> Self {
        Self {
            survivor: ParticipantId::new(1),
            order: Vec::new(),
        }
    }

    /// Number of participants the game started with.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.order.len() + 1
    }

    /// Elimination order as raw integers.
    #[must_use]
    pub fn order_raw(&self) -> Vec<u32> {
        self.order.iter().map(|p| p.raw()).collect()
    }

    /// Check that the solution is a permutation of `1..=n`.
    ///
    /// Used by tests and by callers that receive solutions from elsewhere.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let n = self.participant_count();
        let mut seen = vec![false; n];
        for p in self.order.iter().chain(std::iter::once(&self.survivor)) {
            let raw = p.raw() as usize;
            if raw == 0 || raw > n || seen[raw - 1] {
                return false;
            }
            seen[raw - 1] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ParticipantId> {
        raw.iter().copied().map(ParticipantId::new).collect()
    }

    #[test]
    fn test_lone() {
        let solution = Solution::lone();
        assert_eq!(solution.survivor, ParticipantId::new(1));
        assert!(solution.order.is_empty());
        assert_eq!(solution.participant_count(), 1);
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_order_raw() {
        let solution = Solution {
            survivor: ParticipantId::new(4),
            order: ids(&[1, 3, 2, 5]),
        };
        assert_eq!(solution.order_raw(), vec![1, 3, 2, 5]);
        assert!(solution.is_consistent());
    }

    #[test]
    fn test_inconsistent_duplicates() {
        let solution = Solution {
            survivor: ParticipantId::new(3),
            order: ids(&[1, 1]),
        };
        assert!(!solution.is_consistent());
    }

    #[test]
    fn test_inconsistent_out_of_range() {
        let solution = Solution {
            survivor: ParticipantId::new(9),
            order: ids(&[1, 2]),
        };
        assert!(!solution.is_consistent());

        let zero = Solution {
            survivor: ParticipantId::new(0),
            order: ids(&[1]),
        };
        assert!(!zero.is_consistent());
    }

    #[test]
    fn test_serialization() {
        let solution = Solution {
            survivor: ParticipantId::new(1),
            order: ids(&[2]),
        };
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, r#"{"survivor":1,"order":[2]}"#);

        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solution);
    }
}
