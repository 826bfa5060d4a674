//! Wire records exchanged with the game service.
//!
//! Field names and order match the service's JSON:
//!
//! ```json
//! {"id": 7, "children_count": 5, "eliminate_each": 6}
//! {"id": 7, "last_child": 4, "order_of_elimination": [1, 3, 2, 5]}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{ParticipantId, Solution};

/// Game parameters supplied by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// Game ID.
    pub id: i64,

    /// Number of participants (n).
    pub children_count: i32,

    /// Elimination interval (k).
    pub eliminate_each: i32,
}

impl GameData {
    /// Create game parameters.
    #[must_use]
    pub fn new(id: i64, children_count: i32, eliminate_each: i32) -> Self {
        Self {
            id,
            children_count,
            eliminate_each,
        }
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode as a single-line JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Game outcome reported back to the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Game ID, copied from the matching `GameData`.
    pub id: i64,

    /// Survivor.
    pub last_child: ParticipantId,

    /// Eliminated participants, first to last.
    pub order_of_elimination: Vec<ParticipantId>,
}

impl GameResult {
    /// Build the report for game `id` from a solved game.
    #[must_use]
    pub fn from_solution(id: i64, solution: &Solution) -> Self {
        Self {
            id,
            last_child: solution.survivor,
            order_of_elimination: solution.order.clone(),
        }
    }

    /// Parse from a JSON document.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Encode as a single-line JSON document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<GameResult> for Solution {
    fn from(result: GameResult) -> Self {
        Solution {
            survivor: result.last_child,
            order: result.order_of_elimination,
        }
    }
}
