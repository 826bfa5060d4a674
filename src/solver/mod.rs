//! The counting-out solver.
//!
//! ## Overview
//!
//! `n` participants stand in a circle, numbered clockwise from 1. Starting
//! at participant 1, count `k` participants clockwise; the k-th leaves the
//! circle and counting resumes with the participant right after them. The
//! last one standing is the survivor.
//!
//! Each round skips `(k - 1) mod remaining` participants, always measured
//! against the participants still present. Two circle representations are
//! available:
//!
//! - [`LinkedCircle`]: index-linked list, O(min(skip, remaining - skip)) per
//!   round. Fast for small `k`.
//! - [`IndexedCircle`]: Fenwick tree, O(log n) per round for any `k`.
//!
//! Both use O(n) memory and produce identical results.
//!
//! ## Usage
//!
//! ```
//! use children_game::solver::{solve, survivor};
//! use children_game::core::ParticipantId;
//!
//! let solution = solve(10, 2).unwrap();
//! assert_eq!(solution.survivor, ParticipantId::new(5));
//! assert_eq!(solution.order_raw(), vec![2, 4, 6, 8, 10, 3, 7, 1, 9]);
//!
//! // Survivor only, O(1) memory.
//! assert_eq!(survivor(10, 2).unwrap(), ParticipantId::new(5));
//! ```

pub mod circle;
pub mod indexed;
pub mod linked;

pub use circle::{run, Circle};
pub use indexed::IndexedCircle;
pub use linked::LinkedCircle;

use crate::core::error::{validate, Result};
use crate::core::{ParticipantId, Solution, SolverConfig, Strategy};

/// Solve a game with the default configuration.
///
/// # Errors
///
/// `SolveError::InvalidArgument` if `n <= 0` (reported first) or `k <= 0`.
pub fn solve(n: i32, k: i32) -> Result<Solution> {
    Solver::default().solve(n, k)
}

/// Compute only the survivor of a game.
///
/// Uses the recurrence `J(m) = (J(m - 1) + k) mod m`: O(n) time, O(1)
/// memory. Always agrees with `solve(n, k)?.survivor`.
///
/// # Errors
///
/// Same validation as [`solve`].
pub fn survivor(n: i32, k: i32) -> Result<ParticipantId> {
    let (n, k) = validate(n, k)?;
    let k = u64::from(k);

    let mut slot: u64 = 0;
    for m in 2..=u64::from(n) {
        slot = (slot + k) % m;
    }

    Ok(ParticipantId::from_slot(slot as usize))
}

/// Configured solver.
///
/// Holds configuration only. Every call builds its own circle, so one
/// `Solver` can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Strategy that will be used for interval `k`.
    #[must_use]
    pub fn strategy_for(&self, k: u32) -> Strategy {
        self.config.resolve(k)
    }

    /// Solve a game.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidArgument` if `n <= 0` (reported first) or `k <= 0`.
    pub fn solve(&self, n: i32, k: i32) -> Result<Solution> {
        let (n, k) = validate(n, k)?;

        let solution = match self.strategy_for(k) {
            Strategy::Linked => run::<LinkedCircle>(n, k),
            Strategy::Indexed => run::<IndexedCircle>(n, k),
            Strategy::Auto => unreachable!("SolverConfig::resolve returned Auto"),
        };
        Ok(solution)
    }
}
