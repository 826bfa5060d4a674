//! # children-game
//!
//! Solver for the counting-out ("Josephus") children game: `n` participants
//! stand in a circle and every k-th remaining one leaves until a single
//! survivor is left. The solver returns the survivor together with the full
//! chronological elimination order.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: `solver::solve` has no I/O, no logging and no shared
//!    state. Concurrent calls need no coordination.
//!
//! 2. **O(n) memory**: circles are flat index arenas built per call and
//!    dropped on return.
//!
//! 3. **Boundary at the edges**: fetching games and reporting results go
//!    through the `GameSource` / `GameSink` traits in `service`.
//!
//! ## Modules
//!
//! - `core`: Participant IDs, solutions, errors, configuration, RNG
//! - `solver`: Elimination loop and circle representations
//! - `service`: Wire records, collaborators and the game driver
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Usage
//!
//! ```
//! use children_game::{solve, ParticipantId, SolveError, Param};
//!
//! let solution = solve(5, 6).unwrap();
//! assert_eq!(solution.survivor, ParticipantId::new(4));
//! assert_eq!(solution.order_raw(), vec![1, 3, 2, 5]);
//!
//! assert_eq!(solve(0, 3), Err(SolveError::InvalidArgument(Param::N)));
//! ```

pub mod core;
pub mod solver;
pub mod service;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ParticipantId, Solution,
    Param, SolveError,
    SolverConfig, Strategy,
    GameRng,
};

pub use crate::solver::{solve, survivor, Solver, Circle, LinkedCircle, IndexedCircle};

pub use crate::service::{
    GameData, GameResult,
    GameSource, GameSink, JsonSource, JsonSink, InMemoryService, RandomGameSource,
    ServiceError, PlayError,
    play, play_all, play_service,
};
