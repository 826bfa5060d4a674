//! Core types: participants, solutions, errors, configuration, RNG.
//!
//! Nothing here performs I/O. The solver and the service layer both build
//! on these types.

pub mod participant;
pub mod solution;
pub mod error;
pub mod config;
pub mod rng;

pub use participant::ParticipantId;
pub use solution::Solution;
pub use error::{Param, SolveError};
pub use config::{ParseStrategyError, SolverConfig, Strategy};
pub use rng::GameRng;
