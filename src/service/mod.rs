//! Service boundary: wire records, collaborators and the game driver.
//!
//! The solver never sees any of this. Games arrive through a
//! [`GameSource`], results leave through a [`GameSink`], and [`play`]
//! connects the two around a [`Solver`](crate::solver::Solver).
//!
//! ## Usage
//!
//! ```
//! use children_game::service::{play_service, GameData, InMemoryService};
//! use children_game::solver::Solver;
//!
//! let mut service = InMemoryService::with_games([GameData::new(1, 5, 6)]);
//! let result = play_service(&mut service, &Solver::default()).unwrap();
//!
//! assert_eq!(
//!     result.to_json().unwrap(),
//!     r#"{"id":1,"last_child":4,"order_of_elimination":[1,3,2,5]}"#
//! );
//! ```

pub mod collaborator;
pub mod data;
pub mod error;
pub mod memory;
pub mod play;
pub mod random;

pub use collaborator::{GameSink, GameSource, JsonSink, JsonSource};
pub use data::{GameData, GameResult};
pub use error::{PlayError, ServiceError};
pub use memory::InMemoryService;
pub use play::{play, play_all, play_service, solve_game};
pub use random::RandomGameSource;
