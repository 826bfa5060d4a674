//! Seeded generator of game parameters.

use crate::core::GameRng;

use super::collaborator::GameSource;
use super::data::GameData;
use super::error::{Result, ServiceError};

/// Produces reproducible random games.
///
/// `children_count` is drawn from `1..=max_children` and `eliminate_each`
/// from `1..=max_interval`. IDs count up from 1. The same seed always
/// yields the same sequence of games.
///
/// ```
/// use children_game::service::{GameSource, RandomGameSource};
///
/// let mut a = RandomGameSource::new(7, 100, 10).with_limit(3);
/// let mut b = RandomGameSource::new(7, 100, 10).with_limit(3);
/// assert_eq!(a.fetch().unwrap(), b.fetch().unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct RandomGameSource {
    rng: GameRng,
    max_children: i32,
    max_interval: i32,
    next_id: i64,
    limit: Option<u64>,
    produced: u64,
}

impl RandomGameSource {
    /// Create a generator.
    ///
    /// # Panics
    ///
    /// If either maximum is below 1 or equal to `i32::MAX`.
    pub fn new(seed: u64, max_children: i32, max_interval: i32) -> Self {
        assert!(max_children >= 1, "max_children must be at least 1");
        assert!(max_interval >= 1, "max_interval must be at least 1");
        assert!(max_children < i32::MAX && max_interval < i32::MAX, "maximum out of range");

        Self {
            rng: GameRng::new(seed),
            max_children,
            max_interval,
            next_id: 1,
            limit: None,
            produced: 0,
        }
    }

    /// Stop after `count` games.
    #[must_use]
    pub fn with_limit(mut self, count: u64) -> Self {
        self.limit = Some(count);
        self
    }

    /// Games produced so far.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced
    }
}

impl GameSource for RandomGameSource {
    fn fetch(&mut self) -> Result<GameData> {
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return Err(ServiceError::Exhausted);
        }

        let children_count = self.rng.gen_range(1..self.max_children + 1);
        let eliminate_each = self.rng.gen_range(1..self.max_interval + 1);
        let data = GameData::new(self.next_id, children_count, eliminate_each);

        self.next_id += 1;
        self.produced += 1;
        Ok(data)
    }
}
