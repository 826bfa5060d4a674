//! Solver configuration.
//!
//! The elimination order is fully determined by `(n, k)`; configuration only
//! picks which circle representation does the work. Every strategy returns
//! the same `Solution`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Circle representation used by the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Pick per call: `Linked` for small intervals, `Indexed` otherwise.
    #[default]
    Auto,
    /// Index-linked circular list. Each round walks at most half of the
    /// remaining circle, so cost grows with `k`.
    Linked,
    /// Fenwick tree with order-statistic lookup. O(log n) per round
    /// regardless of `k`.
    Indexed,
}

impl Strategy {
    /// Lowercase name, matching the serde representation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Auto => "auto",
            Strategy::Linked => "linked",
            Strategy::Indexed => "indexed",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a strategy name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected auto, linked or indexed)")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Strategy::Auto),
            "linked" => Ok(Strategy::Linked),
            "indexed" => Ok(Strategy::Indexed),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Configuration for [`Solver`](crate::solver::Solver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Circle representation.
    pub strategy: Strategy,

    /// Largest `k` for which `Strategy::Auto` uses the linked circle.
    ///
    /// Above this the per-round walk outgrows the O(log n) tree lookup.
    pub linked_interval_limit: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            linked_interval_limit: 64,
        }
    }
}

impl SolverConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the circle representation.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the `Auto` switch-over interval.
    #[must_use]
    pub fn with_linked_interval_limit(mut self, limit: u32) -> Self {
        self.linked_interval_limit = limit;
        self
    }

    /// Build a config from a strategy name and switch-over interval.
    ///
    /// # Errors
    ///
    /// `ParseStrategyError` if `strategy` is not `auto`, `linked` or `indexed`.
    pub fn from_name(strategy: &str, linked_interval_limit: u32) -> Result<Self, ParseStrategyError> {
        Ok(Self::new()
            .with_strategy(strategy.parse()?)
            .with_linked_interval_limit(linked_interval_limit))
    }

    /// Resolve `Auto` into a concrete strategy for interval `k`.
    #[must_use]
    pub fn resolve(&self, k: u32) -> Strategy {
        match self.strategy {
            Strategy::Auto if k <= self.linked_interval_limit => Strategy::Linked,
            Strategy::Auto => Strategy::Indexed,
            concrete => concrete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy, Strategy::Auto);
        assert_eq!(config.linked_interval_limit, 64);
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_strategy(Strategy::Indexed)
            .with_linked_interval_limit(8);

        assert_eq!(config.strategy, Strategy::Indexed);
        assert_eq!(config.linked_interval_limit, 8);
    }

    #[test]
    fn test_resolve_auto() {
        let config = SolverConfig::new().with_linked_interval_limit(10);
        assert_eq!(config.resolve(1), Strategy::Linked);
        assert_eq!(config.resolve(10), Strategy::Linked);
        assert_eq!(config.resolve(11), Strategy::Indexed);
    }

    #[test]
    fn test_resolve_concrete() {
        let linked = SolverConfig::new().with_strategy(Strategy::Linked);
        assert_eq!(linked.resolve(1_000_000), Strategy::Linked);

        let indexed = SolverConfig::new().with_strategy(Strategy::Indexed);
        assert_eq!(indexed.resolve(1), Strategy::Indexed);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("auto".parse::<Strategy>(), Ok(Strategy::Auto));
        assert_eq!(" Linked ".parse::<Strategy>(), Ok(Strategy::Linked));
        assert_eq!("INDEXED".parse::<Strategy>(), Ok(Strategy::Indexed));
        assert!("tree".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_from_name() {
        let config = SolverConfig::from_name("indexed", 16).unwrap();
        assert_eq!(config.strategy, Strategy::Indexed);
        assert_eq!(config.linked_interval_limit, 16);

        assert_eq!(SolverConfig::from_name("auto", 64), Ok(SolverConfig::default()));

        let err = SolverConfig::from_name("tree", 64).unwrap_err();
        assert_eq!(err, ParseStrategyError("tree".to_string()));
        assert!(err.to_string().contains("expected auto, linked or indexed"));
    }

    #[test]
    fn test_strategy_display_matches_parse() {
        for strategy in [Strategy::Auto, Strategy::Linked, Strategy::Indexed] {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_config_serialization() {
        let config = SolverConfig::new().with_strategy(Strategy::Linked);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""strategy":"linked""#));

        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
