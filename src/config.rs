//! Configuration types for the search agent and the match harness.

use std::time::Duration;

use crate::agent::ai::Technique;

/// Search parameters for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Technique used once the opening plies are over
    pub technique: Technique,
    /// Deepest iteration for iterative techniques
    pub depth_limit: i32,
    /// Fixed depth for `minimax`
    pub minimax_depth: i32,
    /// Fixed depth for `alphabeta`
    pub alphabeta_depth: i32,
    /// While fewer plies than this have been played, move at random
    pub opening_random_plies: u32,
    /// Seed for the random fallback (`None` = seeded from entropy)
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            technique: Technique::default(),
            depth_limit: 5,
            minimax_depth: 3,
            alphabeta_depth: 5,
            opening_random_plies: 2,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_technique(technique: Technique) -> Self {
        Self {
            technique,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Parameters for playing games between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Wall-clock budget per turn
    pub time_limit: Duration,
    /// Number of rounds to play
    pub rounds: usize,
    /// Play each round twice with seats swapped
    pub fair: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_millis(150),
            rounds: 1,
            fair: true,
        }
    }
}

impl MatchConfig {
    /// Total number of games this configuration plays
    pub fn games(&self) -> usize {
        if self.fair {
            self.rounds * 2
        } else {
            self.rounds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.technique, Technique::Pvs);
        assert_eq!(config.depth_limit, 5);
        assert_eq!(config.minimax_depth, 3);
        assert_eq!(config.alphabeta_depth, 5);
        assert_eq!(config.opening_random_plies, 2);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_with_technique_keeps_defaults() {
        let config = SearchConfig::with_technique(Technique::Minimax).with_seed(3);
        assert_eq!(config.technique, Technique::Minimax);
        assert_eq!(config.depth_limit, 5);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_match_game_count() {
        let config = MatchConfig {
            rounds: 3,
            ..MatchConfig::default()
        };
        assert_eq!(config.games(), 6);
        assert_eq!(MatchConfig { fair: false, ..config }.games(), 3);
        assert_eq!(MatchConfig::default().time_limit, Duration::from_millis(150));
    }
}
