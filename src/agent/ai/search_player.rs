//! SearchPlayer - the Isolation agent built on the search engine
//!
//! Publishes every estimate the iterative deepening driver produces, so the
//! host always holds the move from the deepest completed search. When the host
//! stops listening the player returns at the next publish.
//!
//! # Examples
//!
//! ```
//! use knight_isolation::agent::ai::{SearchPlayer, Technique};
//! use knight_isolation::agent::player::Player;
//! use knight_isolation::config::SearchConfig;
//! use knight_isolation::game_repr::{Action, Isolation};
//!
//! let mut ai = SearchPlayer::new(SearchConfig::with_technique(Technique::Pvs).with_seed(1));
//! let mut published: Vec<Action> = Vec::new();
//! ai.get_action(&Isolation::new(), &mut published);
//! assert_eq!(published.len(), 1);
//! ```

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::search::search;
use super::technique::Technique;
use crate::agent::player::{ActionSink, Player};
use crate::config::SearchConfig;
use crate::game_repr::GameState;

/// AI player that answers each turn with iterative deepening search
pub struct SearchPlayer {
    config: SearchConfig,
    /// Source for the random opening and fallback moves
    rng: StdRng,
    name: String,
}

impl SearchPlayer {
    /// Create a player; a configured seed makes its random moves reproducible
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let name = format!("AI ({})", config.technique.name());
        Self { config, rng, name }
    }

    /// Default settings with the given technique
    pub fn with_technique(technique: Technique) -> Self {
        Self::new(SearchConfig::with_technique(technique))
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Switch technique for future turns; the name follows
    pub fn set_technique(&mut self, technique: Technique) {
        self.config.technique = technique;
        self.name = format!("AI ({})", technique.name());
    }
}

impl<S: GameState> Player<S> for SearchPlayer {
    fn get_action(&mut self, state: &S, sink: &mut dyn ActionSink<S::Action>) {
        let mut published = 0usize;

        for result in search(state, &self.config, &mut self.rng) {
            published += 1;
            if !sink.put(result.best_move) {
                debug!("[{}] host stopped listening after depth {}", self.name, result.depth);
                return;
            }
        }

        if published == 0 {
            warn!("[{}] no legal action at ply {}", self.name, state.ply_count());
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
