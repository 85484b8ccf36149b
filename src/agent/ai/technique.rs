//! Technique registry - maps search technique names onto searchers
//!
//! Each technique selects exactly one searcher and a depth schedule. Fixed-depth
//! techniques publish a single move; iterative ones publish one move per depth.
//! Unknown names degrade to a random legal move instead of failing the turn.

use std::fmt;
use std::ops::RangeInclusive;

use log::warn;

use super::alphabeta::alpha_beta;
use super::minimax::minimax;
use super::pvs::pvs;
use crate::config::SearchConfig;
use crate::game_repr::GameState;

/// A fixed-depth searcher: (state, depth) -> chosen action
pub type Searcher<S> = fn(&S, i32) -> Option<<S as GameState>::Action>;

/// Enumeration of available search techniques
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Technique {
    /// Exhaustive minimax at a fixed depth
    Minimax,
    /// Alpha-beta at a fixed depth
    AlphaBeta,
    /// Alpha-beta under iterative deepening
    AlphaBetaIterative,
    /// Principal variation search under iterative deepening
    #[default]
    Pvs,
    /// Uniformly random legal move, no search
    Random,
}

impl Technique {
    /// Get all techniques, e.g. for CLI help
    pub fn all() -> &'static [Technique] {
        &[
            Technique::Minimax,
            Technique::AlphaBeta,
            Technique::AlphaBetaIterative,
            Technique::Pvs,
            Technique::Random,
        ]
    }

    /// Canonical name, as accepted by [`Technique::from_name`]
    pub fn name(&self) -> &'static str {
        match self {
            Technique::Minimax => "minimax",
            Technique::AlphaBeta => "alphabeta",
            Technique::AlphaBetaIterative => "alphabeta_iterative",
            Technique::Pvs => "pvs",
            Technique::Random => "random",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Technique::Minimax => "Exhaustive minimax, single fixed-depth search",
            Technique::AlphaBeta => "Alpha-beta pruning, single fixed-depth search",
            Technique::AlphaBetaIterative => "Alpha-beta pruning with iterative deepening",
            Technique::Pvs => "Principal variation search with iterative deepening",
            Technique::Random => "Uniformly random legal move",
        }
    }

    /// Look a technique up by name.
    ///
    /// `minmax` is accepted as an alias for `minimax`. Anything unrecognised
    /// falls back to [`Technique::Random`].
    pub fn from_name(name: &str) -> Technique {
        match name.trim() {
            "minimax" | "minmax" => Technique::Minimax,
            "alphabeta" => Technique::AlphaBeta,
            "alphabeta_iterative" => Technique::AlphaBetaIterative,
            "pvs" => Technique::Pvs,
            "random" => Technique::Random,
            other => {
                warn!("unknown technique '{}', falling back to random moves", other);
                Technique::Random
            }
        }
    }

    /// Whether the technique publishes one move per completed depth
    pub fn is_iterative(&self) -> bool {
        matches!(self, Technique::AlphaBetaIterative | Technique::Pvs)
    }

    /// Searcher behind this technique, `None` for random play
    pub fn searcher<S: GameState>(&self) -> Option<Searcher<S>> {
        match self {
            Technique::Minimax => Some(minimax::<S> as Searcher<S>),
            Technique::AlphaBeta | Technique::AlphaBetaIterative => {
                Some(alpha_beta::<S> as Searcher<S>)
            }
            Technique::Pvs => Some(pvs::<S> as Searcher<S>),
            Technique::Random => None,
        }
    }

    /// Depths searched, in order, one published move each.
    ///
    /// An iterative limit below 1 runs a single search at that depth, which
    /// ranks the root actions by evaluation.
    pub fn depths(&self, config: &SearchConfig) -> RangeInclusive<i32> {
        match self {
            Technique::Minimax => config.minimax_depth..=config.minimax_depth,
            Technique::AlphaBeta => config.alphabeta_depth..=config.alphabeta_depth,
            Technique::AlphaBetaIterative | Technique::Pvs if config.depth_limit < 1 => {
                config.depth_limit..=config.depth_limit
            }
            Technique::AlphaBetaIterative | Technique::Pvs => 1..=config.depth_limit,
            #[allow(clippy::reversed_empty_ranges)]
            Technique::Random => 1..=0,
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
