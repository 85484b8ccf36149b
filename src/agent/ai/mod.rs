// Search AI - Minimax, Alpha-Beta and PVS under Iterative Deepening
//
// This module implements the move-search engine used by the Isolation agent.
//
// Key features:
// - Exhaustive minimax as the reference searcher
// - Alpha-beta pruning that picks exactly the minimax move
// - Principal variation search with null-window probes and re-search
// - Iterative deepening as a lazy iterator of per-depth best moves
// - Mobility evaluation (own liberties minus opponent liberties)

mod alphabeta;
mod evaluation;
mod minimax;
mod pvs;
mod search;
mod search_player;
mod technique;

#[cfg(test)]
mod tests;

pub use alphabeta::alpha_beta;
pub use evaluation::score;
pub use minimax::minimax;
pub use pvs::pvs;
pub use search::{random_action, search, Search, SearchResult};
pub use search_player::SearchPlayer;
pub use technique::{Searcher, Technique};
