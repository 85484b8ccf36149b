pub mod player;
pub use player::*;

pub mod sample_players;
pub use sample_players::*;

pub mod ai;
pub use ai::{SearchPlayer, SearchResult, Technique};
