//! The game interface the search engine is written against.
//!
//! Searchers never look inside a position: they enumerate actions, apply them to
//! get successor states, and ask for terminal utilities or liberties. Any
//! two-player, zero-sum, perfect-information game that can answer those
//! questions can be searched.

use smallvec::SmallVec;
use std::fmt;

/// Position desirability from one player's point of view.
///
/// Infinite values are used for decided games and as alpha-beta sentinels.
pub type Score = f64;

/// Identifies one of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// Moves on even plies
    First,
    /// Moves on odd plies
    Second,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Index usable for per-player arrays
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Player to move after `ply_count` plies have been played
    pub fn for_ply(ply_count: u32) -> PlayerId {
        if ply_count % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::First => write!(f, "player 1"),
            PlayerId::Second => write!(f, "player 2"),
        }
    }
}

/// Immutable game position.
///
/// Every transition produces a new value; implementations must never mutate
/// `self`. `actions()` must return actions in a deterministic order, since the
/// searchers break ties by that order.
pub trait GameState: Clone {
    /// Opaque move token
    type Action: Copy + Eq + fmt::Debug;
    /// A cell a piece can stand on
    type Location: Copy + Eq + fmt::Debug;

    /// Legal actions for the player to move, in a stable order
    fn actions(&self) -> SmallVec<[Self::Action; 8]>;

    /// Successor state after `action`. The action must be legal.
    fn result(&self, action: Self::Action) -> Self;

    /// True once the player to move has no legal action
    fn terminal_test(&self) -> bool;

    /// Final value of the game for `player`; zero for non-terminal states
    fn utility(&self, player: PlayerId) -> Score;

    /// Where `player` currently stands, `None` before their first placement
    fn location(&self, player: PlayerId) -> Option<Self::Location>;

    /// Cells reachable in one move from `loc` (every open cell for `None`)
    fn liberties(&self, loc: Option<Self::Location>) -> SmallVec<[Self::Location; 8]>;

    /// Number of plies played so far
    fn ply_count(&self) -> u32;

    /// Player to move
    fn player(&self) -> PlayerId {
        PlayerId::for_ply(self.ply_count())
    }
}
