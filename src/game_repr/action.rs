use std::fmt;

use super::isolation::ROW_STRIDE;

/*-------KNIGHT OFFSETS--------*/

// Cells are indexed row * ROW_STRIDE + column. Each row carries two closed
// padding columns, so a jump that would leave the board lands on padding
// instead of wrapping into the neighbouring row.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    NNE,
    ENE,
    ESE,
    SSE,
    SSW,
    WSW,
    WNW,
    NNW,
}

impl Direction {
    /// All knight directions, in the order actions are generated
    pub const ALL: [Direction; 8] = [
        Direction::NNE,
        Direction::ENE,
        Direction::ESE,
        Direction::SSE,
        Direction::SSW,
        Direction::WSW,
        Direction::WNW,
        Direction::NNW,
    ];

    /// Change in cell index produced by this jump
    pub const fn offset(self) -> i32 {
        match self {
            Direction::NNE => 2 * ROW_STRIDE + 1,
            Direction::ENE => ROW_STRIDE + 2,
            Direction::ESE => -ROW_STRIDE + 2,
            Direction::SSE => -2 * ROW_STRIDE + 1,
            Direction::SSW => -2 * ROW_STRIDE - 1,
            Direction::WSW => -ROW_STRIDE - 2,
            Direction::WNW => ROW_STRIDE - 2,
            Direction::NNW => 2 * ROW_STRIDE - 1,
        }
    }
}

/// A move in knight's Isolation.
///
/// A player enters the board by placing their knight on any open cell; every
/// later move is a knight jump relative to the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Place(usize),
    Jump(Direction),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(cell) => write!(f, "place@{}", cell),
            Action::Jump(dir) => write!(f, "{:?}", dir),
        }
    }
}
