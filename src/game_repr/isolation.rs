// Knight's Isolation
//
// Two knights share an 11x9 board. On their first turn each player places
// their knight on any open cell; afterwards they must make a knight jump onto an
// open cell. Every cell a knight lands on is closed for the rest of the game.
// The player to move who has no open jump loses.
//
// The board is a single u128 bitboard of OPEN cells:
//
// | col 0..=10 | col 11, 12 |
// |   cells    |  padding   |   x 9 rows, stride 13
//
// Padding bits are never set, so a jump off the east or west edge hits a closed
// cell instead of wrapping onto the next row. The last row has no padding,
// which is why the highest index is 13 * 9 - 2.

use smallvec::SmallVec;
use std::fmt;

use super::{Action, Direction, GameError, GameState, PlayerId, Score};

pub const WIDTH: usize = 11;
pub const HEIGHT: usize = 9;
pub const ROW_STRIDE: i32 = WIDTH as i32 + 2;

/// Number of addressable bit positions (cells plus padding)
pub const BOARD_SIZE: usize = (WIDTH + 2) * HEIGHT - 2;

/// Bitboard with every real cell open
pub const BLANK_BOARD: u128 = blank_board();

const fn blank_board() -> u128 {
    let mut board = 0u128;
    let mut row = 0;
    while row < HEIGHT {
        board |= ((1u128 << WIDTH) - 1) << (row * (WIDTH + 2));
        row += 1;
    }
    board
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Isolation {
    board: u128,
    ply_count: u32,
    locs: [Option<usize>; 2],
}

impl Default for Isolation {
    fn default() -> Self {
        Self::new()
    }
}

impl Isolation {
    /// Empty board, no knights placed, first player to move
    pub fn new() -> Self {
        Self {
            board: BLANK_BOARD,
            ply_count: 0,
            locs: [None, None],
        }
    }

    /// Cell index for a (row, column) pair
    pub fn cell(row: usize, col: usize) -> usize {
        debug_assert!(row < HEIGHT && col < WIDTH);
        row * (WIDTH + 2) + col
    }

    /// (row, column) of a cell index
    pub fn coords(cell: usize) -> (usize, usize) {
        (cell / (WIDTH + 2), cell % (WIDTH + 2))
    }

    pub fn board(&self) -> u128 {
        self.board
    }

    pub fn is_open(&self, cell: usize) -> bool {
        cell < BOARD_SIZE && self.board & (1u128 << cell) != 0
    }

    /// Destination of a jump, if it stays inside the bit range
    fn target(loc: usize, dir: Direction) -> Option<usize> {
        let to = loc as i32 + dir.offset();
        if to < 0 || to >= BOARD_SIZE as i32 {
            None
        } else {
            Some(to as usize)
        }
    }

    fn open_cells(&self) -> SmallVec<[usize; 8]> {
        let mut cells = SmallVec::new();
        let mut open = self.board;
        while open != 0 {
            let cell = open.trailing_zeros() as usize;
            cells.push(cell);
            open &= open - 1;
        }
        cells
    }

    fn destination(&self, action: Action) -> Option<usize> {
        match (self.locs[self.player().index()], action) {
            (None, Action::Place(cell)) => Some(cell),
            (Some(loc), Action::Jump(dir)) => Self::target(loc, dir),
            _ => None,
        }
    }

    pub fn is_legal(&self, action: Action) -> bool {
        self.destination(action)
            .map_or(false, |cell| self.is_open(cell))
    }

    /// Checked transition for callers that have not validated `action`
    pub fn try_result(&self, action: Action) -> Result<Isolation, GameError> {
        if self.terminal_test() {
            return Err(GameError::GameOver {
                ply: self.ply_count,
            });
        }
        match self.destination(action) {
            Some(cell) if self.is_open(cell) => Ok(self.occupy(cell)),
            _ => Err(GameError::IllegalAction {
                action,
                ply: self.ply_count,
            }),
        }
    }

    fn occupy(&self, cell: usize) -> Isolation {
        let mut locs = self.locs;
        locs[self.player().index()] = Some(cell);
        Isolation {
            board: self.board & !(1u128 << cell),
            ply_count: self.ply_count + 1,
            locs,
        }
    }

    fn has_liberties(&self, player: PlayerId) -> bool {
        match self.locs[player.index()] {
            None => self.board != 0,
            Some(loc) => Direction::ALL
                .iter()
                .filter_map(|&dir| Self::target(loc, dir))
                .any(|cell| self.is_open(cell)),
        }
    }
}

impl GameState for Isolation {
    type Action = Action;
    type Location = usize;

    fn actions(&self) -> SmallVec<[Action; 8]> {
        match self.locs[self.player().index()] {
            None => self.open_cells().into_iter().map(Action::Place).collect(),
            Some(loc) => Direction::ALL
                .iter()
                .copied()
                .filter(|&dir| Self::target(loc, dir).map_or(false, |cell| self.is_open(cell)))
                .map(Action::Jump)
                .collect(),
        }
    }

    fn result(&self, action: Action) -> Self {
        debug_assert!(self.is_legal(action), "illegal action {:?}", action);
        match self.destination(action) {
            Some(cell) => self.occupy(cell),
            None => *self,
        }
    }

    fn terminal_test(&self) -> bool {
        !self.has_liberties(self.player())
    }

    fn utility(&self, player: PlayerId) -> Score {
        if !self.terminal_test() {
            return 0.0;
        }
        // The player to move is the one who is stuck
        if player == self.player() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn location(&self, player: PlayerId) -> Option<usize> {
        self.locs[player.index()]
    }

    fn liberties(&self, loc: Option<usize>) -> SmallVec<[usize; 8]> {
        match loc {
            None => self.open_cells(),
            Some(loc) => Direction::ALL
                .iter()
                .filter_map(|&dir| Self::target(loc, dir))
                .filter(|&cell| self.is_open(cell))
                .collect(),
        }
    }

    fn ply_count(&self) -> u32 {
        self.ply_count
    }
}

impl fmt::Display for Isolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for col in 0..WIDTH {
                let cell = Self::cell(row, col);
                let glyph = if self.locs[0] == Some(cell) {
                    '1'
                } else if self.locs[1] == Some(cell) {
                    '2'
                } else if self.is_open(cell) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", glyph)?;
                if col + 1 < WIDTH {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
