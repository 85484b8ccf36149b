// Position evaluation function
// Returns the mobility difference (positive = good for `player`)

use crate::game_repr::{GameState, PlayerId, Score};

/// Static score of a non-terminal position from `player`'s point of view.
///
/// Counts the cells `player` could jump to next and subtracts the opponent's
/// count. Terminal states are never passed here; searchers check
/// `terminal_test()` first and use the exact utility instead.
pub fn score<S: GameState>(state: &S, player: PlayerId) -> Score {
    let own_liberties = state.liberties(state.location(player)).len();
    let opp_liberties = state.liberties(state.location(player.opponent())).len();
    own_liberties as Score - opp_liberties as Score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{Action, Direction, Isolation};

    fn position(first: usize, second: usize) -> Isolation {
        Isolation::new()
            .result(Action::Place(first))
            .result(Action::Place(second))
    }

    #[test]
    fn test_center_against_corner() {
        let pos = position(Isolation::cell(4, 5), Isolation::cell(0, 0));

        assert_eq!(score(&pos, PlayerId::First), 8.0 - 2.0);
        assert_eq!(score(&pos, PlayerId::Second), 2.0 - 8.0);
    }

    #[test]
    fn test_perspective_flip() {
        let pos = position(Isolation::cell(3, 3), Isolation::cell(6, 9))
            .result(Action::Jump(Direction::ENE));

        assert_eq!(score(&pos, PlayerId::First), -score(&pos, PlayerId::Second));
    }

    #[test]
    fn test_symmetric_position_is_balanced() {
        // Mirror-image corners
        let pos = position(Isolation::cell(0, 0), Isolation::cell(8, 10));
        assert_eq!(score(&pos, PlayerId::First), 0.0);
    }
}
