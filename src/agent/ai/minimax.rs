// Plain Minimax
//
// Exhaustive fixed-depth search with no pruning. Every node at every ply is
// visited, so the cost is exponential in depth. It is kept as the reference
// the pruning searchers are checked against: for the same state and depth,
// alpha-beta and PVS must pick exactly the move this picks.
//
// Values are always from the point of view of `player`, the side to move at
// the root. `max_value` handles `player`'s plies, `min_value` the opponent's.

use crate::game_repr::{GameState, PlayerId, Score};
use super::evaluation::score;

/// Pick the root action with the highest minimax value at `depth` plies.
///
/// Ties go to the earliest action in `state.actions()` order. Returns `None`
/// only when there is no legal action.
pub fn minimax<S: GameState>(state: &S, depth: i32) -> Option<S::Action> {
    let player = state.player();
    let mut best: Option<(S::Action, Score)> = None;

    for action in state.actions() {
        let value = min_value(&state.result(action), depth - 1, player);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
    }

    best.map(|(action, _)| action)
}

fn max_value<S: GameState>(state: &S, depth: i32, player: PlayerId) -> Score {
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth <= 0 {
        return score(state, player);
    }

    state
        .actions()
        .into_iter()
        .map(|action| min_value(&state.result(action), depth - 1, player))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn min_value<S: GameState>(state: &S, depth: i32, player: PlayerId) -> Score {
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth <= 0 {
        return score(state, player);
    }

    state
        .actions()
        .into_iter()
        .map(|action| max_value(&state.result(action), depth - 1, player))
        .fold(f64::INFINITY, f64::min)
}

/// Exact minimax value of playing `action` from `state`.
#[cfg(test)]
pub(crate) fn action_value<S: GameState>(state: &S, action: S::Action, depth: i32) -> Score {
    min_value(&state.result(action), depth - 1, state.player())
}

/// Exact minimax value of `state` for the side to move.
#[cfg(test)]
pub(crate) fn state_value<S: GameState>(state: &S, depth: i32) -> Score {
    max_value(state, depth, state.player())
}
