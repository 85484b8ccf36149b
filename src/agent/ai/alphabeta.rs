// Minimax with Alpha-Beta Pruning
//
// Same tree and the same leaf values as plain minimax, but each node carries
// an (alpha, beta) window:
// - alpha: value `player` is already guaranteed higher up the tree
// - beta:  value the opponent is already guaranteed higher up the tree
//
// A max node stops as soon as one child reaches beta (the opponent would never
// let the game get here), a min node as soon as one child drops to alpha.
// Pruned nodes return a bound rather than an exact value, but a bound that can
// never beat the move already chosen, so the root picks the same action as
// minimax does.
//
// Both value functions are shared with the PVS searcher, which reuses them
// with narrowed windows.

use crate::game_repr::{GameState, PlayerId, Score};
use super::evaluation::score;

/// Pick the root action with the highest minimax value at `depth` plies,
/// pruning subtrees that cannot change the choice.
///
/// Every root action is searched; alpha only tightens the windows handed to
/// their subtrees. Ties go to the earliest action, as in minimax.
pub fn alpha_beta<S: GameState>(state: &S, depth: i32) -> Option<S::Action> {
    let player = state.player();
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best: Option<(S::Action, Score)> = None;

    for action in state.actions() {
        let value = min_value(&state.result(action), alpha, beta, depth - 1, player);
        alpha = alpha.max(value);

        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((action, value)),
        }
    }

    best.map(|(action, _)| action)
}

/// Value of a node where `player` is to move.
///
/// Returns a lower bound when it fails high (result >= beta).
pub(crate) fn max_value<S: GameState>(
    state: &S,
    mut alpha: Score,
    beta: Score,
    depth: i32,
    player: PlayerId,
) -> Score {
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth <= 0 {
        return score(state, player);
    }

    let mut value = f64::NEG_INFINITY;
    for action in state.actions() {
        value = value.max(min_value(&state.result(action), alpha, beta, depth - 1, player));
        if value >= beta {
            // Beta cutoff
            return value;
        }
        alpha = alpha.max(value);
    }
    value
}

/// Value of a node where `player`'s opponent is to move.
///
/// Returns an upper bound when it fails low (result <= alpha).
pub(crate) fn min_value<S: GameState>(
    state: &S,
    alpha: Score,
    mut beta: Score,
    depth: i32,
    player: PlayerId,
) -> Score {
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth <= 0 {
        return score(state, player);
    }

    let mut value = f64::INFINITY;
    for action in state.actions() {
        value = value.min(max_value(&state.result(action), alpha, beta, depth - 1, player));
        if value <= alpha {
            // Alpha cutoff
            return value;
        }
        beta = beta.min(value);
    }
    value
}
