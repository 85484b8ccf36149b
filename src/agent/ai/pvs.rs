// Principal Variation Search (PVS)
//
// Assumes the first root action is the best one. It gets a full-window search
// to establish alpha; every later action is first probed with a null window
// (alpha, alpha + 1), which only answers "is this move better than alpha?".
//
// - probe <= alpha: fail-low, the move is no better; keep the current best
// - probe strictly inside (alpha, beta): the move may be better, so search it
//   again with the full window to get its exact value
// - probe >= beta: already the best possible value, exact as returned
//
// With alpha still at -inf the null window is empty and bounds nothing, so the
// move goes straight to a full-window search.

use crate::game_repr::{GameState, Score};
use super::alphabeta::min_value;

/// Pick the root action with the highest minimax value at `depth` plies,
/// using null-window probes for every action after the first.
///
/// The first action is the fallback: it is returned unless a later action
/// scores strictly higher.
pub fn pvs<S: GameState>(state: &S, depth: i32) -> Option<S::Action> {
    let player = state.player();
    let actions = state.actions();
    let (&first, rest) = actions.split_first()?;

    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;

    let mut best_move = first;
    let mut best_value = min_value(&state.result(first), alpha, beta, depth - 1, player);
    alpha = alpha.max(best_value);

    for &action in rest {
        let child = state.result(action);

        let value = if alpha.is_finite() {
            let probe = min_value(&child, alpha, null_window_bound(alpha), depth - 1, player);
            if probe > alpha && probe < beta {
                min_value(&child, alpha, beta, depth - 1, player)
            } else {
                probe
            }
        } else {
            min_value(&child, alpha, beta, depth - 1, player)
        };

        alpha = alpha.max(value);
        if value > best_value {
            best_value = value;
            best_move = action;
        }
    }

    Some(best_move)
}

/// Upper edge of the null window above `alpha`
fn null_window_bound(alpha: Score) -> Score {
    alpha + 1.0
}
