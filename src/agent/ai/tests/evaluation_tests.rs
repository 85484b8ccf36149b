// Evaluation properties over many positions

use crate::agent::ai::evaluation::score;
use crate::game_repr::{Action, GameState, Isolation, PlayerId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Every non-terminal position reached by a few random games
fn sampled_positions(seed: u64) -> Vec<Isolation> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::new();

    for _ in 0..10 {
        let mut state = Isolation::new();
        while !state.terminal_test() {
            positions.push(state);
            let action: Action = *state.actions().choose(&mut rng).expect("non-terminal has actions");
            state = state.result(action);
        }
    }
    positions
}

#[test]
fn test_score_is_liberty_difference() {
    for pos in sampled_positions(11) {
        let own = pos.liberties(pos.location(PlayerId::First)).len() as f64;
        let opp = pos.liberties(pos.location(PlayerId::Second)).len() as f64;
        assert_eq!(score(&pos, PlayerId::First), own - opp);
    }
}

#[test]
fn test_score_is_antisymmetric() {
    for pos in sampled_positions(12) {
        assert_eq!(score(&pos, PlayerId::First), -score(&pos, PlayerId::Second));
    }
}

#[test]
fn test_score_is_bounded_by_knight_mobility() {
    for pos in sampled_positions(13).into_iter().filter(|p| p.ply_count() >= 2) {
        let value = score(&pos, PlayerId::First);
        assert!((-8.0..=8.0).contains(&value), "score {} out of range", value);
    }
}
